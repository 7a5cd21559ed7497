//! 距离向量路由表
//!
//! 每个节点持有一张 `destination -> RouteEntry` 的表：
//! - `cost`：到目的地的当前最优总代价
//! - `next_hop`：转发时经过的邻居（仅自身条目为 None）
//! - `origin`：该条目最近一次从哪个邻居学到（仅用于 split horizon，
//!   每次松弛都会被覆盖为转发邻居，不是完整的路径来源）

use std::collections::BTreeMap;

use super::id::NodeId;

/// 路由条目
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteEntry {
    pub cost: i64,
    pub next_hop: Option<NodeId>,
    pub origin: Option<NodeId>,
}

impl RouteEntry {
    /// 节点关于自身的条目：(0, -, -)
    pub const SELF: RouteEntry = RouteEntry {
        cost: 0,
        next_hop: None,
        origin: None,
    };

    /// 直连邻居条目：(w, neighbor, -)
    pub fn direct(weight: i64, neighbor: NodeId) -> Self {
        Self {
            cost: weight,
            next_hop: Some(neighbor),
            origin: None,
        }
    }

    /// 经邻居 `via` 学到的条目：next_hop 与 origin 都是 `via`
    pub fn learned(cost: i64, via: NodeId) -> Self {
        Self {
            cost,
            next_hop: Some(via),
            origin: Some(via),
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RoutingTable {
    entries: BTreeMap<NodeId, RouteEntry>,
}

impl RoutingTable {
    pub fn get(&self, dest: NodeId) -> Option<&RouteEntry> {
        self.entries.get(&dest)
    }

    pub fn contains(&self, dest: NodeId) -> bool {
        self.entries.contains_key(&dest)
    }

    /// 无条件写入（覆盖已有条目）
    pub fn insert(&mut self, dest: NodeId, entry: RouteEntry) {
        self.entries.insert(dest, entry);
    }

    pub fn remove(&mut self, dest: NodeId) -> Option<RouteEntry> {
        self.entries.remove(&dest)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &RouteEntry)> + '_ {
        self.entries.iter().map(|(&d, e)| (d, e))
    }

    /// Bellman-Ford 松弛：没有条目或候选代价严格更小时采用 `via`。
    ///
    /// 代价相等时保留原路由，避免等价路径之间来回切换。
    /// 返回是否发生了更新。
    pub fn relax(&mut self, dest: NodeId, cost: i64, via: NodeId) -> bool {
        match self.entries.get(&dest) {
            Some(cur) if cost >= cur.cost => false,
            _ => {
                self.entries.insert(dest, RouteEntry::learned(cost, via));
                true
            }
        }
    }
}
