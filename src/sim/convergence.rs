//! 收敛检测
//!
//! 每轮结束后按节点名/目的地名捕获完整路由状态；相邻两轮的快照
//! 结构相等即视为收敛。比较基于有序 map，与遍历顺序无关。

use std::collections::BTreeMap;
use std::fmt;

use crate::net::{Network, NodeId};
use serde::{Deserialize, Serialize};

/// 快照中的单个条目（用名字而非 id，便于比较与序列化）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotEntry {
    pub cost: i64,
    pub next_hop: Option<String>,
    pub origin: Option<String>,
}

/// 某一轮所有节点的路由表：node -> dest -> entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoutingSnapshot {
    tables: BTreeMap<String, BTreeMap<String, SnapshotEntry>>,
}

impl RoutingSnapshot {
    pub fn capture(net: &Network) -> Self {
        let name_of = |id: NodeId| net.name(id).to_string();
        let tables: BTreeMap<_, _> = net
            .nodes()
            .map(|node| {
                let table: BTreeMap<String, SnapshotEntry> = node
                    .table()
                    .iter()
                    .map(|(dest, e)| {
                        let entry = SnapshotEntry {
                            cost: e.cost,
                            next_hop: e.next_hop.map(name_of),
                            origin: e.origin.map(name_of),
                        };
                        (name_of(dest), entry)
                    })
                    .collect();
                (node.name().to_string(), table)
            })
            .collect();
        Self { tables }
    }

    pub fn table(&self, node: &str) -> Option<&BTreeMap<String, SnapshotEntry>> {
        self.tables.get(node)
    }

    pub fn entry(&self, node: &str, dest: &str) -> Option<&SnapshotEntry> {
        self.tables.get(node)?.get(dest)
    }

    pub fn nodes(&self) -> impl Iterator<Item = &str> + '_ {
        self.tables.keys().map(String::as_str)
    }

    /// 转发状态是否与 `prev` 相同：同样的节点集合、每个节点同样的
    /// 目的地集合，以及相同的 (cost, next_hop)。
    ///
    /// origin 只是 split horizon 的内部标记，不参与比较。
    pub fn converged_with(&self, prev: &RoutingSnapshot) -> bool {
        self.tables.len() == prev.tables.len()
            && self.tables.iter().all(|(node, table)| {
                prev.tables.get(node).is_some_and(|old| {
                    table.len() == old.len()
                        && table.iter().all(|(dest, e)| {
                            old.get(dest).is_some_and(|o| {
                                o.cost == e.cost && o.next_hop == e.next_hop
                            })
                        })
                })
            })
    }
}

/// `From A (cost/via): \tA: 0 / None\tB: 1 / B\t` 每节点一行
impl fmt::Display for RoutingSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (node, table) in &self.tables {
            write!(f, "From {node} (cost/via): \t")?;
            for (dest, e) in table {
                let via = e.next_hop.as_deref().unwrap_or("None");
                write!(f, "{dest}: {} / {via}\t", e.cost)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
