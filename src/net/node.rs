//! 节点类型
//!
//! 路由器节点：名字、邻接链路集合（只保存 id）与本地路由表。

use std::collections::BTreeSet;

use super::id::{LinkId, NodeId};
use super::routing::RoutingTable;

/// 距离向量路由器
#[derive(Debug, Clone)]
pub struct Node {
    id: NodeId,
    name: String,
    /// 关联链路；按 id 有序，保证每轮遍历邻居的顺序确定
    pub(crate) links: BTreeSet<LinkId>,
    pub(crate) table: RoutingTable,
}

impl Node {
    /// 创建新节点（空邻接、空路由表）
    pub fn new(id: NodeId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            links: BTreeSet::new(),
            table: RoutingTable::default(),
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn links(&self) -> impl Iterator<Item = LinkId> + '_ {
        self.links.iter().copied()
    }

    pub fn table(&self) -> &RoutingTable {
        &self.table
    }
}
