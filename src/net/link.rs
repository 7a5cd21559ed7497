//! 链路类型
//!
//! 无向带权链路，由 `Network` 集中持有，两端节点只保存 `LinkId`。

use super::id::NodeId;

/// 无向链路
#[derive(Debug, Clone)]
pub struct Link {
    pub a: NodeId,
    pub b: NodeId,
    /// 链路代价，可在运行期修改
    pub weight: i64,
}

impl Link {
    /// 创建新链路
    pub fn new(a: NodeId, b: NodeId, weight: i64) -> Self {
        Self { a, b, weight }
    }

    /// 给定一端，返回另一端；`node` 不是端点时返回 None。
    pub fn other_end(&self, node: NodeId) -> Option<NodeId> {
        if node == self.a {
            Some(self.b)
        } else if node == self.b {
            Some(self.a)
        } else {
            None
        }
    }

    /// 端点集合是否恰为 {x, y}（与顺序无关）
    pub fn joins(&self, x: NodeId, y: NodeId) -> bool {
        (self.a == x && self.b == y) || (self.a == y && self.b == x)
    }
}
