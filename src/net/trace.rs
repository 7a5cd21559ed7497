//! 路径追踪
//!
//! 只依据各节点本地路由表的 next-hop 链还原转发路径，因此能看到
//! 收敛过程中（或删除链路后）的陈旧路由。

use super::id::NodeId;
use super::network::Network;
use crate::error::{Error, Result};
use tracing::{debug, warn};

impl Network {
    /// 从 `from` 出发沿 next-hop 走到 `to`，返回途经节点名（含两端）。
    ///
    /// 跳数上限为节点数；超过则认为路由表中存在转发环。
    #[tracing::instrument(skip(self))]
    pub fn trace_path(&self, from: &str, to: &str) -> Result<Vec<String>> {
        let path = self.trace_ids(from, to)?;
        Ok(path.into_iter().map(|id| self.name(id).to_string()).collect())
    }

    fn trace_ids(&self, from: &str, to: &str) -> Result<Vec<NodeId>> {
        let unknown = || Error::RouteUnknown {
            from: from.to_string(),
            to: to.to_string(),
        };
        let src = self.node_id(from).ok_or_else(unknown)?;
        let dst = self.node_id(to).ok_or_else(unknown)?;
        if !self.node(src).table().contains(dst) {
            return Err(unknown());
        }

        let mut path = vec![src];
        let mut cur = src;
        while cur != dst {
            let entry = self.node(cur).table().get(dst).ok_or_else(unknown)?;
            // 只有自身条目没有 next hop
            let next = entry.next_hop.ok_or_else(unknown)?;
            path.push(next);
            debug!(at = self.name(cur), next = self.name(next), "沿 next hop 前进");

            let hops = path.len() - 1;
            if hops > self.node_count() {
                warn!(hops, "追踪超过跳数上限");
                return Err(Error::RouteCycleDetected {
                    from: from.to_string(),
                    to: to.to_string(),
                    hops,
                });
            }
            cur = next;
        }
        Ok(path)
    }
}
