//! 运行期拓扑变更
//!
//! 只修正被直接影响的一跳条目；其他节点经由该链路学到的多跳路由
//! 保持原样，等待后续轮次传播（删除链路后若没有替代路径，旧条目会一直留着）。

use super::network::Network;
use super::routing::RouteEntry;
use crate::error::{Error, Result};
use tracing::info;

/// 把驱动层输入的代价文本解析为整数
pub fn parse_cost(raw: &str) -> Result<i64> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| Error::InvalidCost(raw.trim().to_string()))
}

impl Network {
    /// 修改 {a, b} 链路的代价，并覆盖两端互相的直连条目为 (w, other, -)
    #[tracing::instrument(skip(self))]
    pub fn change_cost(&mut self, a: &str, b: &str, weight: i64) -> Result<()> {
        let not_found = || Error::LinkNotFound {
            a: a.to_string(),
            b: b.to_string(),
        };
        let ia = self.node_id(a).ok_or_else(not_found)?;
        let ib = self.node_id(b).ok_or_else(not_found)?;
        let lid = self.link_between(ia, ib).ok_or_else(not_found)?;

        if let Some(link) = self.link_mut(lid) {
            link.weight = weight;
        }
        self.node_mut(ia).table.insert(ib, RouteEntry::direct(weight, ib));
        self.node_mut(ib).table.insert(ia, RouteEntry::direct(weight, ia));

        info!(link = lid.0, weight, "链路代价已更新");
        Ok(())
    }

    /// 删除 {a, b} 链路：先删两端互相的直连条目，再从邻接集合与 arena 中移除
    #[tracing::instrument(skip(self))]
    pub fn delete_link(&mut self, a: &str, b: &str) -> Result<()> {
        let not_found = || Error::LinkNotFound {
            a: a.to_string(),
            b: b.to_string(),
        };
        let ia = self.node_id(a).ok_or_else(not_found)?;
        let ib = self.node_id(b).ok_or_else(not_found)?;
        let lid = self.link_between(ia, ib).ok_or_else(not_found)?;

        self.node_mut(ia).table.remove(ib);
        self.node_mut(ib).table.remove(ia);
        self.remove_link(lid);

        info!(link = lid.0, "链路已删除");
        Ok(())
    }
}
