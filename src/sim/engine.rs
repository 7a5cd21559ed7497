//! 收敛引擎
//!
//! 同步的 Bellman-Ford 轮次：本轮所有节点都只读取上一轮结束时的
//! 路由表快照，因此按顺序逐个更新等价于所有节点"同时"更新。

use crate::net::{Network, NodeId, RouteEntry, RoutingTable};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

/// 松弛轮次的变体
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepVariant {
    Plain,
    SplitHorizon,
}

/// 第 0 轮（邻居发现）：每条链路两端互相写入直连条目 (w, 邻居, -)
#[tracing::instrument(skip(net), fields(links = net.link_count()))]
pub fn first_step(net: &mut Network) {
    let links: Vec<_> = net.links().map(|(_, l)| (l.a, l.b, l.weight)).collect();
    for (a, b, w) in links {
        net.node_mut(a).table.insert(b, RouteEntry::direct(w, b));
        net.node_mut(b).table.insert(a, RouteEntry::direct(w, a));
    }
    info!("🔎 邻居发现完成");
}

/// 普通距离向量轮次；推进轮次计数并返回本轮更新的条目数
pub fn step(net: &mut Network, round: &mut u64) -> usize {
    run_round(net, round, StepVariant::Plain)
}

/// 启用 split horizon 的轮次：邻居从本节点学到的条目不再被学回来
pub fn step_split_horizon(net: &mut Network, round: &mut u64) -> usize {
    run_round(net, round, StepVariant::SplitHorizon)
}

/// 按变体执行一轮
#[tracing::instrument(skip(net, round), fields(t = *round))]
pub fn run_round(net: &mut Network, round: &mut u64, variant: StepVariant) -> usize {
    // 先对所有节点拍快照，再开始更新
    let snapshot: Vec<RoutingTable> = net.nodes().map(|n| n.table().clone()).collect();

    let mut updates = 0;
    for idx in 0..net.node_count() {
        let node = NodeId(idx);
        let neighbors: Vec<(NodeId, i64)> = net.neighbors(node).collect();

        for (via, weight) in neighbors {
            for (dest, adv) in snapshot[via.0].iter() {
                if dest == node {
                    continue;
                }
                if variant == StepVariant::SplitHorizon && adv.origin == Some(node) {
                    trace!(node = idx, dest = dest.0, via = via.0, "split horizon 抑制");
                    continue;
                }
                let cost = adv.cost.saturating_add(weight);
                if net.node_mut(node).table.relax(dest, cost, via) {
                    updates += 1;
                    debug!(
                        node = net.name(node),
                        dest = net.name(dest),
                        cost,
                        via = net.name(via),
                        "路由条目更新"
                    );
                }
            }
        }
    }

    *round += 1;
    info!(t = *round, updates, ?variant, "轮次完成");
    updates
}
