//! 预置拓扑
//!
//! 节点依次命名为 `n0, n1, ...`。

use super::spec::{LinkSpec, TopologySpec};

/// 预置拓扑配置选项
#[derive(Debug, Clone)]
pub struct PresetOpts {
    pub nodes: usize,
    /// 每条链路的代价
    pub weight: i64,
}

impl Default for PresetOpts {
    fn default() -> Self {
        Self { nodes: 4, weight: 1 }
    }
}

fn names(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("n{i}")).collect()
}

/// 链状拓扑：n0 - n1 - ... - n{k-1}
pub fn line(opts: &PresetOpts) -> TopologySpec {
    let nodes = names(opts.nodes);
    let links = nodes
        .windows(2)
        .map(|w| LinkSpec::new(&w[0], &w[1], opts.weight))
        .collect();
    TopologySpec {
        nodes,
        links,
        nodes_line: None,
    }
}

/// 环状拓扑：链状再加一条 n{k-1} - n0；少于 3 个节点时退化为链
pub fn ring(opts: &PresetOpts) -> TopologySpec {
    let mut spec = line(opts);
    if let [first, _, .., last] = &spec.nodes[..] {
        spec.links.push(LinkSpec::new(last, first, opts.weight));
    }
    spec
}
