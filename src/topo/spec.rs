//! 拓扑描述
//!
//! 文本格式：
//! ```text
//! # 注释行
//! A B C          <- 第一行：节点名
//! A B 1          <- 之后每行：端点, 端点, 整数代价
//! B C 1
//! ```
//! 也支持同构的 JSON：`{"nodes": [...], "links": [{"a":..,"b":..,"weight":..}]}`。

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::net::Network;
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopologySpec {
    pub nodes: Vec<String>,
    #[serde(default)]
    pub links: Vec<LinkSpec>,
    /// 节点行所在的源文本行号
    #[serde(skip)]
    pub nodes_line: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkSpec {
    pub a: String,
    pub b: String,
    pub weight: i64,
    #[serde(skip)]
    pub line: Option<usize>,
}

impl LinkSpec {
    pub fn new(a: impl Into<String>, b: impl Into<String>, weight: i64) -> Self {
        Self {
            a: a.into(),
            b: b.into(),
            weight,
            line: None,
        }
    }
}

/// 解析文本格式
pub fn parse_text(raw: &str) -> Result<TopologySpec> {
    let mut lines = raw
        .lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l.trim()))
        .filter(|(_, l)| !l.is_empty() && !l.starts_with('#'));

    let (nodes_line, first) = lines
        .next()
        .ok_or_else(|| Error::malformed(None, "empty topology"))?;
    let nodes = first.split_whitespace().map(str::to_string).collect();

    let mut links = Vec::new();
    for (line_no, line) in lines {
        let parts: Vec<&str> = line.split_whitespace().collect();
        let [a, b, w] = parts[..] else {
            return Err(Error::malformed(
                Some(line_no),
                format!("expected `<node> <node> <weight>`, got `{line}`"),
            ));
        };
        let weight = w
            .parse::<i64>()
            .map_err(|_| Error::malformed(Some(line_no), format!("weight `{w}` is not an integer")))?;
        links.push(LinkSpec {
            line: Some(line_no),
            ..LinkSpec::new(a, b, weight)
        });
    }

    Ok(TopologySpec {
        nodes,
        links,
        nodes_line: Some(nodes_line),
    })
}

/// 解析 JSON 格式；非整数代价等类型错误同样归为拓扑不合法
pub fn parse_json(raw: &str) -> Result<TopologySpec> {
    serde_json::from_str(raw).map_err(|e| Error::malformed(Some(e.line()), e.to_string()))
}

/// 从文件读取：`.json` 按 JSON 解析，其余按文本解析
pub fn load(path: impl AsRef<Path>) -> Result<TopologySpec> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)?;
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if is_json { parse_json(&raw) } else { parse_text(&raw) }
}

impl TopologySpec {
    /// 构建网络；任何非法引用都会在仿真开始前失败
    pub fn build(&self) -> Result<Network> {
        if self.nodes.is_empty() {
            return Err(Error::malformed(self.nodes_line, "no nodes declared"));
        }

        let mut net = Network::default();
        for name in &self.nodes {
            net.add_node(name.as_str())
                .map_err(|e| with_line(e, self.nodes_line))?;
        }
        for link in &self.links {
            net.add_link(&link.a, &link.b, link.weight)
                .map_err(|e| with_line(e, link.line))?;
        }

        info!(
            nodes = net.node_count(),
            links = net.link_count(),
            "🌐 拓扑已构建"
        );
        Ok(net)
    }
}

fn with_line(err: Error, line: Option<usize>) -> Error {
    match err {
        Error::MalformedTopology { line: None, reason } => Error::MalformedTopology { line, reason },
        other => other,
    }
}
