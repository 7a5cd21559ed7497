use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::net::Network;
use crate::sim::{Phase, RoutingSnapshot, SimConfig};
use serde::{Deserialize, Serialize};

/// 运行事件类型
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RunEventKind {
    /// 拓扑与配置元信息（第一条事件）
    Meta {
        nodes: Vec<String>,
        links: Vec<RunLinkInfo>,
        split_horizon: bool,
        round_limit: u64,
    },
    /// 一轮结束后的完整路由状态
    Round {
        updates: usize,
        tables: RoutingSnapshot,
    },
    CostChanged { a: String, b: String, cost: i64 },
    LinkDeleted { a: String, b: String },
    /// 路径追踪结果；失败时 path 为空并带上错误信息
    Route {
        from: String,
        to: String,
        path: Vec<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        error: Option<String>,
    },
    /// 仿真进入终止状态
    Finished { phase: Phase },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunLinkInfo {
    pub a: String,
    pub b: String,
    pub weight: i64,
}

/// 一个可回放的事件（JSON）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunEvent {
    /// 事件发生时的轮次
    pub t: u64,
    #[serde(flatten)]
    pub kind: RunEventKind,
}

/// 一个简单的事件收集器（存内存，仿真结束写 JSON 文件）
#[derive(Debug, Default)]
pub struct RunLogger {
    pub events: Vec<RunEvent>,
}

impl RunLogger {
    pub fn push(&mut self, t: u64, kind: RunEventKind) {
        self.events.push(RunEvent { t, kind });
    }

    pub fn push_meta(&mut self, net: &Network, cfg: &SimConfig) {
        let nodes = net.nodes().map(|n| n.name().to_string()).collect();
        let links = net
            .links()
            .map(|(_, l)| RunLinkInfo {
                a: net.name(l.a).to_string(),
                b: net.name(l.b).to_string(),
                weight: l.weight,
            })
            .collect();
        self.push(
            0,
            RunEventKind::Meta {
                nodes,
                links,
                split_horizon: cfg.split_horizon,
                round_limit: cfg.round_limit,
            },
        );
    }

    /// 写出为 JSON 数组
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<()> {
        let raw = serde_json::to_string_pretty(&self.events)?;
        fs::write(path, raw)?;
        Ok(())
    }
}
