//! 错误类型
//!
//! 拓扑构建、拓扑变更、路由追踪与轮次推进共用的错误分类。

use crate::sim::Phase;

/// 本 crate 的统一结果类型
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// 拓扑描述不合法（未定义/重复的节点名、非整数权重等）。
    /// `line` 为 1-based 行号；非文本来源时为 None。
    #[error("malformed topology{}: {reason}", .line.map(|l| format!(" (line {l})")).unwrap_or_default())]
    MalformedTopology { line: Option<usize>, reason: String },

    #[error("no link between `{a}` and `{b}`")]
    LinkNotFound { a: String, b: String },

    #[error("invalid cost `{0}`: expected an integer")]
    InvalidCost(String),

    #[error("route from `{from}` to `{to}` not yet known")]
    RouteUnknown { from: String, to: String },

    /// next-hop 链超过节点数仍未到达目的地
    #[error("forwarding loop while tracing `{from}` -> `{to}` after {hops} hops")]
    RouteCycleDetected { from: String, to: String, hops: usize },

    /// 驱动层无法识别的操作命令
    #[error("unrecognised command `{0}`")]
    InvalidCommand(String),

    #[error("simulation not initialised: run the neighbor discovery round first")]
    NotInitialised,

    #[error("simulation already finished ({0:?})")]
    Finished(Phase),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn malformed(line: Option<usize>, reason: impl Into<String>) -> Self {
        Error::MalformedTopology {
            line,
            reason: reason.into(),
        }
    }
}
