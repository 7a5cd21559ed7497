//! 运行事件记录（用于离线回放）
//!
//! 以 JSON 事件记录一次仿真：元信息、每轮路由快照、链路变更、路径追踪
//! 和终止状态，而不是解析打印出来的文本表。

mod types;

pub use types::{RunEvent, RunEventKind, RunLinkInfo, RunLogger};
