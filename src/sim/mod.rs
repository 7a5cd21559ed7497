//! 仿真核心模块
//!
//! 此模块包含收敛引擎、收敛检测、运行配置、操作员命令与驱动轮次的仿真器。

// 子模块声明
mod command;
mod config;
mod convergence;
mod engine;
mod simulator;

// 重新导出公共接口
pub use command::Command;
pub use config::{DEFAULT_ROUND_LIMIT, SimConfig};
pub use convergence::{RoutingSnapshot, SnapshotEntry};
pub use engine::{StepVariant, first_step, run_round, step, step_split_horizon};
pub use simulator::{CommandOutcome, Phase, RoundOutcome, Simulator};
