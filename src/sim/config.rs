//! 运行配置
//!
//! 由驱动层（命令行）构造；核心模块只通过它选择轮次变体与轮次上限。

use super::engine::StepVariant;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SimConfig {
    /// 启用 split horizon 轮次
    #[serde(default)]
    pub split_horizon: bool,
    /// 未收敛时的最大轮次数（不含第 0 轮）
    #[serde(default = "default_round_limit")]
    pub round_limit: u64,
}

pub const DEFAULT_ROUND_LIMIT: u64 = 16;

fn default_round_limit() -> u64 {
    DEFAULT_ROUND_LIMIT
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            split_horizon: false,
            round_limit: DEFAULT_ROUND_LIMIT,
        }
    }
}

impl SimConfig {
    pub fn variant(&self) -> StepVariant {
        if self.split_horizon {
            StepVariant::SplitHorizon
        } else {
            StepVariant::Plain
        }
    }
}
