//! 仿真器
//!
//! 持有拓扑，按配置推进同步轮次，并在两轮之间执行操作员命令。
//!
//! 状态机：
//! `Uninitialised -> NeighborsKnown -> Converging -> Converged | RoundLimitReached`

use super::command::Command;
use super::config::SimConfig;
use super::convergence::RoutingSnapshot;
use super::engine::{self, StepVariant};
use crate::error::{Error, Result};
use crate::net::Network;
use crate::viz::{RunEventKind, RunLogger};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Uninitialised,
    NeighborsKnown,
    Converging,
    Converged,
    RoundLimitReached,
}

impl Phase {
    pub fn is_terminal(self) -> bool {
        matches!(self, Phase::Converged | Phase::RoundLimitReached)
    }
}

/// 一轮推进的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundOutcome {
    pub round: u64,
    pub updates: usize,
    pub phase: Phase,
}

/// 一条命令的执行结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    Advanced(RoundOutcome),
    CostChanged,
    LinkDeleted,
    Route(Vec<String>),
    Quit,
}

pub struct Simulator {
    net: Network,
    cfg: SimConfig,
    round: u64,
    phase: Phase,
    /// 上一轮结束时的快照；拓扑变更后不重拍
    last: Option<RoutingSnapshot>,
    viz: Option<RunLogger>,
}

impl Simulator {
    pub fn new(net: Network, cfg: SimConfig) -> Self {
        Self {
            net,
            cfg,
            round: 0,
            phase: Phase::Uninitialised,
            last: None,
            viz: None,
        }
    }

    /// 开始记录运行事件（应在 `first_step` 之前调用）
    pub fn enable_viz(&mut self) {
        self.viz.get_or_insert_with(RunLogger::default);
    }

    pub fn take_viz(&mut self) -> Option<RunLogger> {
        self.viz.take()
    }

    pub fn network(&self) -> &Network {
        &self.net
    }

    /// 两轮之间直接修改拓扑
    pub fn network_mut(&mut self) -> &mut Network {
        &mut self.net
    }

    pub fn config(&self) -> &SimConfig {
        &self.cfg
    }

    pub fn round(&self) -> u64 {
        self.round
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn last_snapshot(&self) -> Option<&RoutingSnapshot> {
        self.last.as_ref()
    }

    /// 第 0 轮：初始化路由表并发现邻居
    #[tracing::instrument(skip(self))]
    pub fn first_step(&mut self) -> &RoutingSnapshot {
        self.net.initialise();
        engine::first_step(&mut self.net);
        self.round = 0;
        self.phase = Phase::NeighborsKnown;

        let snap = RoutingSnapshot::capture(&self.net);
        if let Some(viz) = self.viz.as_mut() {
            viz.push_meta(&self.net, &self.cfg);
            viz.push(0, RunEventKind::Round {
                updates: 0,
                tables: snap.clone(),
            });
        }
        if self.round >= self.cfg.round_limit {
            self.finish(Phase::RoundLimitReached);
        }
        self.last.insert(snap)
    }

    /// 推进一轮并检测收敛
    #[tracing::instrument(skip(self), fields(t = self.round))]
    pub fn advance(&mut self) -> Result<RoundOutcome> {
        match self.phase {
            Phase::Uninitialised => return Err(Error::NotInitialised),
            p if p.is_terminal() => return Err(Error::Finished(p)),
            _ => {}
        }

        let updates = match self.cfg.variant() {
            StepVariant::Plain => engine::step(&mut self.net, &mut self.round),
            StepVariant::SplitHorizon => engine::step_split_horizon(&mut self.net, &mut self.round),
        };
        let snap = RoutingSnapshot::capture(&self.net);
        let converged = self
            .last
            .as_ref()
            .is_some_and(|prev| snap.converged_with(prev));

        if let Some(viz) = self.viz.as_mut() {
            viz.push(self.round, RunEventKind::Round {
                updates,
                tables: snap.clone(),
            });
        }
        self.last = Some(snap);

        if converged {
            self.finish(Phase::Converged);
        } else if self.round >= self.cfg.round_limit {
            self.finish(Phase::RoundLimitReached);
        } else {
            self.phase = Phase::Converging;
        }

        Ok(RoundOutcome {
            round: self.round,
            updates,
            phase: self.phase,
        })
    }

    /// 一直推进直到收敛或达到轮次上限
    pub fn run(&mut self) -> Result<Phase> {
        if self.phase == Phase::Uninitialised {
            self.first_step();
        }
        while !self.phase.is_terminal() {
            self.advance()?;
        }
        Ok(self.phase)
    }

    /// 执行一条操作员命令；变更失败时路由状态不变
    pub fn execute(&mut self, cmd: &Command) -> Result<CommandOutcome> {
        let t = self.round;
        match cmd {
            Command::Advance => self.advance().map(CommandOutcome::Advanced),
            Command::ChangeCost { a, b, cost } => {
                self.net.change_cost(a, b, *cost)?;
                self.log(t, RunEventKind::CostChanged {
                    a: a.clone(),
                    b: b.clone(),
                    cost: *cost,
                });
                Ok(CommandOutcome::CostChanged)
            }
            Command::DeleteLink { a, b } => {
                self.net.delete_link(a, b)?;
                self.log(t, RunEventKind::LinkDeleted {
                    a: a.clone(),
                    b: b.clone(),
                });
                Ok(CommandOutcome::LinkDeleted)
            }
            Command::ViewRoute { from, to } => {
                let traced = self.net.trace_path(from, to);
                let (path, error) = match &traced {
                    Ok(path) => (path.clone(), None),
                    Err(e) => (Vec::new(), Some(e.to_string())),
                };
                self.log(t, RunEventKind::Route {
                    from: from.clone(),
                    to: to.clone(),
                    path,
                    error,
                });
                traced.map(CommandOutcome::Route)
            }
            Command::Quit => Ok(CommandOutcome::Quit),
        }
    }

    fn finish(&mut self, phase: Phase) {
        self.phase = phase;
        match phase {
            Phase::Converged => info!(t = self.round, "✅ 路由表已收敛"),
            _ => warn!(t = self.round, limit = self.cfg.round_limit, "达到轮次上限，未收敛"),
        }
        self.log(self.round, RunEventKind::Finished { phase });
    }

    fn log(&mut self, t: u64, kind: RunEventKind) {
        if let Some(viz) = self.viz.as_mut() {
            viz.push(t, kind);
        }
    }
}
