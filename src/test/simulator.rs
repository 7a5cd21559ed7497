use super::abc;
use crate::Error;
use crate::sim::{Command, CommandOutcome, Phase, SimConfig, Simulator};
use crate::topo::presets::{PresetOpts, line, ring};

fn sim_with(cfg: SimConfig) -> Simulator {
    Simulator::new(abc(), cfg)
}

#[test]
fn advancing_before_neighbor_discovery_fails() {
    let mut sim = sim_with(SimConfig::default());
    assert_eq!(sim.phase(), Phase::Uninitialised);
    assert!(matches!(sim.advance(), Err(Error::NotInitialised)));
}

#[test]
fn first_step_moves_to_neighbors_known_at_round_zero() {
    let mut sim = sim_with(SimConfig::default());
    let snap = sim.first_step();
    assert_eq!(snap.table("A").map(|t| t.len()), Some(2));
    assert_eq!(sim.phase(), Phase::NeighborsKnown);
    assert_eq!(sim.round(), 0);
}

#[test]
fn line_converges_and_detection_stops_the_loop() {
    let mut sim = sim_with(SimConfig::default());
    sim.first_step();

    let r1 = sim.advance().unwrap();
    assert_eq!((r1.round, r1.updates, r1.phase), (1, 2, Phase::Converging));
    let r2 = sim.advance().unwrap();
    assert_eq!((r2.round, r2.updates, r2.phase), (2, 0, Phase::Converged));

    assert!(matches!(
        sim.advance(),
        Err(Error::Finished(Phase::Converged))
    ));
}

#[test]
fn run_converges_within_node_count_rounds() {
    for split_horizon in [false, true] {
        let spec = ring(&PresetOpts { nodes: 7, weight: 2 });
        let mut sim = Simulator::new(
            spec.build().unwrap(),
            SimConfig {
                split_horizon,
                round_limit: 100,
            },
        );
        assert_eq!(sim.run().unwrap(), Phase::Converged);
        assert!(sim.round() <= 6, "round {}", sim.round());

        let snap = sim.last_snapshot().unwrap();
        // 7 节点环上最远的节点相隔 3 跳
        assert_eq!(snap.entry("n0", "n3").map(|e| e.cost), Some(6));
        assert_eq!(snap.entry("n0", "n4").map(|e| e.cost), Some(6));
    }
}

#[test]
fn round_limit_stops_a_slow_topology() {
    let spec = line(&PresetOpts { nodes: 6, weight: 1 });
    let mut sim = Simulator::new(
        spec.build().unwrap(),
        SimConfig {
            split_horizon: false,
            round_limit: 2,
        },
    );
    assert_eq!(sim.run().unwrap(), Phase::RoundLimitReached);
    assert_eq!(sim.round(), 2);
    assert!(sim.last_snapshot().unwrap().entry("n0", "n5").is_none());
    assert!(matches!(
        sim.advance(),
        Err(Error::Finished(Phase::RoundLimitReached))
    ));
}

#[test]
fn zero_round_limit_is_terminal_after_discovery() {
    let mut sim = sim_with(SimConfig {
        split_horizon: false,
        round_limit: 0,
    });
    sim.first_step();
    assert_eq!(sim.phase(), Phase::RoundLimitReached);
}

#[test]
fn commands_between_rounds_mutate_and_trace() {
    let mut sim = sim_with(SimConfig::default());
    sim.first_step();

    let out = sim
        .execute(&Command::ChangeCost {
            a: "A".into(),
            b: "B".into(),
            cost: 9,
        })
        .unwrap();
    assert_eq!(out, CommandOutcome::CostChanged);

    assert!(matches!(
        sim.execute(&Command::ViewRoute {
            from: "A".into(),
            to: "C".into(),
        }),
        Err(Error::RouteUnknown { .. })
    ));

    assert!(matches!(
        sim.execute(&Command::Advance).unwrap(),
        CommandOutcome::Advanced(_)
    ));
    assert_eq!(
        sim.execute(&Command::ViewRoute {
            from: "A".into(),
            to: "C".into(),
        })
        .unwrap(),
        CommandOutcome::Route(vec!["A".into(), "B".into(), "C".into()])
    );
    assert_eq!(sim.run().unwrap(), Phase::Converged);
    assert_eq!(
        sim.last_snapshot().unwrap().entry("A", "C").map(|e| e.cost),
        Some(10)
    );

    assert!(matches!(
        sim.execute(&Command::DeleteLink {
            a: "A".into(),
            b: "C".into(),
        }),
        Err(Error::LinkNotFound { .. })
    ));
    assert_eq!(sim.execute(&Command::Quit).unwrap(), CommandOutcome::Quit);
}

#[test]
fn mutation_between_rounds_is_compared_against_last_round() {
    // 变更后下一轮与上一轮（变更前）比较，因此不会立刻判定收敛
    let mut sim = sim_with(SimConfig::default());
    sim.first_step();
    sim.advance().unwrap();
    sim.network_mut().delete_link("B", "C").unwrap();

    let r = sim.advance().unwrap();
    assert_eq!(r.phase, Phase::Converging);
    assert_eq!(sim.run().unwrap(), Phase::Converged);
    assert_eq!(sim.round(), 3);
}
