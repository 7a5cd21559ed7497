use super::abc;
use crate::sim::{Command, Phase, SimConfig, Simulator};
use crate::viz::RunEventKind;
use serde_json::Value;

#[test]
fn run_log_starts_with_meta_and_ends_with_finished() {
    let mut sim = Simulator::new(abc(), SimConfig::default());
    sim.enable_viz();
    sim.first_step();
    sim.execute(&Command::ViewRoute {
        from: "A".into(),
        to: "C".into(),
    })
    .unwrap_err();
    sim.run().unwrap();

    let log = sim.take_viz().expect("viz enabled");
    assert!(matches!(
        log.events.first().map(|e| &e.kind),
        Some(RunEventKind::Meta { nodes, links, .. }) if nodes.len() == 3 && links.len() == 2
    ));
    assert!(matches!(
        log.events.last().map(|e| &e.kind),
        Some(RunEventKind::Finished {
            phase: Phase::Converged
        })
    ));
    let rounds = log
        .events
        .iter()
        .filter(|e| matches!(e.kind, RunEventKind::Round { .. }))
        .count();
    assert_eq!(rounds, 3); // t = 0, 1, 2
    assert!(log.events.iter().any(|e| matches!(
        &e.kind,
        RunEventKind::Route { path, error: Some(_), .. } if path.is_empty()
    )));
}

#[test]
fn run_events_serialize_with_kind_tag() {
    let mut sim = Simulator::new(abc(), SimConfig::default());
    sim.enable_viz();
    sim.first_step();
    sim.execute(&Command::DeleteLink {
        a: "A".into(),
        b: "B".into(),
    })
    .unwrap();

    let log = sim.take_viz().unwrap();
    let raw = serde_json::to_string(&log.events).expect("serialize events");
    let v: Value = serde_json::from_str(&raw).expect("parse events");
    let arr = v.as_array().unwrap();
    assert_eq!(arr[0]["kind"], "meta");
    assert_eq!(arr[1]["kind"], "round");
    assert_eq!(arr[1]["tables"]["A"]["B"]["cost"], 1);
    assert_eq!(arr[1]["tables"]["A"]["B"]["next_hop"], "B");
    assert_eq!(arr[2]["kind"], "link_deleted");
    assert_eq!(arr[2]["t"], 0);
}
