use std::process::Command;

use battleship_rules::{Phase, PlacementState, PublicState, Seat, TurnEvent};

#[test]
fn sim_binary_smoke() {
    let output = Command::new(env!("CARGO_BIN_EXE_sim"))
        .arg("1")
        .output()
        .expect("failed to run sim binary");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    let v: serde_json::Value = serde_json::from_str(stdout.trim()).expect("invalid json");
    assert!(v["winner"] == "human" || v["winner"] == "computer");
    assert_eq!(v["seed"], 1);
}

fn run_sim(seed: &str) -> serde_json::Value {
    let output = Command::new(env!("CARGO_BIN_EXE_sim"))
        .arg(seed)
        .output()
        .expect("failed to run sim binary");
    assert!(output.status.success());
    serde_json::from_slice(&output.stdout).expect("invalid json")
}

#[test]
fn sim_binary_emits_game_snapshots() {
    let v = run_sim("5");

    let placement: PlacementState = serde_json::from_value(v["placement"].clone()).unwrap();
    assert!(placement.complete);

    let events: Vec<TurnEvent> = serde_json::from_value(v["events"].clone()).unwrap();
    assert_eq!(events[0].by, Seat::Human);
    let human_shots = events.iter().filter(|e| e.by == Seat::Human).count();
    assert_eq!(v["human"]["shots"], human_shots);
    assert_eq!(v["computer"]["shots"], events.len() - human_shots);

    let state: PublicState = serde_json::from_value(v["final_state"].clone()).unwrap();
    assert_eq!(state.phase, Phase::Over);
    assert!(state.over);
    assert_eq!(v["final_state"]["phase"], "over");
    let winner: Option<Seat> = serde_json::from_value(v["winner"].clone()).unwrap();
    assert_eq!(state.winner, winner);
    assert_eq!(events.last().map(|e| e.by), winner);

    let cpu_attacked = state.cpu_view.iter().flatten().filter(|c| c.attacked).count();
    assert_eq!(cpu_attacked, human_shots);
}

#[test]
fn sim_binary_rejects_missing_seed() {
    let output = Command::new(env!("CARGO_BIN_EXE_sim"))
        .output()
        .expect("failed to run sim binary");
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).expect("non utf8 output");
    assert!(stderr.contains("Usage: sim <seed>"));
    assert!(output.stdout.is_empty());
}

#[test]
fn sim_binary_is_reproducible() {
    let run = || {
        Command::new(env!("CARGO_BIN_EXE_sim"))
            .arg("77")
            .output()
            .expect("failed to run sim binary")
            .stdout
    };
    assert_eq!(run(), run());
}
