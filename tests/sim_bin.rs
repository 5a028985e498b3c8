#![cfg(feature = "std")]

use std::process::Command;

#[test]
fn sim_binary_smoke() {
    let output = Command::new(env!("CARGO_BIN_EXE_sim"))
        .args(["--seed", "7", "--delay-ms", "0"])
        .env("SEABATTLE_LOG", "off")
        .output()
        .expect("failed to run sim binary");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    let v: serde_json::Value = serde_json::from_str(stdout.trim()).expect("invalid json");
    assert_eq!(v["seed"], 7);
    assert!(v["winner"].is_string());
    let loser_left = match v["winner"].as_str() {
        Some("Player") => &v["computer_remaining"],
        _ => &v["player_remaining"],
    };
    assert_eq!(loser_left, 0);

    // The computer answers every player shot except a winning one.
    let player_shots = v["player_shots"].as_u64().unwrap();
    let computer_shots = v["computer_shots"].as_u64().unwrap();
    match v["winner"].as_str() {
        Some("Player") => assert_eq!(computer_shots + 1, player_shots),
        _ => assert_eq!(computer_shots, player_shots),
    }
}
