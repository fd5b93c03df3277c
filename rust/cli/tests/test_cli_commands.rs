//! End-to-end tests running the `pokerhand` binary.

mod helpers;

use helpers::cli_runner::CliRunner;
use serde_json::Value;

#[test]
fn eval_prints_category_tag() {
    let cli = CliRunner::new();
    let res = cli.run(&["eval", "2S", "AH", "3C", "5D", "4S"]);
    assert_eq!(res.exit_code, 0, "stderr: {}", res.stderr);
    assert_eq!(res.stdout, "straight\n");
}

#[test]
fn eval_accepts_comma_separated_lowercase() {
    let cli = CliRunner::new();
    let res = cli.run(&["eval", "as,ks,qs,js,10s"]);
    assert_eq!(res.exit_code, 0, "stderr: {}", res.stderr);
    assert_eq!(res.stdout, "royal_flush\n");
}

#[test]
fn eval_holdem_verbose() {
    let cli = CliRunner::new();
    let res = cli.run(&["eval", "--verbose", "2S", "2H", "2D", "9C", "KC", "4H", "2C"]);
    assert_eq!(res.exit_code, 0, "stderr: {}", res.stderr);
    assert!(res.stdout.contains("Pocket cards: 2 of spades, 2 of hearts"));
    assert!(res.stdout.ends_with("You have four 2s!\n"));
}

#[test]
fn eval_duplicate_card_exits_with_error() {
    let cli = CliRunner::new();
    let res = cli.run(&["eval", "AS", "AS", "QS", "JS", "10S"]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stdout.is_empty());
    assert!(res.stderr.contains("Error:"));
    assert!(res.stderr.contains("AS"));
}

#[test]
fn eval_wrong_card_count_exits_with_error() {
    let cli = CliRunner::new();
    let res = cli.run(&["eval", "AS", "KS", "QS", "JS"]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("expected 5 or 7 cards, got 4"));
}

#[test]
fn deal_is_reproducible_with_seed() {
    let cli = CliRunner::new();
    let a = cli.run(&["deal", "--seed", "2024", "--variant", "draw"]);
    let b = cli.run(&["deal", "--seed", "2024", "--variant", "draw"]);
    assert_eq!(a.exit_code, 0, "stderr: {}", a.stderr);
    assert_eq!(a.stdout, b.stdout);
    assert!(a.stdout.starts_with("Hand: ["));
}

#[test]
fn sim_json_totals_match_rounds() {
    let cli = CliRunner::new();
    let res = cli.run(&["sim", "--rounds", "200", "--seed", "9", "--json"]);
    assert_eq!(res.exit_code, 0, "stderr: {}", res.stderr);

    let json: Value = serde_json::from_str(&res.stdout).unwrap();
    assert_eq!(json["variant"], "holdem");
    assert_eq!(json["seed"], 9);
    let total: u64 = json["tally"]["counts"]
        .as_object()
        .unwrap()
        .values()
        .map(|v| v.as_u64().unwrap())
        .sum();
    assert_eq!(total, 200);
}

#[test]
fn sim_zero_rounds_rejected() {
    let cli = CliRunner::new();
    let res = cli.run(&["sim", "--rounds", "0"]);
    assert_eq!(res.exit_code, 2);
}

#[test]
fn play_session_with_retry_and_quit() {
    let cli = CliRunner::new();
    let res = cli.run_with_input(
        &["play", "--variant", "draw"],
        "AS KS QS\nAS KS QS JS 10S\nquit\n",
    );
    assert_eq!(res.exit_code, 0, "stderr: {}", res.stderr);
    assert!(res.stderr.contains("Expected 5 cards, got 3"));
    assert!(res.stdout.contains("You have a royal flush!"));
    assert!(res.stdout.contains("Hands played: 1"));
}

#[test]
fn play_input_closed_mid_hand_is_interrupted() {
    let cli = CliRunner::new();
    let res = cli.run_with_input(&["play", "--variant", "holdem"], "AS KS\n");
    assert_eq!(res.exit_code, 130);
    assert!(res.stderr.contains("Interrupted"));
}

#[test]
fn cfg_reports_env_and_file_sources() {
    let cli = CliRunner::new();
    let path = cli.dir().join("pokerhand.toml");
    std::fs::write(&path, "variant = \"draw\"\nrounds = 50\n").unwrap();
    let path_str = path.to_string_lossy().to_string();

    let res = cli.run_with_env(
        &["cfg"],
        &[("POKERHAND_CONFIG", &path_str), ("POKERHAND_ROUNDS", "75")],
    );
    assert_eq!(res.exit_code, 0, "stderr: {}", res.stderr);

    let json: Value = serde_json::from_str(&res.stdout).unwrap();
    assert_eq!(json["variant"]["value"], "draw");
    assert_eq!(json["variant"]["source"], "file");
    assert_eq!(json["rounds"]["value"], 75);
    assert_eq!(json["rounds"]["source"], "env");
    assert_eq!(json["verbose"]["source"], "default");
}

#[test]
fn cli_flags_override_config() {
    let cli = CliRunner::new();
    let res = cli.run_with_env(
        &["sim", "--variant", "draw", "--rounds", "5", "--json"],
        &[("POKERHAND_VARIANT", "holdem"), ("POKERHAND_SEED", "11")],
    );
    assert_eq!(res.exit_code, 0, "stderr: {}", res.stderr);

    let json: Value = serde_json::from_str(&res.stdout).unwrap();
    assert_eq!(json["variant"], "draw");
    assert_eq!(json["seed"], 11);
    assert_eq!(json["tally"]["rounds"], 5);
}

#[test]
fn invalid_config_exits_with_error() {
    let cli = CliRunner::new();
    let res = cli.run_with_env(&["deal"], &[("POKERHAND_VARIANT", "omaha")]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("Configuration error"));
}
