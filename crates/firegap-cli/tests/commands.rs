//! `rules` and `md` subcommands.

use assert_cmd::Command;
use firegap_test_util::{CONFIG_FILE, EXPECTED_RESPONSE_FILE, fixtures_dir};
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

#[allow(deprecated)]
fn firegap_cmd() -> Command {
    Command::cargo_bin("firegap").expect("firegap binary not found - run `cargo build` first")
}

#[test]
fn rules_lists_catalog_highest_priority_first() {
    let config = fixtures_dir().join("scenario_d").join(CONFIG_FILE);
    let output = firegap_cmd()
        .arg("--config")
        .arg(&config)
        .args(["rules", "--json"])
        .output()
        .expect("run firegap");
    assert!(output.status.success());

    let listing: Value = serde_json::from_slice(&output.stdout).expect("json");
    let ids: Vec<&str> = listing["rules"]
        .as_array()
        .expect("rules")
        .iter()
        .filter_map(|r| r["id"].as_str())
        .collect();
    assert_eq!(
        ids,
        vec!["abp-2024-inox-001", "abz-z-19.17-2099", "mlar-3.2.1-default"]
    );
    assert_eq!(listing["files"], serde_json::json!(["abz.toml", "seed.json"]));
    assert_eq!(listing["as_of"], "2026-01-01");
    assert_eq!(listing["digest"].as_str().map(str::len), Some(64));
    assert_eq!(listing["problems"], serde_json::json!([]));
}

#[test]
fn rules_table_marks_expired_rules() {
    let config = fixtures_dir().join("scenario_a").join(CONFIG_FILE);
    firegap_cmd()
        .arg("--config")
        .arg(&config)
        .args(["--as-of", "2027-06-01", "rules"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 rules in 1 file(s)"))
        .stdout(predicate::str::contains("!  100  abp-2024-inox-001"));
}

#[test]
fn rules_reports_problems_and_fails() {
    let config = fixtures_dir().join("malformed_rule").join(CONFIG_FILE);
    firegap_cmd()
        .arg("--config")
        .arg(&config)
        .arg("rules")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Problems:"))
        .stdout(predicate::str::contains("abp-broken-layout"));
}

#[test]
fn md_renders_a_saved_response() {
    let response = fixtures_dir().join("scenario_d").join(EXPECTED_RESPONSE_FILE);
    firegap_cmd()
        .arg("md")
        .arg("--response")
        .arg(&response)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("# Brandschutz-Abstandsnachweis"))
        .stdout(predicate::str::contains("## Quellen"))
        .stdout(predicate::str::contains("Z-19.17-2099"));
}

#[test]
fn md_writes_output_file() {
    let response = fixtures_dir().join("hard_floor").join(EXPECTED_RESPONSE_FILE);
    let temp = TempDir::new().expect("temp dir");
    let out = temp.path().join("report").join("nachweis.md");

    firegap_cmd()
        .arg("md")
        .arg("--response")
        .arg(&response)
        .arg("--output")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let md = std::fs::read_to_string(&out).expect("read markdown");
    assert!(md.contains("Keine Quelle. Einzelfallprüfung erforderlich."));
}

#[test]
fn md_rejects_invalid_response() {
    let temp = TempDir::new().expect("temp dir");
    let path = temp.path().join("response.json");
    std::fs::write(&path, r#"{"status": "vielleicht"}"#).expect("write");

    firegap_cmd()
        .arg("md")
        .arg("--response")
        .arg(&path)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("firegap error"));
}
