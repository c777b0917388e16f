//! End-to-end tests of the `advancer` subcommands.

mod common;

use common::*;
use predicates::prelude::*;
use tempfile::TempDir;

#[test]
fn test_init_creates_project() {
    let temp_dir = TempDir::new().unwrap();

    advancer(&temp_dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created"))
        .stdout(predicate::str::contains("sequences/onboarding.yaml"));

    let adv_dir = temp_dir.path().join(".advancer");
    assert!(adv_dir.join("config.toml").is_file());
    assert!(adv_dir.join("sequences/release-checklist/01-freeze.md").is_file());
}

#[test]
fn test_init_refuses_existing_directory_without_force() {
    let project = initialized_project();

    advancer(&project)
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    advancer(&project).args(["init", "--force"]).assert().success();
}

#[test]
fn test_init_minimal() {
    let temp_dir = TempDir::new().unwrap();

    advancer(&temp_dir).args(["init", "--minimal"]).assert().success();

    let sequences = temp_dir.path().join(".advancer/sequences");
    assert!(sequences.join("onboarding.yaml").is_file());
    assert!(!sequences.join("release-checklist").exists());
}

#[test]
fn test_list_shows_sequences() {
    let project = initialized_project();

    advancer(&project)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("onboarding"))
        .stdout(predicate::str::contains("5 steps"))
        .stdout(predicate::str::contains("release-checklist"))
        .stdout(predicate::str::contains("4 steps"));
}

#[test]
fn test_list_without_project_suggests_init() {
    let temp_dir = TempDir::new().unwrap();

    advancer(&temp_dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("advancer init"));
}

#[test]
fn test_run_prints_each_window() {
    let project = initialized_project();

    let output = advancer(&project)
        .args(["run", "onboarding", "-a", "next", "-a", "last", "-a", "match:invite"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    insta::assert_snapshot!(stdout, @r###"
onboarding (5 steps, last-step: past-end)
  start          ‹ - ● welcome account ›
  next           ‹ welcome ● account workspace ›
  last           ‹ done ● - - ›
  match:invite   ‹ workspace ● invite done ›
"###);
}

#[test]
fn test_run_json_with_initial_step() {
    let project = initialized_project();

    let output = advancer(&project)
        .args(["run", "onboarding", "--initial", "done", "--action", "previous", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let records: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let records = records.as_array().unwrap();
    assert_eq!(records.len(), 2);

    assert_eq!(records[0]["action"], "start");
    assert_eq!(records[0]["state"]["previous"], "invite");
    assert_eq!(records[0]["state"]["active"], "done");
    assert!(records[0]["state"]["next"].is_null());

    assert_eq!(records[1]["action"], "previous");
    assert_eq!(records[1]["state"]["active"], "invite");
    assert_eq!(records[1]["state"]["next"], "done");
}

#[test]
fn test_run_final_mode_from_config() {
    let project = initialized_project();
    std::fs::write(
        project.path().join(".advancer/config.toml"),
        "last-step = \"final\"\n",
    )
    .unwrap();

    advancer(&project)
        .args(["run", "release-checklist", "-a", "last"])
        .assert()
        .success()
        .stdout(predicate::str::contains("last-step: final"))
        .stdout(predicate::str::contains("‹ tag ● publish - ›"));
}

#[test]
fn test_run_rejects_unknown_sequence_and_action() {
    let project = initialized_project();

    advancer(&project)
        .args(["run", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no sequence named 'nope'"));

    advancer(&project)
        .args(["run", "onboarding", "-a", "sideways"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("sideways"));

    advancer(&project)
        .args(["run", "onboarding", "--initial", "missing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("has no step 'missing'"));
}
