//! CLI integration tests for the `govdsl` binary.
//!
//! Uses `assert_cmd` to spawn the binary and verify exit codes, stdout
//! content, and stderr content. Tests run from the workspace root so the
//! relative paths into `fixtures/` resolve.

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Locate the workspace root by walking up from CARGO_MANIFEST_DIR.
fn workspace_root() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    // crates/cli -> workspace root is two levels up
    manifest_dir
        .parent()
        .and_then(|p| p.parent())
        .expect("workspace root")
        .to_path_buf()
}

fn govdsl() -> Command {
    let mut cmd = cargo_bin_cmd!("govdsl");
    cmd.current_dir(workspace_root());
    cmd
}

// ──────────────────────────────────────────────
// 1. Help and version
// ──────────────────────────────────────────────

#[test]
fn help_exits_0_with_description() {
    govdsl()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Governance policy language toolchain",
        ));
}

#[test]
fn version_exits_0() {
    govdsl()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("govdsl"));
}

// ──────────────────────────────────────────────
// 2. Check subcommand
// ──────────────────────────────────────────────

#[test]
fn check_valid_tree_prints_summary() {
    govdsl()
        .args(["check", "fixtures/project_governance.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Policy for project 'openLedger'"))
        .stdout(predicate::str::contains("Activities: 2"))
        .stdout(predicate::str::contains("Participants: 4"))
        .stdout(predicate::str::contains("Deadlines: 2"))
        .stdout(predicate::str::contains("Rules: 3"))
        .stdout(predicate::str::contains("sprintEnd (14 days)"));
}

#[test]
fn check_json_output_lists_rules() {
    let out = govdsl()
        .args(["--output", "json", "check", "fixtures/project_governance.json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let v: serde_json::Value = serde_json::from_slice(&out).expect("valid JSON summary");
    assert_eq!(v["project"], "openLedger");
    assert_eq!(v["participants"], 4);
    assert_eq!(v["deadlines"], 2);
    assert_eq!(v["rules"].as_array().map(|r| r.len()), Some(3));
    assert_eq!(v["rules"][2]["kind"], "LeaderDriven");
}

#[test]
fn check_quiet_suppresses_summary() {
    govdsl()
        .args(["--quiet", "check", "fixtures/project_governance.json"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn check_forward_default_exits_1() {
    govdsl()
        .args(["check", "fixtures/forward_default.json"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("undefined rule 'r4'"));
}

#[test]
fn check_error_json_has_kind() {
    govdsl()
        .args(["--output", "json", "check", "fixtures/forward_default.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("\"kind\": \"UndefinedRule\""));
}

#[test]
fn check_unknown_unit_reports_warning() {
    govdsl()
        .args(["check", "fixtures/unknown_unit.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Warnings:"))
        .stdout(predicate::str::contains("fortnights"));
}

#[test]
fn check_strict_config_rejects_unknown_unit() {
    govdsl()
        .args([
            "check",
            "fixtures/unknown_unit.json",
            "--config",
            "fixtures/strict_units.toml",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "unsupported time unit 'fortnights'",
        ))
        .stderr(predicate::str::contains("defaulting to days").not());
}

#[test]
fn check_unknown_unit_logs_warning_to_stderr() {
    govdsl()
        .args(["check", "fixtures/unknown_unit.json"])
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stderr(predicate::str::contains("defaulting to days"));
}

#[test]
fn check_verbose_logs_successful_build() {
    govdsl()
        .args(["-v", "--quiet", "check", "fixtures/project_governance.json"])
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "built policy for project 'openLedger'",
        ));
}

#[test]
fn check_collision_rejected_then_allowed_by_config() {
    govdsl()
        .args(["check", "fixtures/participant_collision.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("participant 'reviewer'"));

    govdsl()
        .args([
            "check",
            "fixtures/participant_collision.json",
            "--config",
            "fixtures/last_write_wins.toml",
        ])
        .assert()
        .success();
}

#[test]
fn check_missing_file_exits_1() {
    govdsl()
        .args(["check", "fixtures/does_not_exist.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot open file"));
}

#[test]
fn check_malformed_tree_exits_1() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, r#"{"kind": "Policy", "children": [{"kind": "Nope"}]}"#).unwrap();
    govdsl()
        .args(["check", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid syntax tree"));
}
