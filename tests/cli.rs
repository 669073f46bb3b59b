//! End-to-end tests for the `hr` binary.
//!
//! Config and state are isolated per test by pointing the XDG directories
//! at a temporary home.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn hr() -> Command {
    Command::cargo_bin("hr").unwrap()
}

fn hr_in(home: &TempDir) -> Command {
    let mut cmd = hr();
    cmd.env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join("config"))
        .env("XDG_CACHE_HOME", home.path().join("cache"));
    cmd
}

#[test]
fn splits_unified_diff_from_stdin() {
    hr().write_stdin(
        "diff --git a/x b/x\n--- a/x\n+++ b/x\n@@ -1,2 +1,2 @@\n-old\n+new\n context\n",
    )
    .assert()
    .success()
    .stdout(predicate::str::contains(r#""file_name":"x""#))
    .stdout(predicate::str::contains(r#""old_text":"old\ncontext""#))
    .stdout(predicate::str::contains(r#""new_text":"new\ncontext""#));
}

#[test]
fn splits_unified_diff_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("patch.diff");
    fs::write(
        &path,
        "diff --git a/a.rs b/a.rs\n--- a/a.rs\n+++ b/a.rs\n@@ -1 +1 @@\n-x\n+y\n",
    )
    .unwrap();

    hr().arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""file_name":"a.rs""#));
}

#[test]
fn garbage_input_yields_an_empty_array() {
    hr().write_stdin("definitely not a diff\n")
        .assert()
        .success()
        .stdout(predicate::str::diff("[]\n"));
}

#[test]
fn parses_change_set_payload() {
    hr().arg("--changes")
        .write_stdin(r#"{"changes":{"a.rs":{"add":{"content":"hi"}}}}"#)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""file_name":"a.rs""#))
        .stdout(predicate::str::contains(r#""old_text":"""#))
        .stdout(predicate::str::contains(r#""new_text":"hi""#));
}

#[test]
fn resolve_mode_honors_flavor_subsets() {
    let home = TempDir::new().unwrap();

    hr_in(&home)
        .args(["--resolve-mode", "codex", "--mode", "yolo"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""mode":"yolo""#))
        .stdout(predicate::str::contains(r#""flavor_class":"codex-like""#));

    hr_in(&home)
        .args(["--resolve-mode", "claude", "--mode", "yolo"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""mode":"default""#))
        .stdout(predicate::str::contains(r#""flavor_class":"claude-like""#));
}

#[test]
fn resolve_mode_uses_configured_default() {
    let home = TempDir::new().unwrap();
    let config_dir = home.path().join("config").join("handrail");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(
        config_dir.join("config.toml"),
        "[permissions]\ndefault_mode_codex = \"read-only\"\n",
    )
    .unwrap();

    hr_in(&home)
        .args(["--resolve-mode", "codex"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""mode":"read-only""#));

    // The codex default does not leak into claude-like sessions.
    hr_in(&home)
        .args(["--resolve-mode", "claude"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""mode":"default""#));
}

#[test]
fn resolve_mode_save_round_trips_through_last_used() {
    let home = TempDir::new().unwrap();

    hr_in(&home)
        .args(["--resolve-mode", "codex", "--mode", "safe-yolo", "--save"])
        .assert()
        .success();

    // No draft and no configured default: the saved mode applies.
    hr_in(&home)
        .args(["--resolve-mode", "codex"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""mode":"safe-yolo""#));

    // But it is not valid for claude-like sessions.
    hr_in(&home)
        .args(["--resolve-mode", "claude"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""mode":"default""#));
}

#[test]
fn init_writes_config_once() {
    let home = TempDir::new().unwrap();

    hr_in(&home).arg("--init").assert().success();
    assert!(home
        .path()
        .join("config")
        .join("handrail")
        .join("config.toml")
        .exists());

    hr_in(&home)
        .arg("--init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}
