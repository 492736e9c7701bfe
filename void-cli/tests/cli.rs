//! End-to-end tests for the `void` binary.
//!
//! `HOME` points at a temp dir so the default sanctum and
//! `~/.void/config.yaml` are isolated per test. The config swaps the git and
//! python programs for `true`/`false`, so these tests are unix-only.
#![cfg(unix)]

use std::fs;
use std::path::Path;
use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use predicates::str::contains;
use tempfile::TempDir;

use void_core::ConfigFile;

fn void_cmd(home: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("void"));
    cmd.env("HOME", home)
        .env("USERPROFILE", home)
        .env("NO_COLOR", "1")
        .env_remove("VOID_SANCTUM")
        .env_remove("RUST_LOG");
    cmd
}

/// Writes a config whose venv step always succeeds and whose clone step
/// runs `git`.
fn configure(home: &Path, git: &str) {
    ConfigFile {
        git: Some(git.to_string()),
        python: Some("true".to_string()),
        ..ConfigFile::default()
    }
    .save_at(home)
    .expect("save config");
}

fn projects(home: &Path) -> std::path::PathBuf {
    home.join("sanctum").join("projects")
}

// ---------------------------------------------------------------------------
// Usage
// ---------------------------------------------------------------------------

#[test]
fn help_exits_successfully() {
    let home = TempDir::new().expect("home");
    void_cmd(home.path())
        .arg("help")
        .assert()
        .success()
        .stdout(contains("manifest").and(contains("install")));
}

#[test]
fn no_args_prints_usage_and_fails() {
    let home = TempDir::new().expect("home");
    void_cmd(home.path())
        .assert()
        .failure()
        .stderr(contains("Usage"));
}

#[test]
fn unknown_command_fails_with_usage() {
    let home = TempDir::new().expect("home");
    void_cmd(home.path())
        .arg("stabilize")
        .assert()
        .failure()
        .stderr(contains("Usage"));
}

#[test]
fn missing_argument_fails() {
    let home = TempDir::new().expect("home");
    void_cmd(home.path())
        .arg("install")
        .assert()
        .failure()
        .stderr(contains("<SOURCE>"));
}

// ---------------------------------------------------------------------------
// create sanc
// ---------------------------------------------------------------------------

#[test]
fn create_sanc_twice_reports_existing() {
    let home = TempDir::new().expect("home");
    configure(home.path(), "false");

    void_cmd(home.path())
        .args(["create", "sanc"])
        .assert()
        .success()
        .stdout(contains("qvenv initialized"));
    assert!(projects(home.path()).is_dir());
    assert!(home.path().join("sanctum/.qvenv").is_dir());

    void_cmd(home.path())
        .args(["create", "sanc"])
        .assert()
        .success()
        .stdout(contains("already exists"));
}

#[test]
fn sanctum_flag_overrides_default_root() {
    let home = TempDir::new().expect("home");
    let elsewhere = TempDir::new().expect("elsewhere");
    configure(home.path(), "false");

    void_cmd(home.path())
        .args(["create", "sanc", "--sanctum"])
        .arg(elsewhere.path())
        .assert()
        .success();

    assert!(elsewhere.path().join("projects").is_dir());
    assert!(!home.path().join("sanctum").exists());
}

// ---------------------------------------------------------------------------
// install
// ---------------------------------------------------------------------------

#[test]
fn failed_clone_exits_nonzero_and_leaves_nothing() {
    let home = TempDir::new().expect("home");
    configure(home.path(), "false");

    void_cmd(home.path())
        .args(["install", "https://example.com/org/foo.git"])
        .assert()
        .failure()
        .stderr(contains("failed to clone repository https://example.com/org/foo.git"));

    let leftovers: Vec<_> = fs::read_dir(projects(home.path()))
        .expect("projects dir created by install")
        .collect();
    assert!(leftovers.is_empty());
}

#[test]
fn install_existing_project_reports_already_exists() {
    let home = TempDir::new().expect("home");
    configure(home.path(), "false");
    fs::create_dir_all(projects(home.path()).join("foo")).expect("seed project");

    void_cmd(home.path())
        .args(["install", "https://example.com/org/foo.git"])
        .assert()
        .failure()
        .stderr(contains("already exists"));
}

// ---------------------------------------------------------------------------
// manifest / delete / copy
// ---------------------------------------------------------------------------

#[test]
fn manifest_without_sanctum_fails() {
    let home = TempDir::new().expect("home");
    void_cmd(home.path())
        .arg("manifest")
        .assert()
        .failure()
        .stderr(contains("no sanctum detected"));
}

#[test]
fn manifest_lists_projects_one_per_line() {
    let home = TempDir::new().expect("home");
    fs::create_dir_all(projects(home.path()).join("beta")).expect("seed");
    fs::create_dir_all(projects(home.path()).join("alpha")).expect("seed");

    void_cmd(home.path())
        .arg("manifest")
        .assert()
        .success()
        .stdout(contains("  - alpha\n  - beta\n"));
}

#[test]
fn manifest_empty_sanctum() {
    let home = TempDir::new().expect("home");
    fs::create_dir_all(projects(home.path())).expect("seed");

    void_cmd(home.path())
        .arg("manifest")
        .assert()
        .success()
        .stdout(contains("The void is empty"));
}

#[test]
fn manifest_json() {
    let home = TempDir::new().expect("home");
    fs::create_dir_all(projects(home.path()).join("alpha")).expect("seed");

    let output = void_cmd(home.path())
        .args(["manifest", "--json"])
        .output()
        .expect("run");
    assert!(output.status.success());
    let names: Vec<String> = serde_json::from_slice(&output.stdout).expect("json");
    assert_eq!(names, ["alpha"]);
}

#[test]
fn delete_then_manifest_no_longer_lists() {
    let home = TempDir::new().expect("home");
    fs::create_dir_all(projects(home.path()).join("foo/src")).expect("seed");

    void_cmd(home.path())
        .args(["delete", "foo"])
        .assert()
        .success()
        .stdout(contains("dissolved"));
    void_cmd(home.path())
        .arg("manifest")
        .assert()
        .success()
        .stdout(contains("foo").not());
}

#[test]
fn delete_missing_fails() {
    let home = TempDir::new().expect("home");
    fs::create_dir_all(projects(home.path())).expect("seed");

    void_cmd(home.path())
        .args(["delete", "ghost"])
        .assert()
        .code(1)
        .stderr(predicate::str::starts_with("[VOID]: failed to delete 'ghost'").and(contains("not found")));
}

#[test]
fn copy_refuses_existing_destination() {
    let home = TempDir::new().expect("home");
    let out = TempDir::new().expect("out");
    fs::create_dir_all(projects(home.path()).join("foo")).expect("seed");
    fs::write(projects(home.path()).join("foo/app.py"), "x = 1\n").expect("seed");

    void_cmd(home.path())
        .args(["copy", "foo"])
        .arg(out.path())
        .assert()
        .failure()
        .stderr(contains("already exists"));

    let dest = out.path().join("foo-copy");
    void_cmd(home.path())
        .args(["copy", "foo"])
        .arg(&dest)
        .assert()
        .success();
    assert_eq!(fs::read_to_string(dest.join("app.py")).expect("copied"), "x = 1\n");
}

// ---------------------------------------------------------------------------
// lock / scan
// ---------------------------------------------------------------------------

#[test]
fn lock_writes_json_snapshot() {
    let home = TempDir::new().expect("home");
    fs::create_dir_all(projects(home.path()).join("b")).expect("seed");
    fs::create_dir_all(projects(home.path()).join("a")).expect("seed");

    void_cmd(home.path()).arg("lock").assert().success().stdout(contains("locked"));

    let raw = fs::read_to_string(home.path().join("sanctum/lock.json")).expect("lock file");
    let value: serde_json::Value = serde_json::from_str(&raw).expect("valid json");
    assert_eq!(value["status"], "locked");
    assert_eq!(value["projects"], serde_json::json!(["a", "b"]));
}

#[test]
fn lock_without_sanctum_fails() {
    let home = TempDir::new().expect("home");
    void_cmd(home.path()).arg("lock").assert().failure();
    assert!(!home.path().join("sanctum/lock.json").exists());
}

#[test]
fn scan_errors_survives_dangling_symlink() {
    let home = TempDir::new().expect("home");
    fs::create_dir_all(projects(home.path()).join("good/.git")).expect("seed");
    std::os::unix::fs::symlink(home.path().join("nowhere"), projects(home.path()).join("broken"))
        .expect("symlink");

    void_cmd(home.path())
        .args(["scan", "errors"])
        .assert()
        .success()
        .stdout(contains("broken: symlink points at a missing target"));
}

#[test]
fn scan_errors_reports_drift() {
    let home = TempDir::new().expect("home");
    fs::create_dir_all(projects(home.path()).join("kept/.git")).expect("seed");
    void_cmd(home.path()).arg("lock").assert().success();
    fs::create_dir_all(projects(home.path()).join("fresh")).expect("seed");
    fs::write(projects(home.path()).join("fresh/notes.txt"), "n").expect("seed");

    void_cmd(home.path())
        .args(["scan", "errors"])
        .assert()
        .success()
        .stdout(
            contains("fresh: installed since last lock")
                .and(contains("fresh: not a git checkout")),
        );
}
