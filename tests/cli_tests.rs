//! CLI integration tests using the REAL diffbase binary

mod common;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

#[allow(deprecated)]
fn diffbase_cmd() -> Command {
    let mut cmd = Command::cargo_bin("diffbase").unwrap();
    cmd.env_remove("DIFFBASE_REPO").env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_help_output() {
    diffbase_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("golden snapshot source"))
        .stdout(predicate::str::contains("resolve"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn test_resolve_help_lists_examples() {
    diffbase_cmd()
        .args(["resolve", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--golden-path"))
        .stdout(predicate::str::contains("origin/main"));
}

#[test]
fn test_version_output() {
    diffbase_cmd()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("diffbase"))
        .stdout(predicate::str::contains("Build info"));
}

#[test]
fn test_completions_bash() {
    diffbase_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("diffbase"));
}

#[test]
fn test_completions_unknown_shell() {
    diffbase_cmd()
        .args(["completions", "tcsh"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown shell: tcsh"))
        .stderr(predicate::str::contains("help:"));
}

#[test]
fn test_resolve_outside_repository() {
    let temp = TempDir::new().unwrap();
    diffbase_cmd()
        .current_dir(temp.path())
        .args(["resolve", "main"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not in a git repository"));
}

#[test]
fn test_resolve_missing_repo_directory() {
    let temp = TempDir::new().unwrap();
    diffbase_cmd()
        .current_dir(temp.path())
        .args(["-C", "missing", "resolve", "main"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to open repository"))
        .stderr(predicate::str::contains("Not in a git repository").not());
}

#[test]
fn test_resolve_missing_argument() {
    diffbase_cmd().arg("resolve").assert().failure();
}

#[test]
fn test_verbose_logs_to_stderr() {
    let repos = common::TestRepos::new();
    diffbase_cmd()
        .current_dir(repos.work_path())
        .args(["-v", "resolve", "a1b2c3d", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("{"))
        .stderr(predicate::str::contains("treating diff base as a commit"));
}
