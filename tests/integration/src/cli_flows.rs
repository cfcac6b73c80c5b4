//! End-to-end flows for the worktree commands, through the real binary
//! against real git repositories.
//!
//! Conversion and cloning flows live in `convert_flows.rs`; this file
//! covers the day-to-day add/rm/list/cd cycle inside an existing
//! container.

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use gwt_test_utils::git::commit_file;
use gwt_test_utils::layout::converted_container;

fn gwt() -> Command {
    let mut cmd = Command::cargo_bin("gwt").unwrap();
    cmd.env_remove("GWT_DEFAULT_BRANCH");
    cmd
}

/// Container with a `main` worktree, placed one level below the temp dir
/// so conversion staging and sibling worktrees stay inside it.
fn container(tmp: &TempDir) -> PathBuf {
    let root = tmp.path().join("project");
    converted_container(&root, "main");
    root
}

/// Runs git and returns stdout, for assertions on repository state.
fn git_stdout(dir: &Path, args: &[&str]) -> String {
    let output = std::process::Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .expect("failed to run git");
    assert!(
        output.status.success(),
        "git {args:?} failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn local_branches(root: &Path) -> Vec<String> {
    git_stdout(&root.join(".bare"), &["branch", "--format=%(refname:short)"])
        .lines()
        .map(str::to_string)
        .collect()
}

fn list_json(cwd: &Path) -> Vec<serde_json::Value> {
    let assert = gwt()
        .args(["list", "--json"])
        .current_dir(cwd)
        .assert()
        .success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).into_owned();
    serde_json::from_str::<serde_json::Value>(&stdout)
        .expect("list --json must print valid JSON")
        .as_array()
        .expect("list --json must print an array")
        .clone()
}

#[test]
fn add_list_rm_roundtrip() {
    let tmp = TempDir::new().unwrap();
    let root = container(&tmp);

    gwt()
        .args(["add", "feature"])
        .current_dir(root.join("main"))
        .assert()
        .success()
        .stdout(predicate::str::contains("new branch"));
    assert!(root.join("feature").join("README.md").is_file());

    let entries = list_json(&root.join("feature"));
    let mut names: Vec<&str> = entries.iter().map(|e| e["name"].as_str().unwrap()).collect();
    names.sort_unstable();
    assert_eq!(names, ["feature", "main"]);
    let current = entries.iter().find(|e| e["is_current"] == true).unwrap();
    assert_eq!(current["name"], "feature");

    gwt()
        .args(["rm", "feature"])
        .current_dir(root.join("main"))
        .assert()
        .success();
    assert!(!root.join("feature").exists());

    // Without -d the branch survives its worktree.
    assert!(local_branches(&root).contains(&"feature".to_string()));
    let entries = list_json(&root.join("main"));
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["name"], "main");
}

#[test]
fn add_attaches_an_existing_branch_without_creating_one() {
    let tmp = TempDir::new().unwrap();
    let root = container(&tmp);
    git_stdout(&root.join(".bare"), &["branch", "feature"]);

    gwt()
        .args(["add", "feature"])
        .current_dir(root.join("main"))
        .assert()
        .success()
        .stdout(predicate::str::contains("existing branch"));

    let mut branches = local_branches(&root);
    branches.sort_unstable();
    assert_eq!(branches, ["feature", "main"]);
}

#[test]
fn duplicate_add_fails_without_side_effects() {
    let tmp = TempDir::new().unwrap();
    let root = container(&tmp);
    gwt()
        .args(["add", "feature"])
        .current_dir(root.join("main"))
        .assert()
        .success();

    gwt()
        .args(["add", "feature"])
        .current_dir(root.join("main"))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Target already exists"));

    assert!(root.join("feature").join("README.md").is_file());
    assert_eq!(list_json(&root.join("main")).len(), 2);
}

#[test]
fn removing_the_current_worktree_is_refused() {
    let tmp = TempDir::new().unwrap();
    let root = container(&tmp);

    gwt()
        .args(["rm", "main"])
        .current_dir(root.join("main"))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("currently in"));

    assert!(root.join("main").join("README.md").is_file());
}

#[test]
fn rm_d_with_unmerged_work_removes_worktree_but_keeps_branch() {
    let tmp = TempDir::new().unwrap();
    let root = container(&tmp);
    gwt()
        .args(["add", "feature"])
        .current_dir(root.join("main"))
        .assert()
        .success();
    commit_file(&root.join("feature"), "work.txt", "wip\n", "Unmerged work");

    // The refusal to delete the branch is a warning, not a failure.
    gwt()
        .args(["rm", "-d", "feature"])
        .current_dir(root.join("main"))
        .assert()
        .success()
        .stderr(predicate::str::contains("warning"))
        .stderr(predicate::str::contains("git branch -D feature"));

    assert!(!root.join("feature").exists());
    assert!(local_branches(&root).contains(&"feature".to_string()));
}

#[test]
fn rm_d_deletes_a_merged_branch() {
    let tmp = TempDir::new().unwrap();
    let root = container(&tmp);
    gwt()
        .args(["add", "feature"])
        .current_dir(root.join("main"))
        .assert()
        .success();

    gwt()
        .args(["rm", "-d", "feature"])
        .current_dir(root.join("main"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Worktree and branch"));

    assert!(!local_branches(&root).contains(&"feature".to_string()));
}

#[test]
fn cd_prints_exactly_the_worktree_path() {
    let tmp = TempDir::new().unwrap();
    let root = container(&tmp);

    let assert = gwt()
        .args(["cd", "main"])
        .current_dir(root.join("main"))
        .assert()
        .success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).into_owned();

    // One line, nothing but the path: the shell wrapper feeds this to cd.
    assert_eq!(stdout.lines().count(), 1);
    let printed = PathBuf::from(stdout.trim_end());
    let expected = std::fs::canonicalize(root.join("main")).unwrap();
    assert_eq!(printed, expected);
}

#[test]
fn cd_of_a_missing_worktree_prints_nothing_to_stdout() {
    let tmp = TempDir::new().unwrap();
    let root = container(&tmp);

    gwt()
        .args(["cd", "ghost"])
        .current_dir(root.join("main"))
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("No worktree found"));
}

#[test]
fn worktree_commands_refuse_a_standard_repository() {
    let tmp = TempDir::new().unwrap();
    let repo = tmp.path().join("plain");
    std::fs::create_dir_all(&repo).unwrap();
    gwt_test_utils::git::repo_with_history(&repo);

    gwt()
        .args(["add", "feature"])
        .current_dir(&repo)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("does not use the worktree layout"));
}

#[test]
fn list_json_entries_have_the_documented_fields() {
    let tmp = TempDir::new().unwrap();
    let root = container(&tmp);

    let entries = list_json(&root.join("main"));
    assert_eq!(entries.len(), 1);
    let entry = entries[0].as_object().unwrap();
    assert_eq!(entry["name"], "main");
    assert_eq!(entry["branch"], "main");
    assert_eq!(entry["is_current"], true);
    assert!(entry["path"].as_str().unwrap().ends_with("main"));
}
