//! Plain git repository fixtures at several realism levels.
//!
//! Choose the lowest-realism fixture that satisfies your test's needs;
//! fakes are faster and have fewer external dependencies.

use std::ffi::OsString;
use std::fs;
use std::path::Path;
use std::process::Command;

/// Runs a git command in `dir`, panicking on any failure.
///
/// Fixture-only runner: tests that assert on git *failures* should go
/// through the crate under test instead.
///
/// # Panics
/// Panics if git cannot be spawned or exits unsuccessfully.
pub fn run_git<I, S>(dir: &Path, args: I)
where
    I: IntoIterator<Item = S>,
    S: AsRef<std::ffi::OsStr>,
{
    let args: Vec<OsString> = args.into_iter().map(|a| a.as_ref().to_os_string()).collect();
    let output = Command::new("git")
        .args(&args)
        .current_dir(dir)
        .output()
        .unwrap_or_else(|e| panic!("run_git: failed to run `git {args:?}`: {e}"));
    if !output.status.success() {
        panic!(
            "run_git: `git {args:?}` in {} failed:\n{}",
            dir.display(),
            String::from_utf8_lossy(&output.stderr)
        );
    }
}

/// Creates a minimal `.git` directory structure **without** initialising a
/// real git repository.
///
/// Realism level: **FAKE**. Directory structure only, no git object store.
///
/// Use for: tests that need a `.git` directory with copyable content but
/// drive git through a fake, so no real git operations ever touch it.
///
/// # Panics
/// Panics if the filesystem operations fail.
pub fn fake_git_dir(path: &Path) {
    fs::create_dir(path.join(".git"))
        .unwrap_or_else(|e| panic!("fake_git_dir: failed to create .git: {e}"));
    fs::write(path.join(".git/HEAD"), "ref: refs/heads/main\n")
        .unwrap_or_else(|e| panic!("fake_git_dir: failed to write HEAD: {e}"));
    fs::write(path.join(".git/config"), "[core]\n\tbare = false\n")
        .unwrap_or_else(|e| panic!("fake_git_dir: failed to write config: {e}"));
    fs::create_dir_all(path.join(".git/refs/heads"))
        .unwrap_or_else(|e| panic!("fake_git_dir: failed to create refs/heads: {e}"));
    fs::write(path.join(".git/refs/heads/main"), "")
        .unwrap_or_else(|e| panic!("fake_git_dir: failed to write refs/heads/main: {e}"));
}

/// Initialises a real git repository using `git2` (no initial commit, no
/// config).
///
/// Realism level: **REAL**. Valid git object store, empty history.
///
/// Use for: tests that need real repository detection but no commit history.
///
/// # Panics
/// Panics if `git2::Repository::init` fails.
pub fn real_git_repo(path: &Path) -> git2::Repository {
    git2::Repository::init(path).unwrap_or_else(|e| {
        panic!(
            "real_git_repo: failed to init repository at {}: {e}",
            path.display()
        )
    })
}

/// Initialises a real git repository with one commit on `main`.
///
/// Realism level: **REAL WITH HISTORY**. Valid git state, `main` branch,
/// one commit in history.
///
/// # Panics
/// Panics if any git operation fails.
pub fn repo_with_history(path: &Path) {
    repo_with_history_on(path, "main");
}

/// Like [`repo_with_history`], but the single branch is named `branch`.
///
/// Specifically:
/// - Runs `git init`
/// - Configures `user.email`, `user.name`, and `commit.gpgsign = false`
/// - Creates `README.md` and makes an initial commit
/// - Renames the default branch to `branch`
///
/// # Panics
/// Panics if any git operation fails.
pub fn repo_with_history_on(path: &Path, branch: &str) {
    run_git(path, ["init"]);
    run_git(path, ["config", "user.email", "test@test.com"]);
    run_git(path, ["config", "user.name", "Test User"]);
    run_git(path, ["config", "commit.gpgsign", "false"]);

    fs::write(path.join("README.md"), "# Fixture\n")
        .unwrap_or_else(|e| panic!("repo_with_history: failed to write README.md: {e}"));

    run_git(path, ["add", "."]);
    run_git(path, ["commit", "-m", "Initial commit"]);
    run_git(path, ["branch", "-m", branch]);
}

/// Adds a file and commits it in an existing repository or worktree.
///
/// # Panics
/// Panics if the write or any git operation fails.
pub fn commit_file(repo: &Path, file: &str, content: &str, message: &str) {
    let target = repo.join(file);
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)
            .unwrap_or_else(|e| panic!("commit_file: failed to create {}: {e}", parent.display()));
    }
    fs::write(&target, content)
        .unwrap_or_else(|e| panic!("commit_file: failed to write {}: {e}", target.display()));
    run_git(repo, ["add", "."]);
    run_git(repo, ["commit", "-m", message]);
}
