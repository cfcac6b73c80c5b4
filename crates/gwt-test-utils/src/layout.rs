//! Fixtures for the `.bare` worktree layout.
//!
//! Built with plain git commands that work on any reasonably recent git,
//! so tests never depend on the conversion code they are trying to verify.

use std::fs;
use std::path::Path;

use crate::git::{repo_with_history_on, run_git};

/// Builds a converted container at `root`: a `.bare/` metadata store plus
/// one worktree directory named after `branch`, with one commit of history.
///
/// # Panics
/// Panics if any filesystem or git operation fails.
pub fn converted_container(root: &Path, branch: &str) {
    let seed = tempfile::tempdir()
        .unwrap_or_else(|e| panic!("converted_container: failed to create seed dir: {e}"));
    repo_with_history_on(seed.path(), branch);

    fs::create_dir_all(root)
        .unwrap_or_else(|e| panic!("converted_container: failed to create {}: {e}", root.display()));
    run_git(
        root,
        [
            "clone".as_ref(),
            "--bare".as_ref(),
            seed.path().as_os_str(),
            ".bare".as_ref(),
        ],
    );

    let bare = root.join(".bare");
    // `git clone --bare` does not copy the seed's local config, so give the
    // store its own identity; worktrees attached to it commit through it.
    run_git(&bare, ["config", "user.email", "test@test.com"]);
    run_git(&bare, ["config", "user.name", "Test User"]);
    run_git(&bare, ["config", "commit.gpgsign", "false"]);

    let worktree = root.join(branch);
    run_git(
        &bare,
        [
            "worktree".as_ref(),
            "add".as_ref(),
            worktree.as_os_str(),
            branch.as_ref(),
        ],
    );
    // The seed is gone after this function returns; drop the dangling remote
    // so nothing accidentally fetches from it.
    run_git(&bare, ["remote", "remove", "origin"]);
}

/// Builds a bare repository at `dest` suitable as a clone source, with its
/// HEAD pointing at `default_branch`.
///
/// # Panics
/// Panics if any filesystem or git operation fails.
pub fn bare_remote(dest: &Path, default_branch: &str) {
    let seed = tempfile::tempdir()
        .unwrap_or_else(|e| panic!("bare_remote: failed to create seed dir: {e}"));
    repo_with_history_on(seed.path(), default_branch);

    let parent = dest.parent().unwrap_or_else(|| Path::new("/"));
    fs::create_dir_all(parent)
        .unwrap_or_else(|e| panic!("bare_remote: failed to create {}: {e}", parent.display()));
    run_git(
        seed.path(),
        [
            "clone".as_ref(),
            "--bare".as_ref(),
            seed.path().as_os_str(),
            dest.as_os_str(),
        ],
    );
    let target = format!("refs/heads/{default_branch}");
    run_git(dest, ["symbolic-ref", "HEAD", target.as_str()]);
}
