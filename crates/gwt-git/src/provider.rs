//! The [`Git`] trait, the seam between layout logic and the git binary.
//!
//! Higher layers depend on this trait instead of spawning processes
//! themselves, which keeps precondition and ordering logic testable with an
//! in-memory fake. [`crate::SystemGit`] is the production implementation.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::worktrees::WorktreeEntry;

/// Capability surface over the git command line.
///
/// All repository-scoped methods take an invocation directory explicitly;
/// implementations run the equivalent of `git -C <dir> ...`. Passing the
/// directory per call avoids any hidden dependency on the process working
/// directory.
pub trait Git {
    /// Absolute path of the working tree root containing `dir`.
    ///
    /// `git rev-parse --show-toplevel`.
    fn toplevel(&self, dir: &Path) -> Result<PathBuf>;

    /// Path of the shared metadata directory for the repository containing
    /// `dir`. May be reported relative to `dir`.
    ///
    /// `git rev-parse --git-common-dir`.
    fn common_dir(&self, dir: &Path) -> Result<PathBuf>;

    /// Short name of the branch HEAD points at. Fails when HEAD is detached
    /// or unborn.
    ///
    /// `git symbolic-ref --short HEAD`.
    fn head_branch(&self, dir: &Path) -> Result<String>;

    /// Whether a local branch named `branch` exists.
    fn branch_exists(&self, dir: &Path, branch: &str) -> Result<bool>;

    /// Short names of all local branches.
    fn local_branches(&self, dir: &Path) -> Result<Vec<String>>;

    /// Deletes a local branch with `git branch -d`, which refuses branches
    /// that are not fully merged.
    fn delete_branch(&self, dir: &Path, branch: &str) -> Result<()>;

    /// Checks out an existing branch into a new worktree at `path`.
    fn add_worktree(&self, dir: &Path, path: &Path, branch: &str) -> Result<()>;

    /// Creates branch `branch` (from `base` when given, otherwise from HEAD)
    /// and checks it out into a new worktree at `path`.
    fn add_worktree_with_branch(
        &self,
        dir: &Path,
        path: &Path,
        branch: &str,
        base: Option<&str>,
    ) -> Result<()>;

    /// Removes the worktree at `path` and its administrative records.
    fn remove_worktree(&self, dir: &Path, path: &Path) -> Result<()>;

    /// All worktrees of the repository, parsed from
    /// `git worktree list --porcelain`.
    fn list_worktrees(&self, dir: &Path) -> Result<Vec<WorktreeEntry>>;

    /// Clones `url` as a bare repository into `dest`.
    fn clone_bare(&self, url: &str, dest: &Path) -> Result<()>;

    /// Sets a repository-local configuration value.
    fn set_config(&self, dir: &Path, key: &str, value: &str) -> Result<()>;
}
