//! Adding sibling worktrees to a converted container.

use std::path::{Path, PathBuf};

use gwt_git::Git;

use crate::context::RepoContext;
use crate::error::{Error, Result};
use crate::naming::validate_branch_name;

/// Outcome of a successful `add`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Added {
    /// Branch checked out in the new worktree.
    pub branch: String,
    /// Path of the new worktree.
    pub path: PathBuf,
    /// Whether the branch was created as part of the operation.
    pub created_branch: bool,
}

/// Creates the worktree for `branch` at the conventional container path.
///
/// An existing branch is attached as-is; a missing one is created from
/// `base` (or from the current HEAD when no base is given).
pub fn add_worktree(
    git: &dyn Git,
    cwd: &Path,
    branch: &str,
    base: Option<&str>,
) -> Result<Added> {
    validate_branch_name(branch)?;
    let ctx = RepoContext::resolve(git, cwd)?;
    ctx.require_worktree_layout()?;

    let target = ctx.worktree_path(branch);
    if target.exists() {
        return Err(Error::TargetExists { path: target });
    }

    tracing::debug!(branch, base, target = %target.display(), "adding worktree");
    let created_branch = if git.branch_exists(&ctx.root, branch)? {
        if base.is_some() {
            tracing::warn!(branch, "branch already exists; base ignored");
        }
        git.add_worktree(&ctx.root, &target, branch)?;
        false
    } else {
        git.add_worktree_with_branch(&ctx.root, &target, branch, base)?;
        true
    };

    Ok(Added {
        branch: branch.to_string(),
        path: target,
        created_branch,
    })
}
