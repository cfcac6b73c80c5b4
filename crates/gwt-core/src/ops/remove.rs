//! Removing worktrees, with optional branch deletion.

use std::path::{Path, PathBuf};

use gwt_git::Git;

use crate::context::{RepoContext, paths_equal};
use crate::error::{Error, Result};
use crate::naming::validate_branch_name;

/// What happened to the branch after its worktree was removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BranchDeletion {
    /// `git branch -d` succeeded.
    Deleted,
    /// git refused the deletion; the message is git's own stderr. The
    /// removal as a whole still counts as a success.
    Refused { message: String },
}

/// Outcome of a successful `rm`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Removed {
    /// Branch whose worktree was removed.
    pub branch: String,
    /// Path the worktree occupied.
    pub path: PathBuf,
    /// Result of the optional branch deletion, `None` when not requested.
    pub branch_deletion: Option<BranchDeletion>,
}

/// Removes the worktree for `branch` at the conventional container path.
///
/// Refuses to remove the worktree the invocation started in. With
/// `delete_branch`, a safe `git branch -d` runs afterwards; its refusal is
/// reported in the outcome rather than failing the removal.
pub fn remove_worktree(
    git: &dyn Git,
    cwd: &Path,
    branch: &str,
    delete_branch: bool,
) -> Result<Removed> {
    validate_branch_name(branch)?;
    let ctx = RepoContext::resolve(git, cwd)?;

    let target = ctx.worktree_path(branch);
    if paths_equal(&target, &ctx.root) {
        return Err(Error::CannotRemoveCurrent {
            name: branch.to_string(),
        });
    }

    let entries = git.list_worktrees(&ctx.root)?;
    let Some(entry) = entries
        .iter()
        .find(|e| !e.bare && paths_equal(&e.path, &target))
    else {
        return Err(if target.exists() {
            Error::InvalidWorktree { path: target }
        } else {
            Error::NotFound {
                name: branch.to_string(),
            }
        });
    };

    tracing::debug!(branch, path = %entry.path.display(), "removing worktree");
    git.remove_worktree(&ctx.root, &entry.path)?;

    let branch_deletion = if delete_branch {
        match git.delete_branch(&ctx.root, branch) {
            Ok(()) => Some(BranchDeletion::Deleted),
            Err(gwt_git::Error::CommandFailed { stderr, .. }) => {
                tracing::warn!(branch, reason = %stderr, "branch left in place");
                Some(BranchDeletion::Refused { message: stderr })
            }
            Err(e) => return Err(e.into()),
        }
    } else {
        None
    };

    Ok(Removed {
        branch: branch.to_string(),
        path: target,
        branch_deletion,
    })
}
