//! Resolving a branch name to its worktree path.

use std::path::{Path, PathBuf};

use gwt_git::Git;

use crate::context::{RepoContext, canonicalized, paths_equal};
use crate::error::{Error, Result};
use crate::naming::validate_branch_name;

/// Returns the absolute path of the worktree for `branch`.
///
/// The path must both exist at the conventional container location and be
/// registered with git; a directory git does not know about resolves to
/// [`Error::InvalidWorktree`] rather than a path that would mislead a
/// `cd` wrapper.
pub fn resolve_worktree_path(git: &dyn Git, cwd: &Path, branch: &str) -> Result<PathBuf> {
    validate_branch_name(branch)?;
    let ctx = RepoContext::resolve(git, cwd)?;

    let target = ctx.worktree_path(branch);
    if !target.is_dir() {
        return Err(Error::NotFound {
            name: branch.to_string(),
        });
    }

    let entries = git.list_worktrees(&ctx.root)?;
    if entries
        .iter()
        .any(|e| !e.bare && paths_equal(&e.path, &target))
    {
        Ok(canonicalized(&target))
    } else {
        Err(Error::InvalidWorktree { path: target })
    }
}
