//! Listing worktrees of the current repository.

use std::path::{Path, PathBuf};

use gwt_git::Git;
use serde::Serialize;

use crate::context::{RepoContext, canonicalized};
use crate::error::Result;

/// One worktree as presented to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorktreeInfo {
    /// Directory name relative to the container.
    pub name: String,
    /// Absolute path.
    pub path: PathBuf,
    /// Checked-out branch, `None` when HEAD is detached.
    pub branch: Option<String>,
    /// Whether this is the worktree the invocation started in.
    pub is_current: bool,
}

/// Lists all worktrees of the repository containing `cwd`.
///
/// The bare store never appears in the result. Works in both layouts; a
/// standard repository simply lists its own root (plus any plain git
/// worktrees it has).
pub fn list_worktrees(git: &dyn Git, cwd: &Path) -> Result<Vec<WorktreeInfo>> {
    let ctx = RepoContext::resolve(git, cwd)?;
    let container = ctx.container();
    let entries = git.list_worktrees(&ctx.root)?;

    Ok(entries
        .into_iter()
        .filter(|e| !e.bare)
        .map(|e| {
            let path = canonicalized(&e.path);
            let name = path
                .strip_prefix(&container)
                .ok()
                .map(|p| p.to_string_lossy().into_owned())
                .filter(|n| !n.is_empty())
                .unwrap_or_else(|| e.name());
            let is_current = path == ctx.root;
            WorktreeInfo {
                name,
                path,
                branch: e.branch,
                is_current,
            }
        })
        .collect())
}
