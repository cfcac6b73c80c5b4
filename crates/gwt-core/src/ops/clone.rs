//! Cloning a remote directly into the worktree layout.

use std::fs;
use std::path::{Path, PathBuf};

use gwt_git::Git;

use crate::context::BARE_DIR;
use crate::error::{Error, Result};
use crate::naming::{DEFAULT_BRANCH, dir_name_from_url, validate_branch_name};

/// Refspec a plain `git clone` would configure; `clone --bare` defaults to
/// mirroring all refs instead, which breaks `origin/*` tracking.
const ORIGIN_FETCH_REFSPEC: &str = "+refs/heads/*:refs/remotes/origin/*";

/// Outcome of a successful clone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cloned {
    /// The new container directory.
    pub directory: PathBuf,
    /// Branch of the initial worktree.
    pub branch: String,
    /// Path of the initial worktree.
    pub worktree: PathBuf,
}

/// Clones `url` into a fresh container: `<dir>/.bare` plus one worktree for
/// the default branch (or `branch` when given).
///
/// On any failure after the target directory was created, the directory is
/// removed again so a retry starts clean.
pub fn clone_with_layout(
    git: &dyn Git,
    cwd: &Path,
    url: &str,
    dir: Option<&str>,
    branch: Option<&str>,
) -> Result<Cloned> {
    let dir_name = match dir {
        Some(d) => d.to_string(),
        None => dir_name_from_url(url).ok_or_else(|| Error::InvalidCloneUrl {
            url: url.to_string(),
        })?,
    };
    let target = if Path::new(&dir_name).is_absolute() {
        PathBuf::from(&dir_name)
    } else {
        cwd.join(&dir_name)
    };
    if target.exists() {
        return Err(Error::TargetExists { path: target });
    }
    if let Some(branch) = branch {
        validate_branch_name(branch)?;
    }

    tracing::debug!(url, target = %target.display(), "cloning into worktree layout");
    fs::create_dir_all(&target).map_err(|e| Error::io(&target, e))?;

    match clone_into(git, &target, url, branch) {
        Ok(cloned) => Ok(cloned),
        Err(e) => {
            // Leave no half-cloned container behind.
            if let Err(cleanup) = fs::remove_dir_all(&target) {
                tracing::warn!(path = %target.display(), error = %cleanup, "cleanup after failed clone did not finish");
            }
            Err(e)
        }
    }
}

fn clone_into(git: &dyn Git, target: &Path, url: &str, branch: Option<&str>) -> Result<Cloned> {
    let bare = target.join(BARE_DIR);
    git.clone_bare(url, &bare)?;
    git.set_config(&bare, "remote.origin.fetch", ORIGIN_FETCH_REFSPEC)?;

    let branch = match branch {
        Some(b) => b.to_string(),
        None => default_branch(git, &bare),
    };
    // Detected names come from the remote; hold them to the same rules as
    // user input.
    validate_branch_name(&branch)?;

    let worktree = target.join(&branch);
    git.add_worktree(&bare, &worktree, &branch)?;

    Ok(Cloned {
        directory: target.to_path_buf(),
        branch,
        worktree,
    })
}

/// Picks the branch for the initial worktree: the remote's HEAD when it
/// names a real branch, otherwise a scan preferring `main` then `master`,
/// otherwise the first branch, otherwise the literal default.
fn default_branch(git: &dyn Git, bare: &Path) -> String {
    if let Ok(head) = git.head_branch(bare)
        && !head.is_empty()
        && git.branch_exists(bare, &head).unwrap_or(false)
    {
        tracing::debug!(branch = %head, "default branch from remote HEAD");
        return head;
    }

    let branches = git.local_branches(bare).unwrap_or_default();
    for candidate in [DEFAULT_BRANCH, "master"] {
        if branches.iter().any(|b| b == candidate) {
            tracing::debug!(branch = candidate, "default branch from scan");
            return candidate.to_string();
        }
    }
    branches
        .first()
        .cloned()
        .unwrap_or_else(|| DEFAULT_BRANCH.to_string())
}
