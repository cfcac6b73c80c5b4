//! In-place conversion of a standard repository to the worktree layout.
//!
//! The new shape is staged in a scratch directory next to the repository
//! and the original `.git` and working files are deleted only after the
//! staged store and worktree have been moved into place and relinked. An
//! interrupted conversion leaves the original repository usable, at worst
//! with a stray scratch directory beside it.

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use gwt_git::Git;

use crate::confirm::Confirm;
use crate::context::{BARE_DIR, Layout, RepoContext};
use crate::error::{Error, Result};
use crate::io::{copy_dir_all, copy_dir_contents_except, remove_dir_contents_except};
use crate::naming::validate_branch_name;

/// Outcome of a successful conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Converted {
    /// Container root (the original repository root).
    pub root: PathBuf,
    /// Branch the initial worktree was created for.
    pub branch: String,
    /// Path of the initial worktree.
    pub worktree: PathBuf,
}

/// Converts the repository containing `cwd` to the worktree layout.
///
/// Asks `confirm` once before touching anything; a declined prompt returns
/// [`Error::Aborted`] with the repository untouched.
pub fn convert(
    git: &dyn Git,
    cwd: &Path,
    branch: &str,
    confirm: &mut dyn Confirm,
) -> Result<Converted> {
    validate_branch_name(branch)?;
    let ctx = RepoContext::resolve(git, cwd)?;
    if ctx.layout == Layout::Worktree {
        return Err(Error::AlreadyConverted {
            bare_dir: ctx.common_dir,
        });
    }

    let root = ctx.root.clone();
    let metadata = root.join(".git");
    let target = root.join(branch);
    // symlink_metadata so a dangling link at the target name still counts.
    if target.symlink_metadata().is_ok() {
        return Err(Error::TargetExists { path: target });
    }

    let prompt = format!(
        "Convert '{}' to the worktree layout? This rewrites {} in place",
        repo_name(&root),
        root.display()
    );
    if !confirm.confirm(&prompt) {
        return Err(Error::Aborted);
    }

    tracing::debug!(root = %root.display(), branch, "converting repository");

    // Stage next to the repository so the later renames stay on one
    // filesystem.
    let parent = ctx.container();
    let staging = tempfile::Builder::new()
        .prefix(".gwt-convert-")
        .tempdir_in(&parent)
        .map_err(|e| Error::io(&parent, e))?;
    let staging_path = staging.path().to_path_buf();

    let staged_bare = staging_path.join(BARE_DIR);
    copy_dir_all(&metadata, &staged_bare)?;
    git.set_config(&staged_bare, "core.bare", "true")?;

    // Worktree records copied from the original would claim branches as
    // already checked out; the staged store starts with none.
    let stale = staged_bare.join("worktrees");
    if stale.exists() {
        fs::remove_dir_all(&stale).map_err(|e| Error::io(&stale, e))?;
    }

    let staged_worktree = staging_path.join(branch);
    if let Some(nested) = staged_worktree.parent()
        && nested != staging_path
    {
        fs::create_dir_all(nested).map_err(|e| Error::io(nested, e))?;
    }
    git.add_worktree(&staged_bare, &staged_worktree, branch)?;
    copy_dir_contents_except(&root, &staged_worktree, &[OsStr::new(".git")])?;

    // Point of adoption: move the staged pieces into the root, then rewrite
    // the linkage files for their final locations. Parent directories for a
    // nested branch are settled first so neither rename can fail on them.
    let final_bare = root.join(BARE_DIR);
    let final_worktree = root.join(branch);
    prepare_worktree_parent(&root, branch)?;
    fs::rename(&staged_bare, &final_bare).map_err(|e| Error::io(&final_bare, e))?;
    fs::rename(&staged_worktree, &final_worktree).map_err(|e| Error::io(&final_worktree, e))?;
    relink_worktree(&final_bare, &final_worktree)?;

    // Only now is the original content redundant.
    remove_originals(&root, branch)?;

    staging
        .close()
        .map_err(|e| Error::io(&staging_path, e))?;

    tracing::debug!(worktree = %final_worktree.display(), "conversion complete");
    Ok(Converted {
        root,
        branch: branch.to_string(),
        worktree: final_worktree,
    })
}

fn repo_name(root: &Path) -> String {
    root.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| root.display().to_string())
}

/// Clears anything standing where the parent directories of a nested
/// worktree must go, then creates them. Working files removed here were
/// already copied into the staged worktree.
fn prepare_worktree_parent(root: &Path, branch: &str) -> Result<()> {
    let mut components: Vec<&str> = branch.split('/').collect();
    components.pop();
    if components.is_empty() {
        return Ok(());
    }
    let mut dir = root.to_path_buf();
    for component in components {
        dir.push(component);
        if let Ok(meta) = fs::symlink_metadata(&dir)
            && !meta.file_type().is_dir()
        {
            fs::remove_file(&dir).map_err(|e| Error::io(&dir, e))?;
        }
    }
    fs::create_dir_all(&dir).map_err(|e| Error::io(&dir, e))
}

/// Deletes the original working files once the staged pieces are in place.
/// The root keeps the bare store and the branch's leading component; each
/// level below keeps only the next component of the branch path.
fn remove_originals(root: &Path, branch: &str) -> Result<()> {
    let mut components = branch.split('/');
    let mut keep = components.next().unwrap_or(branch);
    remove_dir_contents_except(root, &[OsStr::new(BARE_DIR), OsStr::new(keep)])?;
    let mut dir = root.to_path_buf();
    for next in components {
        dir.push(keep);
        remove_dir_contents_except(&dir, &[OsStr::new(next)])?;
        keep = next;
    }
    Ok(())
}

/// Rewrites both halves of the worktree linkage for the final locations:
/// the worktree's `.git` link file and the admin record's `gitdir`
/// back-pointer inside the bare store.
fn relink_worktree(bare: &Path, worktree: &Path) -> Result<()> {
    let dotgit = worktree.join(".git");
    let content = fs::read_to_string(&dotgit).map_err(|e| Error::io(&dotgit, e))?;
    let admin_name = content
        .trim()
        .strip_prefix("gitdir:")
        .map(str::trim)
        .and_then(|p| Path::new(p).file_name())
        .map(OsStr::to_os_string)
        .ok_or_else(|| Error::InvalidWorktree {
            path: dotgit.clone(),
        })?;

    let admin = bare.join("worktrees").join(&admin_name);
    fs::write(&dotgit, format!("gitdir: {}\n", admin.display()))
        .map_err(|e| Error::io(&dotgit, e))?;
    let back_pointer = admin.join("gitdir");
    fs::write(&back_pointer, format!("{}\n", dotgit.display()))
        .map_err(|e| Error::io(&back_pointer, e))?;
    Ok(())
}
