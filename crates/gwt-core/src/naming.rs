//! Branch and directory naming rules.
//!
//! Worktree directories are named after their branch, so a branch name is
//! also a relative path under the container. These checks reject names that
//! would escape the container, collide with the metadata store, or read as
//! command-line flags. Everything else is left to git's own ref validation.

use crate::context::BARE_DIR;
use crate::error::{Error, Result};

/// Branch used when nothing else is specified or detected.
pub const DEFAULT_BRANCH: &str = "main";

/// Validates that `name` is usable as both a branch name and a worktree
/// directory path.
///
/// Slashes are allowed (git branch names commonly contain them) and produce
/// nested directories. Each path component must be a plain name.
pub fn validate_branch_name(name: &str) -> Result<()> {
    let invalid = || {
        Err(Error::InvalidBranchName {
            name: name.to_string(),
        })
    };

    if name.is_empty() || name.starts_with('-') {
        return invalid();
    }
    if name.contains('\\') || name.contains('\0') || name.chars().any(char::is_whitespace) {
        return invalid();
    }
    for component in name.split('/') {
        if component.is_empty()
            || component == "."
            || component == ".."
            || component == ".git"
            || component == BARE_DIR
        {
            return invalid();
        }
    }
    Ok(())
}

/// Derives a directory name from a clone URL, mirroring what `git clone`
/// would choose: the last path segment with a trailing `.git` stripped.
///
/// Returns `None` when no usable name remains.
pub fn dir_name_from_url(url: &str) -> Option<String> {
    let trimmed = url.trim_end_matches('/');
    // For scheme URLs only the path part can name the directory; a bare
    // authority ("https://example.com") cannot.
    let source = match trimmed.split_once("://") {
        Some((_, rest)) => rest.split_once('/')?.1,
        None => trimmed,
    };
    let tail = source.rsplit(['/', ':']).next()?;
    let name = tail.strip_suffix(".git").unwrap_or(tail);
    if name.is_empty() || name == "." || name == ".." {
        return None;
    }
    Some(name.to_string())
}
