//! Repository discovery and layout detection.
//!
//! Every operation starts here: [`RepoContext::resolve`] asks git where the
//! enclosing repository lives and classifies its layout. Detection is based
//! on the shared metadata path, so it works from the repository root, from
//! any subdirectory, and from any worktree of a converted container.

use std::path::{Path, PathBuf};

use gwt_git::Git;

use crate::error::{Error, Result};

/// Name of the hidden bare metadata store inside a converted container.
pub const BARE_DIR: &str = ".bare";

/// How a repository stores its metadata and working files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Conventional repository: `.git/` inside the working tree root.
    Standard,
    /// Converted container: `.bare/` store with sibling worktree
    /// directories named after branches.
    Worktree,
}

/// The repository an invocation operates on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoContext {
    /// Root of the worktree the invocation started in.
    pub root: PathBuf,
    /// Shared metadata directory (`.git/` or `<container>/.bare`).
    pub common_dir: PathBuf,
    /// Detected layout.
    pub layout: Layout,
}

impl RepoContext {
    /// Resolves the repository enclosing `cwd`.
    ///
    /// Returns [`Error::NotARepository`] when git reports that `cwd` is not
    /// inside a working tree. Other git failures pass through unchanged.
    pub fn resolve(git: &dyn Git, cwd: &Path) -> Result<Self> {
        let root = match git.toplevel(cwd) {
            Ok(path) => canonicalized(&path),
            Err(gwt_git::Error::CommandFailed { .. }) => {
                return Err(Error::NotARepository {
                    path: cwd.to_path_buf(),
                });
            }
            Err(e) => return Err(e.into()),
        };

        let reported = git.common_dir(cwd)?;
        // git may report the common dir relative to the invocation directory.
        let common_dir = if reported.is_absolute() {
            canonicalized(&reported)
        } else {
            canonicalized(&cwd.join(reported))
        };

        let layout = if common_dir
            .components()
            .any(|c| c.as_os_str() == BARE_DIR)
        {
            Layout::Worktree
        } else {
            Layout::Standard
        };
        tracing::debug!(root = %root.display(), common_dir = %common_dir.display(), ?layout, "resolved repository");

        Ok(Self {
            root,
            common_dir,
            layout,
        })
    }

    /// The directory that holds (or would hold) the sibling worktrees.
    ///
    /// For the worktree layout this is the container: the parent of the
    /// `.bare` store. For a standard repository it is the parent of the
    /// repository root, where a converted container would place siblings.
    pub fn container(&self) -> PathBuf {
        let base = match self.layout {
            Layout::Worktree => self.common_dir.parent(),
            Layout::Standard => self.root.parent(),
        };
        base.map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("/"))
    }

    /// Where the worktree for `branch` lives (or would live) by convention.
    pub fn worktree_path(&self, branch: &str) -> PathBuf {
        self.container().join(branch)
    }

    /// Fails with [`Error::NotConverted`] unless the repository uses the
    /// worktree layout.
    pub fn require_worktree_layout(&self) -> Result<()> {
        if self.layout == Layout::Worktree {
            Ok(())
        } else {
            Err(Error::NotConverted {
                root: self.root.clone(),
            })
        }
    }
}

/// Canonicalizes when possible, otherwise returns the path unchanged.
/// Missing paths stay as given instead of failing here.
pub(crate) fn canonicalized(path: &Path) -> PathBuf {
    dunce::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}

/// Compares two paths after canonicalization.
pub(crate) fn paths_equal(a: &Path, b: &Path) -> bool {
    canonicalized(a) == canonicalized(b)
}
