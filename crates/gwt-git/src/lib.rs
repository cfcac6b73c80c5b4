//! Git subprocess layer for gwt.
//!
//! This crate owns every interaction with the git binary. It exposes a
//! deliberately narrow [`Git`] trait covering only the commands the worktree
//! layout needs, plus [`SystemGit`], the implementation that spawns `git`
//! with an explicit `-C <dir>` for each call.
//!
//! Output handling follows one rule: on success, stdout is returned trimmed;
//! on failure, git's stderr is carried in the error unchanged.

pub mod error;
pub mod provider;
pub mod system;
pub mod worktrees;

pub use error::{Error, Result};
pub use provider::Git;
pub use system::SystemGit;
pub use worktrees::{parse_worktree_list, WorktreeEntry};
