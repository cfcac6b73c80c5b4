//! The six layout operations.
//!
//! Each operation is a free function taking the [`Git`](gwt_git::Git)
//! capability and the invocation directory, returning a typed outcome the
//! CLI renders. Precondition checks run before any mutation, so a failed
//! precondition never leaves partial state behind.

pub mod add;
pub mod clone;
pub mod convert;
pub mod list;
pub mod remove;
pub mod resolve;

pub use add::{Added, add_worktree};
pub use clone::{Cloned, clone_with_layout};
pub use convert::{Converted, convert};
pub use list::{WorktreeInfo, list_worktrees};
pub use remove::{BranchDeletion, Removed, remove_worktree};
pub use resolve::resolve_worktree_path;
