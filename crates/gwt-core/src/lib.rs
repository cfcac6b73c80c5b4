//! Core layout logic for gwt.
//!
//! This crate implements the `.bare` worktree layout: a repository whose
//! git metadata lives in a hidden bare store with sibling worktree
//! directories named after their branches, instead of a `.git/` inside a
//! single working tree.
//!
//! It provides:
//!
//! - **Layout detection**: [`RepoContext`] classifies a repository as
//!   [`Layout::Standard`] or [`Layout::Worktree`] from its shared metadata
//!   path
//! - **Conversion**: [`convert`] rewrites a standard repository in place,
//!   staged so the original survives any failure
//! - **Worktree operations**: [`add_worktree`], [`remove_worktree`],
//!   [`list_worktrees`], [`resolve_worktree_path`]
//! - **Cloning**: [`clone_with_layout`] creates a fresh container from a
//!   remote
//!
//! # Architecture
//!
//! `gwt-core` sits between the CLI and the git subprocess layer:
//!
//! ```text
//!     gwt-cli
//!        |
//!     gwt-core
//!        |
//!     gwt-git
//!        |
//!    git binary
//! ```
//!
//! All git access goes through the [`gwt_git::Git`] trait, so every
//! operation here can be exercised against an in-memory fake.

pub mod confirm;
pub mod context;
pub mod error;
mod io;
pub mod naming;
pub mod ops;

#[cfg(test)]
pub(crate) mod fake;

pub use confirm::{AutoConfirm, Confirm, DenyConfirm};
pub use context::{BARE_DIR, Layout, RepoContext};
pub use error::{Error, Result};
pub use naming::{DEFAULT_BRANCH, dir_name_from_url, validate_branch_name};
pub use ops::{
    Added, BranchDeletion, Cloned, Converted, Removed, WorktreeInfo, add_worktree,
    clone_with_layout, convert, list_worktrees, remove_worktree, resolve_worktree_path,
};
