//! Shared test utilities for the gwt workspace.
//!
//! This crate provides standardised test fixtures to eliminate duplication
//! across crate test suites. It is a dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`git`]: plain git repository fixtures at several realism levels
//! - [`layout`]: fixtures for the `.bare` worktree layout (converted
//!   containers, bare remotes)

pub mod git;
pub mod layout;

pub use git::run_git;
