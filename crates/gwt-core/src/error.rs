//! Error types for gwt-core

use std::path::PathBuf;

/// Result type for gwt-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while managing the worktree layout
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The starting directory is not inside any git repository
    #[error("Not a git repository: {path}")]
    NotARepository { path: PathBuf },

    /// Conversion requested for a repository already in the worktree layout
    #[error("Repository already uses the worktree layout (bare store at {bare_dir})")]
    AlreadyConverted { bare_dir: PathBuf },

    /// A worktree operation requires the worktree layout
    #[error("Repository at {root} does not use the worktree layout; run `gwt init` first")]
    NotConverted { root: PathBuf },

    /// The path a new worktree or clone would occupy is already taken
    #[error("Target already exists: {path}")]
    TargetExists { path: PathBuf },

    /// No worktree directory exists for the named branch
    #[error("No worktree found for branch '{name}'")]
    NotFound { name: String },

    /// Refusing to remove the worktree the command was started from
    #[error("Cannot remove the worktree you are currently in ('{name}')")]
    CannotRemoveCurrent { name: String },

    /// A directory exists where a worktree should be but git does not know it
    #[error("Path exists but is not a registered worktree: {path}")]
    InvalidWorktree { path: PathBuf },

    /// The branch name cannot be used as a directory name
    #[error("Invalid branch name: '{name}'")]
    InvalidBranchName { name: String },

    /// No directory name could be derived from the clone URL
    #[error("Cannot derive a directory name from '{url}'; pass one explicitly")]
    InvalidCloneUrl { url: String },

    /// The user declined a confirmation prompt
    #[error("Aborted")]
    Aborted,

    /// Filesystem failure with the path it occurred at
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Git subprocess error, carrying git's own stderr
    #[error(transparent)]
    Git(#[from] gwt_git::Error),
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
