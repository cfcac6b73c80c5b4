//! Error types for git subprocess invocations.

/// Errors produced while running the git command line.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The git executable could not be started at all.
    #[error("failed to run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Git ran and exited unsuccessfully. The message carries git's own
    /// stderr verbatim so callers never have to guess what went wrong.
    #[error("`{command}` failed: {stderr}")]
    CommandFailed { command: String, stderr: String },
}

/// Result alias for git operations.
pub type Result<T> = std::result::Result<T, Error>;
