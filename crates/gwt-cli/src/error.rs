//! Error types for gwt-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from gwt-core
    #[error(transparent)]
    Core(#[from] gwt_core::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON encoding error
    #[error("Failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
}
