use thiserror::Error;

/// Unified error type for commit-classify operations.
///
/// Classification and release detection never fail; these errors only come
/// from the surrounding configuration and version handling.
#[derive(Error, Debug)]
pub enum ClassifyError {
    #[error("Version error: {0}")]
    Version(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration file: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON output failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results in commit-classify
pub type Result<T> = std::result::Result<T, ClassifyError>;

impl ClassifyError {
    /// Create a version error with context
    pub fn version(msg: impl Into<String>) -> Self {
        ClassifyError::Version(msg.into())
    }
}
