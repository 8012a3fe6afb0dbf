//! Error types for hostmeta-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from hostmeta-core
    #[error(transparent)]
    Core(#[from] hostmeta_core::Error),

    /// Error from hostmeta-fs
    #[error(transparent)]
    Fs(#[from] hostmeta_fs::Error),

    /// Error from hostmeta-transform
    #[error(transparent)]
    Transform(#[from] hostmeta_transform::Error),

    /// Rendering YAML output failed
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    /// Rendering JSON output failed
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// User-facing error with a message
    #[error("{message}")]
    User { message: String },
}

impl CliError {
    /// Create a new user error with the given message
    pub fn user(message: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
        }
    }
}
