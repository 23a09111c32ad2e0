//! Error types.

/// Errors from loading, saving or validating the game configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the config file from disk.
    #[error("failed to read config: {0}")]
    Read(#[source] std::io::Error),

    /// Failed to write the config file to disk.
    #[error("failed to write config: {0}")]
    Write(#[source] std::io::Error),

    /// Failed to parse RON content.
    #[error("failed to parse config: {0}")]
    Parse(#[source] ron::error::SpannedError),

    /// Failed to serialize config to RON.
    #[error("failed to serialize config: {0}")]
    Serialize(#[source] ron::Error),

    /// A value that would make the simulation undefined.
    #[error("invalid config `{field}`: {reason}")]
    Invalid { field: String, reason: String },
}

impl ConfigError {
    pub fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ConfigError::Invalid {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Errors from the high-score persistence collaborator.
#[derive(Debug, thiserror::Error)]
pub enum ScoreStoreError {
    #[error("failed to read high score: {0}")]
    Read(#[source] std::io::Error),

    #[error("failed to write high score: {0}")]
    Write(#[source] std::io::Error),

    #[error("high score file is corrupt: {0}")]
    Parse(#[source] std::num::ParseIntError),
}
