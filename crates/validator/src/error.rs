//! Configuration errors.
//!
//! These describe a misconfigured caller (an unknown type identifier, a
//! malformed rules file), never a failed validation. Failed validations are
//! [`ValidationError`](crate::foundation::ValidationError) values.

/// Errors raised while building validators from configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A type identifier that no pattern is registered for.
    #[error("unknown typed regex type `{0}`")]
    UnknownType(String),

    /// A rules document that could not be parsed.
    #[error("invalid rules document: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;
