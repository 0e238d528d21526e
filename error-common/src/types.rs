use thiserror::Error;

use crate::codes;

/// Error enum shared by every FieldKit crate
#[derive(Error, Debug)]
pub enum FieldKitError {
    /// Input had the wrong shape (e.g. a JSON root that is not an object)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A field value failed a metadata rule
    #[error("Validation error on `{field}`: {message}")]
    Validation { field: String, message: String },

    /// JSON (de)serialization errors
    #[error("JSON error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML (de)serialization errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File and stream errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Wrapped external errors
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FieldKitError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Stable code for reporting, see [`crate::codes`]
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidInput(_) => codes::validation::INVALID_INPUT,
            Self::Validation { .. } => codes::validation::RULE_VIOLATION,
            Self::Serialization(_) => codes::format::INVALID_JSON,
            Self::Yaml(_) => codes::format::INVALID_YAML,
            Self::Config(_) => codes::config::INVALID_SETTING,
            Self::Io(_) => codes::system::IO_FAILURE,
            Self::Other(_) => codes::system::INTERNAL,
        }
    }
}

/// Result type alias for FieldKit operations
pub type Result<T> = std::result::Result<T, FieldKitError>;

/// Emit a structured error event
pub fn log_error(context: &str, error: &FieldKitError) {
    tracing::error!(
        context = context,
        error_code = error.code(),
        error = %error,
        "FieldKit error occurred"
    );
}
