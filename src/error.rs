//! Error handling for the hydrogen price generator
//!
//! Price generation itself cannot fail. Everything here comes from the
//! surrounding layers: config files, CLI arguments and writing output.

use std::io;

use crate::config::ConfigError;

/// Main error type for the price generator
#[derive(Debug, thiserror::Error)]
pub enum PriceError {
    // Configuration errors
    #[error("Configuration file not found: {0}")]
    ConfigNotFound(String),
    #[error("Configuration parse error: {0}")]
    ConfigParse(String),
    #[error("Configuration validation error: {0}")]
    ConfigValidation(String),

    // Argument errors
    #[error("Invalid parameter '{0}': {1}")]
    InvalidParameter(String, String), // (parameter_name, reason)

    // Output errors
    #[error("Failed to render output: {0}")]
    Render(String),

    // IO errors
    #[error("File already exists: {0}")]
    FileExists(String),
    #[error("File read error: {0}")]
    FileRead(String),
    #[error("File write error: {0}")]
    FileWrite(String),
    #[error("Output stream error: {0}")]
    Output(String),
}

impl PriceError {
    /// Get a user-friendly error message with helpful context
    pub fn user_message(&self) -> String {
        match self {
            PriceError::ConfigNotFound(path) => {
                format!(
                    "Configuration file not found: {}\n\n\
                    💡 Quick fix:\n\
                    1. Run: h2-prices init\n\
                    2. Or omit --config to use built-in defaults",
                    path
                )
            }
            PriceError::ConfigValidation(msg) => {
                format!(
                    "Configuration validation error: {}\n\n\
                    💡 Check the config file for:\n\
                    - A known logging.level\n\
                    - output.precision of 17 or less",
                    msg
                )
            }
            PriceError::FileExists(path) => {
                format!(
                    "Refusing to overwrite {}\n\n\
                    💡 Re-run with --force to replace it",
                    path
                )
            }
            _ => self.to_string(),
        }
    }

    /// Get error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            PriceError::ConfigNotFound(_)
            | PriceError::ConfigParse(_)
            | PriceError::ConfigValidation(_) => "config",

            PriceError::InvalidParameter(_, _) => "validation",

            PriceError::Render(_) => "output",

            PriceError::FileExists(_)
            | PriceError::FileRead(_)
            | PriceError::FileWrite(_)
            | PriceError::Output(_) => "io",
        }
    }
}

// Conversion implementations for common error types

impl From<io::Error> for PriceError {
    fn from(err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => PriceError::FileRead(err.to_string()),
            io::ErrorKind::AlreadyExists => PriceError::FileExists(err.to_string()),
            io::ErrorKind::PermissionDenied => PriceError::FileRead(err.to_string()),
            _ => PriceError::Output(err.to_string()),
        }
    }
}

impl From<ConfigError> for PriceError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::NotFound(path) => PriceError::ConfigNotFound(path),
            ConfigError::AlreadyExists(path) => PriceError::FileExists(path),
            ConfigError::FileRead(msg) => PriceError::FileRead(msg),
            ConfigError::FileWrite(msg) => PriceError::FileWrite(msg),
            ConfigError::Parse(msg) => PriceError::ConfigParse(msg),
            ConfigError::Serialize(msg) => PriceError::Render(msg),
            ConfigError::Validation(msg) => PriceError::ConfigValidation(msg),
        }
    }
}

impl From<serde_json::Error> for PriceError {
    fn from(err: serde_json::Error) -> Self {
        PriceError::Render(format!("JSON error: {}", err))
    }
}

impl From<chrono::ParseError> for PriceError {
    fn from(err: chrono::ParseError) -> Self {
        PriceError::InvalidParameter("date".to_string(), format!("expected YYYY-MM-DD ({})", err))
    }
}

/// Result type alias using PriceError
pub type PriceResult<T> = Result<T, PriceError>;
