//! Error types for the address segmenter

use thiserror::Error;

/// Error type for configuration and table loading.
///
/// Segmenting text never fails; only building a segmenter from
/// configuration or loading lookup data does.
#[derive(Error, Debug)]
pub enum AddressError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("File system error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Result type for address operations
pub type Result<T> = std::result::Result<T, AddressError>;
