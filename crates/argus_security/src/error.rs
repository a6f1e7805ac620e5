//! # Engine Error Types
//!
//! Errors exist only at the configuration boundary. Evaluation itself is
//! total: a malformed or missing report section is insufficient evidence,
//! never an error.

use thiserror::Error;

/// Errors that can occur while loading or validating scoring configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TrustError {
    /// The configuration file could not be read.
    #[error("failed to read scoring config {path}: {message}")]
    ConfigRead {
        /// Path that was attempted.
        path: String,
        /// Underlying I/O failure, rendered.
        message: String,
    },

    /// The configuration file is not valid TOML for the scoring schema.
    #[error("failed to parse scoring config: {0}")]
    ConfigParse(String),

    /// The configuration parsed but its values are incoherent.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for engine configuration operations.
pub type TrustResult<T> = Result<T, TrustError>;
