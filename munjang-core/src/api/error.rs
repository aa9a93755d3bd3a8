//! Error types for the API

use thiserror::Error;

/// Error type for API operations
///
/// Text that merely segments badly is never an error; it comes back as a
/// low-confidence result. Errors are reserved for input that cannot be
/// processed at all and for broken configuration.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Invalid input (not UTF-8 text)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Infrastructure error (I/O, etc.)
    #[error("Infrastructure error: {0}")]
    Infrastructure(String),
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, Error>;
