//! Error handling for the CLI application

use std::fmt;

/// CLI-specific error conditions
#[derive(Debug)]
pub enum CliError {
    /// File not found or inaccessible
    FileNotFound(String),
    /// Invalid file pattern
    InvalidPattern(String),
    /// Rules configuration error
    ConfigError(String),
    /// Input rejected by the splitter
    ProcessingError(String),
    /// A translation was given for more than one source file
    AmbiguousTranslation(usize),
    /// The translation check asked for escalation
    EscalationRequired(u8),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CliError::InvalidPattern(pattern) => write!(f, "Invalid file pattern: {pattern}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::ProcessingError(msg) => write!(f, "Processing error: {msg}"),
            CliError::AmbiguousTranslation(count) => write!(
                f,
                "A translation needs exactly one source input, got {count}"
            ),
            CliError::EscalationRequired(score) => {
                write!(f, "Translation needs escalation (suspicion score {score})")
            }
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
