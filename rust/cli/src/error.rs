//! Error types for the CLI application.
//!
//! Command handlers return `Result<(), CliError>` and propagate with `?`;
//! [`crate::run`] turns the error into an exit code.

use pokerhand_engine::errors::{DealError, ParseError};
use thiserror::Error;

use crate::config::ConfigError;

/// Custom error type for CLI operations.
#[derive(Debug, Error)]
pub enum CliError {
    /// I/O error (stdout/stderr writes, stdin reads, config file reads)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid user input or command-line arguments
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Card tokens that could not be parsed
    #[error("Invalid cards: {0}")]
    Parse(#[from] ParseError),

    /// The deck ran out while dealing
    #[error("Deal error: {0}")]
    Deal(#[from] DealError),

    /// Operation was interrupted (e.g. stdin closed mid-prompt)
    #[error("Interrupted: {0}")]
    Interrupted(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_errors_keep_engine_message() {
        let err: CliError = ParseError::InvalidSuit("AX".into()).into();
        assert_eq!(
            err.to_string(),
            "Invalid cards: Invalid suit in 'AX' (use S, H, D or C)"
        );
    }

    #[test]
    fn deal_errors_convert() {
        let err: CliError = DealError::DeckExhausted {
            requested: 7,
            remaining: 3,
        }
        .into();
        assert!(matches!(err, CliError::Deal(_)));
        assert!(err.to_string().contains("only 3 left"));
    }
}
