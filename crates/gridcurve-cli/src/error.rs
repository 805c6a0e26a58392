//! CLI error types.

use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Quote input could not be parsed.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// No quotes were given.
    #[error("No quotes given. Use --tenors with --prices, or --input <file.csv>.")]
    MissingQuotes,

    /// Chart rendering failed.
    #[error("Chart error: {0}")]
    Chart(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
