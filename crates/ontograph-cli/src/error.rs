//! Error types for the CLI application.

use ontograph_domain::DomainError;
use ontograph_store::StoreError;
use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid resource
    #[error("Invalid resource: {0}")]
    Domain(#[from] DomainError),

    /// Ontology error
    #[error("{0}")]
    Store(#[from] StoreError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Readline error
    #[error("Readline error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),

    /// Statement could not be parsed
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Script statement failed
    #[error("line {line}: {source}")]
    Script {
        /// 1-based line number in the script
        line: usize,
        /// Underlying error
        #[source]
        source: Box<CliError>,
    },
}
