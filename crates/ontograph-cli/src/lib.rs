//! Ontograph CLI library.
//!
//! This library provides the core functionality for the Ontograph command-line interface,
//! including configuration management, statement parsing and execution, and output formatting.

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod repl;
pub mod runner;
pub mod script;
pub mod session;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
pub use session::{Outcome, Session};
