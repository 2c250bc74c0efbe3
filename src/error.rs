//! Error handling for the mason application.
//! Defines custom error types and results used throughout the application.

use std::io;
use thiserror::Error;

/// Custom error types for mason operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Represents validation failures in user input, currently only
    /// the derived project name
    #[error("Validation error: {0}")]
    Validation(String),

    /// Represents a mismatch between the shipped template set and the
    /// static destination table
    #[error("Configuration error: {0}")]
    Config(String),

    /// Represents a failed invocation of an external collaborator
    /// (git, virtualenvwrapper, pip)
    #[error("External tool failure: `{command}`: {details}")]
    Tool { command: String, details: String },
}

/// Convenience type alias for Results with mason's Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(1);
}
