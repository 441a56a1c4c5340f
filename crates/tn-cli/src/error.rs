//! Error types for the CLI layer.
//!
//! The core pipeline is total and never fails; every failure surface in
//! this binary is I/O at the boundary (reading input, prompting, writing
//! the result file).

use thiserror::Error;

/// Result type for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in the interactive layer.
#[derive(Error, Debug)]
pub enum CliError {
    /// Failed to read the input text.
    #[error("failed to read input: {0}")]
    Input(#[source] std::io::Error),

    /// Terminal interaction failed (stdin closed, broken pipe).
    #[error("prompt error: {0}")]
    Prompt(#[source] std::io::Error),
}
