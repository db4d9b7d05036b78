//! CLI-level errors (wraps domain and parser errors)

use thiserror::Error;

use crate::domain::TreeError;
use crate::parser::ParseError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Parse(#[from] ParseError),

    #[error("{0}")]
    Tree(#[from] TreeError),

    #[error("{0}")]
    Usage(String),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage(_) => crate::exitcode::USAGE,
            CliError::Parse(_) => crate::exitcode::DATAERR,
            CliError::Tree(_) => crate::exitcode::SOFTWARE,
        }
    }
}
