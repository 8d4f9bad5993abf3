//! Errors surfaced to the command line.

use crate::domain::DateError;
use crate::error::ErrorKind;
use crate::stations::StationError;
use crate::tickets::QueryError;

/// Anything that ends a run unsuccessfully.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Flags that don't form a valid request
    #[error("invalid arguments: {0}")]
    InvalidArguments(&'static str),

    #[error(transparent)]
    Date(#[from] DateError),

    #[error(transparent)]
    Station(#[from] StationError),

    #[error(transparent)]
    Query(#[from] QueryError),

    /// Reading prompts or writing results failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Coarse category, used for the exit status.
    pub fn kind(&self) -> ErrorKind {
        match self {
            CliError::InvalidArguments(_) | CliError::Date(_) | CliError::Io(_) => {
                ErrorKind::UserInput
            }
            CliError::Station(e) => e.kind(),
            CliError::Query(e) => e.kind(),
        }
    }
}
