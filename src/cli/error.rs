//! CLI-level errors (wraps domain errors)

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::WbsError;
use crate::exitcode;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Wbs(#[from] WbsError),

    #[error("cannot write output {path}: {source}")]
    WriteOutput {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Wbs(e) => match e {
                WbsError::NotFound(_) => exitcode::NOINPUT,
                WbsError::Io(_) => exitcode::IOERR,
                WbsError::MalformedInput { .. }
                | WbsError::InvalidCode(_)
                | WbsError::DuplicateCode(_)
                | WbsError::MissingParent(_) => exitcode::DATAERR,
            },
            CliError::WriteOutput { .. } => exitcode::CANTCREAT,
        }
    }
}
