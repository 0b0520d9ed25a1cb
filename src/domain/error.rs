//! Domain-level errors (no CLI concerns)

use std::path::PathBuf;

use thiserror::Error;

/// Failures of the CSV-to-DOT pipeline.
///
/// All failures are deterministic for a given input and abort the whole
/// build; no partially constructed tree ever escapes.
#[derive(Error, Debug)]
pub enum WbsError {
    #[error("input not found: {0}")]
    NotFound(PathBuf),

    #[error("malformed input: {reason}{}", fmt_line(.line))]
    MalformedInput { reason: String, line: Option<usize> },

    #[error("invalid code: {0}")]
    InvalidCode(String),

    #[error("duplicate code: {0}")]
    DuplicateCode(String),

    #[error("missing parent: {0}")]
    MissingParent(String),

    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
}

fn fmt_line(line: &Option<usize>) -> String {
    match line {
        Some(n) => format!(" at line {}", n),
        None => String::new(),
    }
}

impl WbsError {
    /// Build a `MalformedInput` without a line number.
    pub fn malformed(reason: impl Into<String>) -> Self {
        WbsError::MalformedInput {
            reason: reason.into(),
            line: None,
        }
    }

    /// Build a `MalformedInput` pointing at a 1-based input line.
    pub fn malformed_at(reason: impl Into<String>, line: usize) -> Self {
        WbsError::MalformedInput {
            reason: reason.into(),
            line: Some(line),
        }
    }
}

/// Result type for pipeline operations.
pub type WbsResult<T> = Result<T, WbsError>;
