use std::path::PathBuf;

use thiserror::Error;

/// Failures surfaced to callers of the ledger file and input parsers.
///
/// Ledger queries and edits never produce these; a missing id or an empty
/// ledger is reported through neutral return values instead.
#[derive(Debug, Error)]
pub(crate) enum LedgerError {
    #[error("Invalid category: '{0}'")]
    InvalidCategory(String),

    #[error("Invalid date: '{0}' (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Invalid amount: '{0}'")]
    InvalidAmount(String),

    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Malformed record on line {line}: {reason}")]
    MalformedRecord { line: u64, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub(crate) type Result<T> = std::result::Result<T, LedgerError>;
