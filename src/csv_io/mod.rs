//! The ledger's delimited file: `ID,Amount,Date,Category,Description`.

mod export;
mod import;

use std::path::Path;

use crate::error::LedgerError;

pub(crate) use export::export_ledger;
pub(crate) use import::import_into;

pub(crate) const HEADER: [&str; 5] = ["ID", "Amount", "Date", "Category", "Description"];

/// Map a missing file (or missing parent directory) to `FileNotFound`.
fn open_error(err: std::io::Error, path: &Path) -> LedgerError {
    if err.kind() == std::io::ErrorKind::NotFound {
        LedgerError::FileNotFound(path.to_path_buf())
    } else {
        LedgerError::Io(err)
    }
}
