use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::ledger::Ledger;
use crate::parse::DATE_FORMAT;

use super::{open_error, HEADER};

/// Overwrite `path` with the header and one record per transaction, in
/// ledger order. Returns the number of records written.
pub(crate) fn export_ledger(ledger: &Ledger, path: &Path) -> Result<usize> {
    let file = File::create(path).map_err(|e| open_error(e, path))?;
    let count = write_transactions(ledger, file)?;
    tracing::info!(count, path = %path.display(), "exported transactions");
    Ok(count)
}

/// Descriptions holding a comma, quote or newline are quoted; everything
/// else is written bare.
pub(crate) fn write_transactions<W: Write>(ledger: &Ledger, writer: W) -> Result<usize> {
    let mut wtr = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Necessary)
        .from_writer(writer);
    wtr.write_record(HEADER)?;

    let mut count = 0;
    for txn in ledger.transactions() {
        wtr.write_record([
            txn.id().to_string(),
            txn.amount().to_string(),
            txn.date().format(DATE_FORMAT).to_string(),
            txn.category().as_str().to_string(),
            txn.description().to_string(),
        ])?;
        count += 1;
    }
    wtr.flush()?;
    Ok(count)
}
