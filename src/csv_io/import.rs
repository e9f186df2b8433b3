use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{LedgerError, Result};
use crate::ledger::Ledger;
use crate::models::Transaction;
use crate::parse::{parse_amount, parse_category, parse_date};

use super::{open_error, HEADER};

/// Read every record of `path` and add them to `ledger`.
///
/// The whole file is parsed before anything is added: a malformed record
/// leaves the ledger untouched. Ids in the file are ignored and reassigned.
pub(crate) fn import_into(ledger: &mut Ledger, path: &Path) -> Result<usize> {
    let file = File::open(path).map_err(|e| open_error(e, path))?;
    let staged = read_transactions(file)?;
    let count = ledger.import_transactions(staged);
    tracing::info!(count, path = %path.display(), "imported transactions");
    Ok(count)
}

/// Parse the file body after its header line.
///
/// Records are read as raw bytes so that a field with invalid UTF-8 is
/// reported against its own line like any other malformed record.
pub(crate) fn read_transactions<R: Read>(reader: R) -> Result<Vec<Transaction>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut transactions = Vec::new();
    for result in rdr.byte_records() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        let txn = parse_record(record).map_err(|reason| {
            tracing::warn!(line, %reason, "rejected record");
            LedgerError::MalformedRecord { line, reason }
        })?;
        transactions.push(txn);
    }
    Ok(transactions)
}

fn parse_record(record: csv::ByteRecord) -> std::result::Result<Transaction, String> {
    if record.len() != HEADER.len() {
        return Err(format!(
            "expected {} fields, found {}",
            HEADER.len(),
            record.len()
        ));
    }
    let record = csv::StringRecord::from_byte_record(record).map_err(|e| {
        let column = HEADER.get(e.utf8_error().field()).copied().unwrap_or("?");
        format!("invalid UTF-8 in {column} field")
    })?;
    let field = |i: usize| record.get(i).unwrap_or_default();

    let amount = parse_amount(field(1)).map_err(|e| e.to_string())?;
    let date = parse_date(field(2)).map_err(|e| e.to_string())?;
    let category = parse_category(field(3)).map_err(|e| e.to_string())?;

    Ok(Transaction::new(amount, date, category, field(4)))
}
