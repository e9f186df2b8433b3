//! Parsing of user-supplied text into ledger values.

use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::error::{LedgerError, Result};
use crate::models::Category;

pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse an ISO 8601 calendar date (`YYYY-MM-DD`).
pub(crate) fn parse_date(s: &str) -> Result<NaiveDate> {
    let trimmed = s.trim();
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .map_err(|_| LedgerError::InvalidDate(trimmed.to_string()))
}

/// Parse a signed amount. Plain decimals are preferred; scientific notation
/// (`1.0E7`) is accepted for files written by older tools.
pub(crate) fn parse_amount(s: &str) -> Result<Decimal> {
    let trimmed = s.trim();
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| LedgerError::InvalidAmount(trimmed.to_string()))
}

/// Parse a category label exactly as stored.
pub(crate) fn parse_category(s: &str) -> Result<Category> {
    Category::from_str(s.trim())
}

/// Parse a category typed at a prompt, where case does not matter.
pub(crate) fn parse_category_input(s: &str) -> Result<Category> {
    parse_category(&s.trim().to_uppercase())
}

#[cfg(test)]
#[path = "parse_tests.rs"]
mod tests;
