use anyhow::Result;
use chrono::{Datelike, NaiveDate};
use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::csv_io;
use crate::error::LedgerError;
use crate::ledger::Ledger;
use crate::models::{Category, Transaction, TransactionEdit};
use crate::parse::{parse_amount, parse_category_input, parse_date};

use super::report;

/// Numbered text menu over one in-memory ledger.
///
/// Bad input aborts only the operation being entered; the ledger is never
/// left half-updated. End of input ends the session.
pub(crate) struct Menu<R, W> {
    ledger: Ledger,
    input: R,
    output: W,
    csv_path: PathBuf,
    today: NaiveDate,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub(crate) fn new(input: R, output: W, csv_path: PathBuf, today: NaiveDate) -> Self {
        Self {
            ledger: Ledger::new(),
            input,
            output,
            csv_path,
            today,
        }
    }

    pub(crate) fn run(&mut self) -> Result<()> {
        loop {
            self.show_main_menu()?;
            let Some(choice) = self.read_line()? else {
                break;
            };
            match choice.trim() {
                "1" => self.add_transaction()?,
                "2" => self.view_transactions()?,
                "3" => self.edit_transaction()?,
                "4" => self.remove_transaction()?,
                "5" => self.view_summary()?,
                "6" => self.export()?,
                "7" => self.import()?,
                "9" => {
                    writeln!(self.output, "\nGoodbye.")?;
                    break;
                }
                _ => writeln!(self.output, "\nInvalid choice. Please try again.")?,
            }
        }
        self.output.flush()?;
        Ok(())
    }

    fn show_main_menu(&mut self) -> Result<()> {
        writeln!(self.output, "\n--- Personal Finance Ledger ---\n")?;
        writeln!(self.output, "1. Add a transaction")?;
        writeln!(self.output, "2. View transactions")?;
        writeln!(self.output, "3. Edit a transaction")?;
        writeln!(self.output, "4. Remove a transaction")?;
        writeln!(self.output, "5. View financial summary")?;
        writeln!(self.output, "6. Export transactions to CSV")?;
        writeln!(self.output, "7. Import transactions from CSV")?;
        writeln!(self.output, "9. Exit")?;
        write!(self.output, "\nChoice: ")?;
        self.output.flush()?;
        Ok(())
    }

    // ── Input ─────────────────────────────────────────────────

    /// One line without its terminator, or `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        let line = buf.trim_end_matches(['\n', '\r']).to_string();
        Ok(Some(line))
    }

    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;
        self.read_line()
    }

    fn prompt_id(&mut self) -> Result<Option<u32>> {
        let Some(raw) = self.prompt("Transaction ID: ")? else {
            return Ok(None);
        };
        match raw.trim().parse::<u32>() {
            Ok(id) => Ok(Some(id)),
            Err(_) => {
                writeln!(self.output, "Invalid transaction ID. Please enter a number.")?;
                Ok(None)
            }
        }
    }

    fn show_categories(&mut self) -> Result<()> {
        let labels: Vec<&str> = Category::all().iter().map(|c| c.as_str()).collect();
        writeln!(self.output, "Categories: {}", labels.join(", "))?;
        Ok(())
    }

    // ── Operations ────────────────────────────────────────────

    fn add_transaction(&mut self) -> Result<()> {
        writeln!(self.output, "\nEnter transaction details\n")?;
        let Some(amount) = self.prompt("Amount (negative for expenses): ")? else {
            return Ok(());
        };
        let Some(date) = self.prompt("Date (YYYY-MM-DD): ")? else {
            return Ok(());
        };
        self.show_categories()?;
        let Some(category) = self.prompt("Category: ")? else {
            return Ok(());
        };
        let Some(description) = self.prompt("Description: ")? else {
            return Ok(());
        };

        match build_transaction(&amount, &date, &category, description) {
            Ok(txn) => {
                let id = self.ledger.add_transaction(txn);
                writeln!(self.output, "\nTransaction #{id} added.")?;
            }
            Err(e) => writeln!(self.output, "\n{e}. Transaction not added.")?,
        }
        Ok(())
    }

    fn view_transactions(&mut self) -> Result<()> {
        writeln!(self.output, "\nTransactions:\n")?;
        if self.ledger.is_empty() {
            writeln!(self.output, "No transactions recorded.")?;
        }
        for txn in self.ledger.list_transactions() {
            writeln!(self.output, "{txn}")?;
        }
        Ok(())
    }

    fn edit_transaction(&mut self) -> Result<()> {
        writeln!(self.output)?;
        let Some(id) = self.prompt_id()? else {
            return Ok(());
        };
        if self.ledger.get(id).is_none() {
            writeln!(self.output, "Transaction not found.")?;
            return Ok(());
        }

        writeln!(self.output, "Leave a field blank to keep its current value.")?;
        let Some(amount) = self.prompt("New amount: ")? else {
            return Ok(());
        };
        let Some(date) = self.prompt("New date (YYYY-MM-DD): ")? else {
            return Ok(());
        };
        self.show_categories()?;
        let Some(category) = self.prompt("New category: ")? else {
            return Ok(());
        };
        let Some(description) = self.prompt("New description: ")? else {
            return Ok(());
        };

        match build_edit(&amount, &date, &category, description) {
            Ok(edit) if edit.is_empty() => writeln!(self.output, "\nNo changes made.")?,
            Ok(edit) => {
                self.ledger.edit_transaction(id, edit);
                writeln!(self.output, "\nTransaction #{id} updated.")?;
            }
            Err(e) => writeln!(self.output, "\n{e}. Transaction not edited.")?,
        }
        Ok(())
    }

    fn remove_transaction(&mut self) -> Result<()> {
        writeln!(self.output)?;
        let Some(id) = self.prompt_id()? else {
            return Ok(());
        };
        if self.ledger.remove_transaction(id) {
            writeln!(self.output, "Transaction #{id} removed.")?;
        } else {
            writeln!(self.output, "Transaction not found.")?;
        }
        Ok(())
    }

    fn view_summary(&mut self) -> Result<()> {
        writeln!(self.output, "\nFinancial Summary\n")?;
        report::write_summary(&mut self.output, &self.ledger.summary())?;

        writeln!(self.output)?;
        let month_label = format!("This month ({}):", self.today.format("%Y-%m"));
        report::write_period(
            &mut self.output,
            &month_label,
            &self.ledger.month_totals(self.today),
        )?;

        let year = self.today.year();
        writeln!(self.output)?;
        report::write_period(
            &mut self.output,
            &format!("This year ({year}):"),
            &self.ledger.year_totals(year),
        )?;
        Ok(())
    }

    fn export(&mut self) -> Result<()> {
        match csv_io::export_ledger(&self.ledger, &self.csv_path) {
            Ok(count) => writeln!(
                self.output,
                "\nExported {count} transactions to {}.",
                self.csv_path.display()
            )?,
            Err(e) => writeln!(self.output, "\nExport failed: {e}")?,
        }
        Ok(())
    }

    fn import(&mut self) -> Result<()> {
        if !self.ledger.is_empty() {
            writeln!(
                self.output,
                "\nWarning: the ledger already holds {} transactions. \
                 Imported rows are added alongside them and may duplicate them.",
                self.ledger.len()
            )?;
            let confirmation = self.prompt("Continue? (yes/no): ")?.unwrap_or_default();
            if !confirmation.trim().eq_ignore_ascii_case("yes") {
                writeln!(self.output, "Import cancelled.")?;
                return Ok(());
            }
        }

        match csv_io::import_into(&mut self.ledger, &self.csv_path) {
            Ok(count) => writeln!(
                self.output,
                "\nImported {count} transactions from {}.",
                self.csv_path.display()
            )?,
            Err(e) => writeln!(self.output, "\nImport failed: {e}. No transactions were added.")?,
        }
        Ok(())
    }
}

fn build_transaction(
    amount: &str,
    date: &str,
    category: &str,
    description: String,
) -> Result<Transaction, LedgerError> {
    Ok(Transaction::new(
        parse_amount(amount)?,
        parse_date(date)?,
        parse_category_input(category)?,
        description,
    ))
}

/// Blank answers become `None`; anything else must parse.
fn build_edit(
    amount: &str,
    date: &str,
    category: &str,
    description: String,
) -> Result<TransactionEdit, LedgerError> {
    fn optional<T>(
        raw: &str,
        parse: impl Fn(&str) -> Result<T, LedgerError>,
    ) -> Result<Option<T>, LedgerError> {
        if raw.trim().is_empty() {
            Ok(None)
        } else {
            parse(raw).map(Some)
        }
    }

    Ok(TransactionEdit {
        amount: optional(amount, parse_amount)?,
        date: optional(date, parse_date)?,
        category: optional(category, parse_category_input)?,
        description: (!description.is_empty()).then_some(description),
    })
}

#[cfg(test)]
#[path = "menu_tests.rs"]
mod tests;
