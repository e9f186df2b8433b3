use std::io::{self, Write};

use crate::display::{format_amount, single_line, truncate};
use crate::ledger::{Ledger, PeriodTotals, Summary};
use crate::parse::DATE_FORMAT;

const DESCRIPTION_WIDTH: usize = 40;

pub(crate) fn write_table<W: Write>(out: &mut W, ledger: &Ledger) -> io::Result<()> {
    if ledger.is_empty() {
        return writeln!(out, "No transactions recorded.");
    }
    writeln!(
        out,
        "{:<5} {:<10} {:>14} {:<14} Description",
        "ID", "Date", "Amount", "Category"
    )?;
    writeln!(out, "{}", "─".repeat(70))?;
    for txn in ledger.transactions() {
        writeln!(
            out,
            "{:<5} {:<10} {:>14} {:<14} {}",
            txn.id(),
            txn.date().format(DATE_FORMAT).to_string(),
            format_amount(txn.amount()),
            txn.category(),
            truncate(&single_line(txn.description()), DESCRIPTION_WIDTH),
        )?;
    }
    Ok(())
}

pub(crate) fn write_summary<W: Write>(out: &mut W, summary: &Summary) -> io::Result<()> {
    writeln!(out, "  Total income:   {}", format_amount(summary.income))?;
    writeln!(out, "  Total expenses: {}", format_amount(summary.expense))?;
    writeln!(out, "  Balance:        {}", format_amount(summary.balance))?;
    writeln!(out)?;
    writeln!(out, "Expenses by category:")?;
    if summary.expenses_by_category.is_empty() {
        writeln!(out, "  (none)")?;
    }
    for (category, total) in &summary.expenses_by_category {
        writeln!(out, "  {category:<16} {}", format_amount(*total))?;
    }
    Ok(())
}

pub(crate) fn write_period<W: Write>(out: &mut W, label: &str, totals: &PeriodTotals) -> io::Result<()> {
    writeln!(out, "{label}")?;
    writeln!(out, "  Income:   {}", format_amount(totals.income))?;
    writeln!(out, "  Expenses: {}", format_amount(totals.expenses))?;
    writeln!(out, "  Net:      {}", format_amount(totals.net()))
}
