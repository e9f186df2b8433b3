use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::io::{self, Write};

use crate::config::{Config, FILE_ENV_VAR};
use crate::csv_io;
use crate::ledger::{Ledger, Period};
use crate::models::Transaction;
use crate::parse::{parse_amount, parse_category_input, parse_date};

use super::report;

pub(crate) fn as_cli(args: &[String], config: &Config) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    dispatch(args, config, &mut out)
}

fn dispatch<W: Write>(args: &[String], config: &Config, out: &mut W) -> Result<()> {
    let command = args.get(1).map(String::as_str).unwrap_or("help");
    let rest = args.get(2..).unwrap_or_default();
    match command {
        "list" | "ls" => cli_list(config, out),
        "summary" | "s" => cli_summary(rest, config, out),
        "add" => cli_add(rest, config, out),
        "edit" => cli_edit(rest, config, out),
        "remove" | "rm" => cli_remove(rest, config, out),
        "--help" | "-h" | "help" => Ok(print_usage(out)?),
        "--version" | "-V" | "version" => {
            writeln!(out, "finledger {}", env!("CARGO_PKG_VERSION"))?;
            Ok(())
        }
        other => {
            print_usage(out)?;
            anyhow::bail!("Unknown command: {other}");
        }
    }
}

fn print_usage<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "finledger - personal finance ledger")?;
    writeln!(out)?;
    writeln!(out, "Usage: finledger [--file <path>] [command]")?;
    writeln!(out)?;
    writeln!(out, "Commands:")?;
    writeln!(out, "  (none)                        Launch the interactive menu")?;
    writeln!(out, "  list                          Print every transaction in the ledger file")?;
    writeln!(out, "  summary [YYYY-MM | YYYY]      Print totals, optionally for one month or year")?;
    writeln!(out, "  add <amount> <date> <category> [description]")?;
    writeln!(out, "                                Record a transaction in the ledger file")?;
    writeln!(out, "  edit <id> [--amount <n>] [--date <YYYY-MM-DD>]")?;
    writeln!(out, "            [--category <name>] [--description <text>]")?;
    writeln!(out, "                                Change fields of one transaction")?;
    writeln!(out, "  remove <id>                   Delete one transaction")?;
    writeln!(out, "  --help, -h                    Show this help")?;
    writeln!(out, "  --version, -V                 Show version")?;
    writeln!(out)?;
    writeln!(out, "The ledger file defaults to the platform data directory;")?;
    writeln!(out, "override it with --file or the {FILE_ENV_VAR} environment variable.")
}

fn load_ledger(config: &Config) -> Result<Ledger> {
    let mut ledger = Ledger::new();
    csv_io::import_into(&mut ledger, &config.csv_path)
        .with_context(|| format!("Failed to load ledger file {}", config.csv_path.display()))?;
    Ok(ledger)
}

/// Like [`load_ledger`], but a missing file is an empty ledger.
fn load_or_create(config: &Config) -> Result<Ledger> {
    if config.csv_path.exists() {
        load_ledger(config)
    } else {
        Ok(Ledger::new())
    }
}

/// Rows are renumbered from 1 before writing, matching the ids the next
/// [`load_ledger`] hands out.
fn save_ledger(ledger: &Ledger, config: &Config) -> Result<()> {
    let mut renumbered = Ledger::new();
    renumbered.import_transactions(ledger.transactions().cloned().collect());
    csv_io::export_ledger(&renumbered, &config.csv_path)
        .with_context(|| format!("Failed to write ledger file {}", config.csv_path.display()))?;
    Ok(())
}

fn parse_id(arg: Option<&String>) -> Result<u32> {
    let raw = arg.ok_or_else(|| anyhow::anyhow!("Missing transaction ID"))?;
    raw.trim()
        .parse()
        .with_context(|| format!("Invalid transaction ID: {raw}"))
}

fn cli_list<W: Write>(config: &Config, out: &mut W) -> Result<()> {
    let ledger = load_ledger(config)?;
    report::write_table(out, &ledger)?;
    Ok(())
}

/// Which slice of the ledger a `summary` call covers.
#[derive(Debug, PartialEq, Eq)]
enum SummaryScope {
    All,
    Month(NaiveDate),
    Year(i32),
}

fn parse_scope(arg: Option<&str>) -> Result<SummaryScope> {
    let Some(arg) = arg.map(str::trim).filter(|a| !a.is_empty()) else {
        return Ok(SummaryScope::All);
    };
    if arg.len() == 4 && arg.chars().all(|c| c.is_ascii_digit()) {
        let year = arg.parse().with_context(|| format!("Invalid year: {arg}"))?;
        return Ok(SummaryScope::Year(year));
    }
    let first_of_month = NaiveDate::parse_from_str(&format!("{arg}-01"), "%Y-%m-%d")
        .with_context(|| format!("Invalid period '{arg}', expected YYYY-MM or YYYY"))?;
    Ok(SummaryScope::Month(first_of_month))
}

fn cli_summary<W: Write>(args: &[String], config: &Config, out: &mut W) -> Result<()> {
    let scope = parse_scope(args.first().map(String::as_str))?;
    let ledger = load_ledger(config)?;

    writeln!(out, "finledger - {} transactions", ledger.len())?;
    writeln!(out, "{}", "─".repeat(40))?;
    match scope {
        SummaryScope::All => report::write_summary(out, &ledger.summary())?,
        SummaryScope::Month(date) => {
            let label = format!("{} ({})", date.format("%Y-%m"), Period::month_of(date));
            report::write_period(out, &label, &ledger.month_totals(date))?;
        }
        SummaryScope::Year(year) => {
            report::write_period(out, &year.to_string(), &ledger.year_totals(year))?;
        }
    }
    Ok(())
}

fn cli_add<W: Write>(args: &[String], config: &Config, out: &mut W) -> Result<()> {
    let [amount, date, category, rest @ ..] = args else {
        anyhow::bail!("Usage: finledger add <amount> <date> <category> [description]");
    };
    let txn = Transaction::new(
        parse_amount(amount)?,
        parse_date(date)?,
        parse_category_input(category)?,
        rest.join(" "),
    );

    let mut ledger = load_or_create(config)?;
    let id = ledger.add_transaction(txn);
    save_ledger(&ledger, config)?;
    writeln!(out, "Added transaction #{id}")?;
    Ok(())
}

/// Fields are applied one flag at a time; the file is only rewritten once
/// every flag has parsed, so a bad value leaves it untouched.
fn cli_edit<W: Write>(args: &[String], config: &Config, out: &mut W) -> Result<()> {
    let id = parse_id(args.first())?;
    let mut ledger = load_ledger(config)?;
    if ledger.get(id).is_none() {
        anyhow::bail!("Transaction #{id} not found");
    }

    let mut changed = 0;
    let mut flags = args.iter().skip(1);
    while let Some(flag) = flags.next() {
        let value = flags
            .next()
            .ok_or_else(|| anyhow::anyhow!("{flag} requires a value"))?;
        match flag.as_str() {
            "--amount" => ledger.edit_amount(id, parse_amount(value)?),
            "--date" => ledger.edit_date(id, parse_date(value)?),
            "--category" => ledger.edit_category(id, parse_category_input(value)?),
            "--description" => ledger.edit_description(id, value.as_str()),
            other => anyhow::bail!("Unknown option for edit: {other}"),
        };
        changed += 1;
    }

    if changed == 0 {
        writeln!(out, "Nothing to change for transaction #{id}")?;
        return Ok(());
    }
    save_ledger(&ledger, config)?;
    writeln!(out, "Updated transaction #{id}")?;
    Ok(())
}

fn cli_remove<W: Write>(args: &[String], config: &Config, out: &mut W) -> Result<()> {
    let id = parse_id(args.first())?;
    let mut ledger = load_ledger(config)?;
    if !ledger.remove_transaction(id) {
        anyhow::bail!("Transaction #{id} not found");
    }
    save_ledger(&ledger, config)?;
    writeln!(out, "Removed transaction #{id}")?;
    Ok(())
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
