mod period;
mod summary;

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::{Category, Transaction, TransactionEdit};

pub(crate) use period::Period;
pub(crate) use summary::{PeriodTotals, Summary};

/// Which side of the ledger a period query sums.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Income,
    Expense,
}

impl Flow {
    fn matches(self, txn: &Transaction) -> bool {
        match self {
            Self::Income => txn.is_income(),
            Self::Expense => txn.is_expense(),
        }
    }
}

/// In-memory transaction store and aggregation engine.
///
/// Ids are handed out in increasing order from a per-ledger counter, so the
/// map's key order is also insertion order. Listing and export rely on that.
#[derive(Debug, Clone)]
pub(crate) struct Ledger {
    transactions: BTreeMap<u32, Transaction>,
    next_id: u32,
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

impl Ledger {
    pub(crate) fn new() -> Self {
        Self {
            transactions: BTreeMap::new(),
            next_id: 1,
        }
    }

    #[cfg(test)]
    pub(crate) fn next_id(&self) -> u32 {
        self.next_id
    }

    pub(crate) fn len(&self) -> usize {
        self.transactions.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub(crate) fn get(&self, id: u32) -> Option<&Transaction> {
        self.transactions.get(&id)
    }

    /// Read-only view of every stored transaction, in id order.
    pub(crate) fn transactions(&self) -> impl Iterator<Item = &Transaction> + '_ {
        self.transactions.values()
    }

    /// Snapshot of the ledger for display.
    pub(crate) fn list_transactions(&self) -> Vec<&Transaction> {
        self.transactions().collect()
    }

    // ── Mutation ──────────────────────────────────────────────

    /// Store `txn` under the next free id and return that id.
    pub(crate) fn add_transaction(&mut self, mut txn: Transaction) -> u32 {
        let id = self.next_id;
        txn.assign_id(id);
        self.transactions.insert(id, txn);
        self.next_id += 1;
        tracing::debug!(id, "added transaction");
        id
    }

    pub(crate) fn remove_transaction(&mut self, id: u32) -> bool {
        let removed = self.transactions.remove(&id).is_some();
        tracing::debug!(id, removed, "remove transaction");
        removed
    }

    /// Apply `edit` to the transaction with `id`. Returns `false`, changing
    /// nothing, when no such transaction exists.
    pub(crate) fn edit_transaction(&mut self, id: u32, edit: TransactionEdit) -> bool {
        match self.transactions.get_mut(&id) {
            Some(txn) => {
                edit.apply_to(txn);
                tracing::debug!(id, "edited transaction");
                true
            }
            None => false,
        }
    }

    pub(crate) fn edit_amount(&mut self, id: u32, amount: Decimal) -> bool {
        self.edit_transaction(
            id,
            TransactionEdit {
                amount: Some(amount),
                ..TransactionEdit::default()
            },
        )
    }

    pub(crate) fn edit_date(&mut self, id: u32, date: NaiveDate) -> bool {
        self.edit_transaction(
            id,
            TransactionEdit {
                date: Some(date),
                ..TransactionEdit::default()
            },
        )
    }

    pub(crate) fn edit_category(&mut self, id: u32, category: Category) -> bool {
        self.edit_transaction(
            id,
            TransactionEdit {
                category: Some(category),
                ..TransactionEdit::default()
            },
        )
    }

    pub(crate) fn edit_description(&mut self, id: u32, description: impl Into<String>) -> bool {
        self.edit_transaction(
            id,
            TransactionEdit {
                description: Some(description.into()),
                ..TransactionEdit::default()
            },
        )
    }

    /// Add every transaction in order, then move the counter past the
    /// highest id present. The counter never moves backwards, so ids of
    /// removed transactions are not handed out again.
    pub(crate) fn import_transactions(&mut self, txns: Vec<Transaction>) -> usize {
        let count = txns.len();
        for txn in txns {
            self.add_transaction(txn);
        }
        if let Some(&max_id) = self.transactions.keys().next_back() {
            self.next_id = self.next_id.max(max_id + 1);
        }
        count
    }

    // ── Aggregates ────────────────────────────────────────────

    pub(crate) fn total_income(&self) -> Decimal {
        self.sum_where(|t| t.is_income())
    }

    /// Sum of the negative amounts, so never above zero.
    pub(crate) fn total_expense(&self) -> Decimal {
        self.sum_where(|t| t.is_expense())
    }

    pub(crate) fn current_balance(&self) -> Decimal {
        self.total_income() + self.total_expense()
    }

    /// Expense totals per category. Categories without expenses are absent.
    pub(crate) fn expenses_by_category(&self) -> BTreeMap<Category, Decimal> {
        let mut totals = BTreeMap::new();
        for txn in self.transactions().filter(|t| t.is_expense()) {
            *totals.entry(txn.category()).or_insert(Decimal::ZERO) += txn.amount();
        }
        totals
    }

    pub(crate) fn income_for_month(&self, date: NaiveDate) -> Decimal {
        self.period_total(Period::month_of(date), Flow::Income)
    }

    pub(crate) fn expenses_for_month(&self, date: NaiveDate) -> Decimal {
        self.period_total(Period::month_of(date), Flow::Expense)
    }

    pub(crate) fn total_income_for_year(&self, year: i32) -> Decimal {
        Period::year(year)
            .map(|p| self.period_total(p, Flow::Income))
            .unwrap_or(Decimal::ZERO)
    }

    pub(crate) fn total_expenses_for_year(&self, year: i32) -> Decimal {
        Period::year(year)
            .map(|p| self.period_total(p, Flow::Expense))
            .unwrap_or(Decimal::ZERO)
    }

    pub(crate) fn summary(&self) -> Summary {
        Summary {
            income: self.total_income(),
            expense: self.total_expense(),
            balance: self.current_balance(),
            expenses_by_category: self.expenses_by_category(),
        }
    }

    pub(crate) fn month_totals(&self, date: NaiveDate) -> PeriodTotals {
        PeriodTotals {
            income: self.income_for_month(date),
            expenses: self.expenses_for_month(date),
        }
    }

    pub(crate) fn year_totals(&self, year: i32) -> PeriodTotals {
        PeriodTotals {
            income: self.total_income_for_year(year),
            expenses: self.total_expenses_for_year(year),
        }
    }

    fn sum_where(&self, pred: impl Fn(&Transaction) -> bool) -> Decimal {
        self.transactions()
            .filter(|t| pred(t))
            .map(Transaction::amount)
            .sum()
    }

    /// Transactions dated inside `period` (both ends inclusive) on the
    /// requested side of the ledger. Zero amounts count on neither side.
    fn period_total(&self, period: Period, flow: Flow) -> Decimal {
        self.sum_where(|t| period.contains(t.date()) && flow.matches(t))
    }
}

#[cfg(test)]
mod tests;
