use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};

use super::Category;

/// A single recorded financial event.
///
/// The id stays `0` until the transaction is handed to a
/// [`Ledger`](crate::ledger::Ledger), which assigns it exactly once.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Transaction {
    id: u32,
    amount: Decimal,
    date: NaiveDate,
    category: Category,
    description: String,
}

impl Transaction {
    pub(crate) fn new(
        amount: Decimal,
        date: NaiveDate,
        category: Category,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: 0,
            amount,
            date,
            category,
            description: description.into(),
        }
    }

    pub(crate) fn id(&self) -> u32 {
        self.id
    }

    pub(crate) fn amount(&self) -> Decimal {
        self.amount
    }

    pub(crate) fn date(&self) -> NaiveDate {
        self.date
    }

    pub(crate) fn category(&self) -> Category {
        self.category
    }

    pub(crate) fn description(&self) -> &str {
        &self.description
    }

    pub(crate) fn set_amount(&mut self, amount: Decimal) {
        self.amount = amount;
    }

    pub(crate) fn set_date(&mut self, date: NaiveDate) {
        self.date = date;
    }

    pub(crate) fn set_category(&mut self, category: Category) {
        self.category = category;
    }

    pub(crate) fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Only the ledger calls this, once, when the transaction is stored.
    pub(crate) fn assign_id(&mut self, id: u32) {
        self.id = id;
    }

    pub(crate) fn is_income(&self) -> bool {
        self.amount > Decimal::ZERO
    }

    pub(crate) fn is_expense(&self) -> bool {
        self.amount < Decimal::ZERO
    }
}

impl std::fmt::Display for Transaction {
    /// Amounts are rounded half away from zero to cents.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let amount = self
            .amount
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        write!(
            f,
            "#{} | {} | {:.2} | {} | {}",
            self.id,
            self.date.format("%Y-%m-%d"),
            amount,
            self.category,
            self.description
        )
    }
}

/// A partial update: `None` fields keep the transaction's current value.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct TransactionEdit {
    pub(crate) amount: Option<Decimal>,
    pub(crate) date: Option<NaiveDate>,
    pub(crate) category: Option<Category>,
    pub(crate) description: Option<String>,
}

impl TransactionEdit {
    pub(crate) fn is_empty(&self) -> bool {
        self.amount.is_none()
            && self.date.is_none()
            && self.category.is_none()
            && self.description.is_none()
    }

    pub(crate) fn apply_to(self, txn: &mut Transaction) {
        if let Some(amount) = self.amount {
            txn.set_amount(amount);
        }
        if let Some(date) = self.date {
            txn.set_date(date);
        }
        if let Some(category) = self.category {
            txn.set_category(category);
        }
        if let Some(description) = self.description {
            txn.set_description(description);
        }
    }
}
