use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::models::Category;

/// Whole-ledger aggregates, as shown by the summary views.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Summary {
    pub(crate) income: Decimal,
    pub(crate) expense: Decimal,
    pub(crate) balance: Decimal,
    pub(crate) expenses_by_category: BTreeMap<Category, Decimal>,
}

/// Income and expenses inside one month or year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct PeriodTotals {
    pub(crate) income: Decimal,
    pub(crate) expenses: Decimal,
}

impl PeriodTotals {
    pub(crate) fn net(&self) -> Decimal {
        self.income + self.expenses
    }
}
