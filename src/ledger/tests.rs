#![allow(clippy::unwrap_used)]

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn txn(amount: Decimal, on: NaiveDate, category: Category) -> Transaction {
    Transaction::new(amount, on, category, "")
}

/// The three-transaction ledger used throughout the summary tests.
fn sample_ledger() -> Ledger {
    let mut ledger = Ledger::new();
    ledger.add_transaction(txn(dec!(1000), date(2024, 1, 5), Category::Salary));
    ledger.add_transaction(txn(dec!(-200), date(2024, 1, 20), Category::Groceries));
    ledger.add_transaction(txn(dec!(-50), date(2024, 2, 1), Category::Utilities));
    ledger
}

// ── Ids ───────────────────────────────────────────────────────

#[test]
fn test_ids_are_sequential_from_one() {
    let mut ledger = Ledger::new();
    let ids: Vec<u32> = (0..4)
        .map(|_| ledger.add_transaction(txn(dec!(1), date(2024, 1, 1), Category::Other)))
        .collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);
    assert_eq!(ledger.next_id(), 5);
    for id in ids {
        assert_eq!(ledger.get(id).unwrap().id(), id);
    }
}

#[test]
fn test_ids_not_reused_after_remove() {
    let mut ledger = sample_ledger();
    assert!(ledger.remove_transaction(3));
    let id = ledger.add_transaction(txn(dec!(5), date(2024, 3, 1), Category::Gift));
    assert_eq!(id, 4);
    assert!(ledger.get(3).is_none());
}

#[test]
fn test_ledgers_have_independent_counters() {
    let mut a = Ledger::new();
    let mut b = Ledger::new();
    a.add_transaction(txn(dec!(1), date(2024, 1, 1), Category::Other));
    a.add_transaction(txn(dec!(1), date(2024, 1, 1), Category::Other));
    let id = b.add_transaction(txn(dec!(1), date(2024, 1, 1), Category::Other));
    assert_eq!(id, 1);
}

#[test]
fn test_listing_follows_insertion_order() {
    let ledger = sample_ledger();
    let amounts: Vec<Decimal> = ledger.list_transactions().iter().map(|t| t.amount()).collect();
    assert_eq!(amounts, vec![dec!(1000), dec!(-200), dec!(-50)]);
}

// ── Remove ────────────────────────────────────────────────────

#[test]
fn test_remove_existing() {
    let mut ledger = sample_ledger();
    assert!(ledger.remove_transaction(2));
    assert_eq!(ledger.len(), 2);
    assert!(ledger.get(2).is_none());
}

#[test]
fn test_remove_missing_changes_nothing() {
    let mut ledger = sample_ledger();
    let before: Vec<Transaction> = ledger.transactions().cloned().collect();
    let next_before = ledger.next_id();

    assert!(!ledger.remove_transaction(99));

    let after: Vec<Transaction> = ledger.transactions().cloned().collect();
    assert_eq!(before, after);
    assert_eq!(ledger.next_id(), next_before);
}

#[test]
fn test_remove_twice() {
    let mut ledger = sample_ledger();
    assert!(ledger.remove_transaction(1));
    assert!(!ledger.remove_transaction(1));
}

// ── Edit ──────────────────────────────────────────────────────

#[test]
fn test_single_field_editors() {
    let mut ledger = sample_ledger();
    assert!(ledger.edit_amount(2, dec!(-210.55)));
    assert!(ledger.edit_date(2, date(2024, 1, 21)));
    assert!(ledger.edit_category(2, Category::Dining));
    assert!(ledger.edit_description(2, "Dinner"));

    let t = ledger.get(2).unwrap();
    assert_eq!(t.amount(), dec!(-210.55));
    assert_eq!(t.date(), date(2024, 1, 21));
    assert_eq!(t.category(), Category::Dining);
    assert_eq!(t.description(), "Dinner");
    assert_eq!(t.id(), 2);
}

#[test]
fn test_combined_edit_only_supplied_fields() {
    let mut ledger = sample_ledger();
    let edit = TransactionEdit {
        amount: Some(dec!(1200)),
        description: Some("Raise".into()),
        ..TransactionEdit::default()
    };
    assert!(ledger.edit_transaction(1, edit));

    let t = ledger.get(1).unwrap();
    assert_eq!(t.amount(), dec!(1200));
    assert_eq!(t.description(), "Raise");
    assert_eq!(t.date(), date(2024, 1, 5));
    assert_eq!(t.category(), Category::Salary);
}

#[test]
fn test_empty_edit_leaves_transaction_unchanged() {
    let mut ledger = sample_ledger();
    let before = ledger.get(3).cloned().unwrap();
    assert!(ledger.edit_transaction(3, TransactionEdit::default()));
    assert_eq!(ledger.get(3).unwrap(), &before);
}

#[test]
fn test_edit_missing_is_noop() {
    let mut ledger = sample_ledger();
    let before: Vec<Transaction> = ledger.transactions().cloned().collect();
    assert!(!ledger.edit_amount(42, dec!(1)));
    assert!(!ledger.edit_description(42, "nope"));
    let after: Vec<Transaction> = ledger.transactions().cloned().collect();
    assert_eq!(before, after);
}

// ── Totals ────────────────────────────────────────────────────

#[test]
fn test_empty_ledger_totals_are_zero() {
    let ledger = Ledger::new();
    assert_eq!(ledger.total_income(), Decimal::ZERO);
    assert_eq!(ledger.total_expense(), Decimal::ZERO);
    assert_eq!(ledger.current_balance(), Decimal::ZERO);
    assert!(ledger.expenses_by_category().is_empty());
    assert_eq!(ledger.income_for_month(date(2024, 1, 1)), Decimal::ZERO);
    assert_eq!(ledger.total_expenses_for_year(2024), Decimal::ZERO);
}

#[test]
fn test_sample_ledger_summary() {
    let ledger = sample_ledger();
    assert_eq!(ledger.total_income(), dec!(1000));
    assert_eq!(ledger.total_expense(), dec!(-250));
    assert_eq!(ledger.current_balance(), dec!(750));
    assert_eq!(ledger.income_for_month(date(2024, 1, 15)), dec!(1000));
    assert_eq!(ledger.expenses_for_month(date(2024, 1, 15)), dec!(-200));

    let by_cat = ledger.expenses_by_category();
    assert_eq!(by_cat.len(), 2);
    assert_eq!(by_cat[&Category::Groceries], dec!(-200));
    assert_eq!(by_cat[&Category::Utilities], dec!(-50));
    assert!(!by_cat.contains_key(&Category::Salary));
}

#[test]
fn test_summary_matches_individual_queries() {
    let ledger = sample_ledger();
    let summary = ledger.summary();
    assert_eq!(summary.income, ledger.total_income());
    assert_eq!(summary.expense, ledger.total_expense());
    assert_eq!(summary.balance, ledger.current_balance());
    assert_eq!(summary.expenses_by_category, ledger.expenses_by_category());
}

#[test]
fn test_zero_amount_counts_nowhere() {
    let mut ledger = sample_ledger();
    ledger.add_transaction(txn(Decimal::ZERO, date(2024, 1, 10), Category::Shopping));
    assert_eq!(ledger.total_income(), dec!(1000));
    assert_eq!(ledger.total_expense(), dec!(-250));
    assert_eq!(ledger.current_balance(), dec!(750));
    assert!(!ledger.expenses_by_category().contains_key(&Category::Shopping));
    assert_eq!(ledger.month_totals(date(2024, 1, 1)).income, dec!(1000));
}

#[test]
fn test_balance_identity_holds_through_mutations() {
    let mut ledger = sample_ledger();
    let check = |l: &Ledger| assert_eq!(l.current_balance(), l.total_income() + l.total_expense());

    check(&ledger);
    ledger.add_transaction(txn(dec!(-19.99), date(2024, 5, 5), Category::Entertainment));
    check(&ledger);
    ledger.edit_amount(1, dec!(-1));
    check(&ledger);
    ledger.remove_transaction(2);
    check(&ledger);

    let sum: Decimal = ledger.transactions().map(|t| t.amount()).sum();
    assert_eq!(ledger.current_balance(), sum);
}

#[test]
fn test_expenses_grouped_per_category() {
    let mut ledger = Ledger::new();
    ledger.add_transaction(txn(dec!(-10), date(2024, 1, 1), Category::Dining));
    ledger.add_transaction(txn(dec!(-15.50), date(2024, 6, 1), Category::Dining));
    ledger.add_transaction(txn(dec!(30), date(2024, 6, 1), Category::Dining));
    let by_cat = ledger.expenses_by_category();
    assert_eq!(by_cat.len(), 1);
    assert_eq!(by_cat[&Category::Dining], dec!(-25.50));
}

// ── Period filters ────────────────────────────────────────────

#[test]
fn test_month_bounds_are_inclusive() {
    let mut ledger = Ledger::new();
    ledger.add_transaction(txn(dec!(1), date(2024, 2, 1), Category::Gift));
    ledger.add_transaction(txn(dec!(2), date(2024, 2, 29), Category::Gift));
    ledger.add_transaction(txn(dec!(4), date(2024, 1, 31), Category::Gift));
    ledger.add_transaction(txn(dec!(8), date(2024, 3, 1), Category::Gift));
    assert_eq!(ledger.income_for_month(date(2024, 2, 14)), dec!(3));
}

#[test]
fn test_month_of_december() {
    let mut ledger = Ledger::new();
    ledger.add_transaction(txn(dec!(-3), date(2023, 12, 31), Category::Rent));
    ledger.add_transaction(txn(dec!(-5), date(2024, 1, 1), Category::Rent));
    assert_eq!(ledger.expenses_for_month(date(2023, 12, 1)), dec!(-3));
}

#[test]
fn test_year_bounds_are_inclusive() {
    let mut ledger = Ledger::new();
    ledger.add_transaction(txn(dec!(100), date(2024, 1, 1), Category::Salary));
    ledger.add_transaction(txn(dec!(200), date(2024, 12, 31), Category::Salary));
    ledger.add_transaction(txn(dec!(400), date(2023, 12, 31), Category::Salary));
    ledger.add_transaction(txn(dec!(-60), date(2024, 12, 31), Category::Rent));
    ledger.add_transaction(txn(dec!(-70), date(2025, 1, 1), Category::Rent));
    assert_eq!(ledger.total_income_for_year(2024), dec!(300));
    assert_eq!(ledger.total_expenses_for_year(2024), dec!(-60));

    let totals = ledger.year_totals(2024);
    assert_eq!(totals.income, dec!(300));
    assert_eq!(totals.expenses, dec!(-60));
    assert_eq!(totals.net(), dec!(240));
}

#[test]
fn test_unrepresentable_year_is_zero() {
    let ledger = sample_ledger();
    assert_eq!(ledger.total_income_for_year(i32::MAX), Decimal::ZERO);
    assert_eq!(ledger.total_expenses_for_year(i32::MIN), Decimal::ZERO);
}

#[test]
fn test_period_month_of() {
    let p = Period::month_of(date(2023, 2, 17));
    assert_eq!(p.start, date(2023, 2, 1));
    assert_eq!(p.end, date(2023, 2, 28));
    assert!(p.contains(date(2023, 2, 1)));
    assert!(p.contains(date(2023, 2, 28)));
    assert!(!p.contains(date(2023, 3, 1)));
    assert_eq!(p.to_string(), "2023-02-01 to 2023-02-28");
}

#[test]
fn test_period_year() {
    let p = Period::year(2020).unwrap();
    assert_eq!(p.start, date(2020, 1, 1));
    assert_eq!(p.end, date(2020, 12, 31));
}

// ── Import ────────────────────────────────────────────────────

#[test]
fn test_import_appends_and_reassigns_ids() {
    let mut ledger = sample_ledger();
    let incoming = vec![
        txn(dec!(5), date(2024, 4, 1), Category::Gift),
        txn(dec!(-6), date(2024, 4, 2), Category::Dining),
    ];
    assert_eq!(ledger.import_transactions(incoming), 2);
    assert_eq!(ledger.len(), 5);
    assert_eq!(ledger.get(4).unwrap().amount(), dec!(5));
    assert_eq!(ledger.get(5).unwrap().amount(), dec!(-6));
    assert_eq!(ledger.next_id(), 6);
}

#[test]
fn test_import_nothing_does_not_lower_counter() {
    let mut ledger = sample_ledger();
    ledger.remove_transaction(3);
    ledger.remove_transaction(2);
    assert_eq!(ledger.import_transactions(Vec::new()), 0);
    assert_eq!(ledger.next_id(), 4);
}
