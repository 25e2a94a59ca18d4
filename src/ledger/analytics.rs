//! Derived views over the ledger
//!
//! Every query here is a pure function recomputed from the full entry slice
//! on each call. There is no caching, so there is nothing to invalidate;
//! cost is linear in ledger size per call, which is fine at the scale of a
//! personal ledger.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use crate::models::{Money, Transaction, TransactionCategory, TransactionKind};

/// Sum of amounts over entries of one kind. Empty sum is zero.
pub fn total(entries: &[Transaction], kind: TransactionKind) -> Money {
    entries
        .iter()
        .filter(|t| t.kind == kind)
        .map(|t| t.amount)
        .sum()
}

/// Income total minus expense total. May be negative.
pub fn balance(entries: &[Transaction]) -> Money {
    total(entries, TransactionKind::Income) - total(entries, TransactionKind::Expense)
}

/// Per-category sum for one kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTotal {
    pub category: TransactionCategory,
    pub amount: Money,
}

/// Group entries of one kind by category and sum per category.
///
/// Each category appears at most once; categories with no matching entries
/// are omitted. Group order is unspecified.
pub fn category_totals(entries: &[Transaction], kind: TransactionKind) -> Vec<CategoryTotal> {
    let mut totals: HashMap<TransactionCategory, Money> = HashMap::new();
    for t in entries.iter().filter(|t| t.kind == kind) {
        *totals.entry(t.category).or_insert_with(Money::zero) += t.amount;
    }
    totals
        .into_iter()
        .map(|(category, amount)| CategoryTotal { category, amount })
        .collect()
}

/// A calendar month bucket key
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    pub year: i32,
    pub month: u32,
}

impl MonthKey {
    pub fn of(transaction: &Transaction) -> Self {
        use chrono::Datelike;
        Self {
            year: transaction.date.year(),
            month: transaction.date.month(),
        }
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Income and expense sums for one calendar month
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlyTotals {
    pub month: MonthKey,
    pub income: Money,
    pub expense: Money,
}

/// Group entries by calendar month, summing income and expense separately.
///
/// Buckets exist only for months with at least one transaction and are
/// returned in chronological order.
pub fn monthly_series(entries: &[Transaction]) -> Vec<MonthlyTotals> {
    let mut buckets: BTreeMap<MonthKey, (Money, Money)> = BTreeMap::new();
    for t in entries {
        let bucket = buckets
            .entry(MonthKey::of(t))
            .or_insert((Money::zero(), Money::zero()));
        match t.kind {
            TransactionKind::Income => bucket.0 += t.amount,
            TransactionKind::Expense => bucket.1 += t.amount,
        }
    }
    buckets
        .into_iter()
        .map(|(month, (income, expense))| MonthlyTotals {
            month,
            income,
            expense,
        })
        .collect()
}
