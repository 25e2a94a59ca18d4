//! Transaction model
//!
//! A ledger entry is immutable once created: there is no edit operation, only
//! add and remove. The serialized shape matches the inherited store layout
//! (`"type"` discriminator, decimal amount).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::TransactionId;
use super::money::Money;

/// Whether a transaction adds to or draws from the balance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

/// Closed set of category tags
///
/// Tags are persisted in snake_case; `Display` renders the human form shown
/// on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionCategory {
    Salary,
    Freelance,
    Investment,
    Food,
    Rent,
    Utilities,
    Transport,
    Entertainment,
    Health,
    Shopping,
    Education,
    Other,
}

impl TransactionCategory {
    /// All categories, in display order
    pub const ALL: [TransactionCategory; 12] = [
        Self::Salary,
        Self::Freelance,
        Self::Investment,
        Self::Food,
        Self::Rent,
        Self::Utilities,
        Self::Transport,
        Self::Entertainment,
        Self::Health,
        Self::Shopping,
        Self::Education,
        Self::Other,
    ];
}

impl fmt::Display for TransactionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Salary => "Salary",
            Self::Freelance => "Freelance",
            Self::Investment => "Investment",
            Self::Food => "Food",
            Self::Rent => "Rent",
            Self::Utilities => "Utilities",
            Self::Transport => "Transport",
            Self::Entertainment => "Entertainment",
            Self::Health => "Health",
            Self::Shopping => "Shopping",
            Self::Education => "Education",
            Self::Other => "Other",
        };
        write!(f, "{}", name)
    }
}

/// A financial transaction held by the ledger
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier, assigned by the ledger
    pub id: TransactionId,

    /// Transaction date
    pub date: NaiveDate,

    /// Free-form description
    pub description: String,

    /// Category tag
    pub category: TransactionCategory,

    /// Income or expense
    #[serde(rename = "type")]
    pub kind: TransactionKind,

    /// Amount in currency units; non-negative by caller contract
    pub amount: Money,
}

/// A transaction as submitted by a collaborator, before the ledger assigns
/// an id
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    pub date: NaiveDate,
    pub description: String,
    pub category: TransactionCategory,
    pub kind: TransactionKind,
    pub amount: Money,
}

impl NewTransaction {
    pub fn new(
        date: NaiveDate,
        description: impl Into<String>,
        category: TransactionCategory,
        kind: TransactionKind,
        amount: Money,
    ) -> Self {
        Self {
            date,
            description: description.into(),
            category,
            kind,
            amount,
        }
    }

    /// Promote to a stored transaction with a fresh id
    pub(crate) fn into_transaction(self) -> Transaction {
        Transaction {
            id: TransactionId::new(),
            date: self.date,
            description: self.description,
            category: self.category,
            kind: self.kind,
            amount: self.amount,
        }
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.date.format("%Y-%m-%d"),
            self.description,
            self.category,
            self.amount
        )
    }
}
