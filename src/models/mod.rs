//! Core data models for fintrack-core
//!
//! This module contains the data structures of the two subsystems: user
//! identities and credentials on one side, ledger transactions on the other.

pub mod credential;
pub mod ids;
pub mod money;
pub mod transaction;
pub mod user;

pub use credential::StoredCredential;
pub use ids::{TransactionId, UserId};
pub use money::Money;
pub use transaction::{NewTransaction, Transaction, TransactionCategory, TransactionKind};
pub use user::UserRecord;
