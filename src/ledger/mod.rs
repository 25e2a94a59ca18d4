//! Transaction ledger
//!
//! Owns the ordered collection of financial entries and is the only writer
//! to the `transactions` key. Entries are immutable once added; the only
//! mutations are append and removal by id. All derived figures live in
//! [`analytics`] and are recomputed from `list()` on every query.

pub mod analytics;

pub use analytics::{balance, category_totals, monthly_series, total, CategoryTotal, MonthKey, MonthlyTotals};

use crate::error::CoreResult;
use crate::models::{NewTransaction, Transaction, TransactionId};
use crate::storage::{keys, read_record, write_record, KeyValueStore};

/// The ordered collection of transactions, persisted per mutation
pub struct TransactionLedger<'a> {
    store: &'a dyn KeyValueStore,
    entries: Vec<Transaction>,
}

impl<'a> TransactionLedger<'a> {
    /// Load the ledger from the backend.
    ///
    /// A missing key is an empty ledger. An unparseable value also starts
    /// empty rather than failing construction, mirroring the session's
    /// corrupt-state recovery; the bad value is overwritten on the next
    /// mutation.
    pub fn load(store: &'a dyn KeyValueStore) -> CoreResult<Self> {
        let entries = match read_record(store, keys::TRANSACTIONS) {
            Ok(entries) => entries.unwrap_or_default(),
            Err(e) if e.is_corrupt_state() => Vec::new(),
            Err(e) => return Err(e),
        };
        Ok(Self { store, entries })
    }

    /// Append an entry, assigning it a fresh unique id, and return the
    /// stored transaction.
    ///
    /// No semantic validation happens here: amount sign and category fit
    /// are the caller's contract.
    pub fn add(&mut self, entry: NewTransaction) -> CoreResult<Transaction> {
        let transaction = entry.into_transaction();
        self.entries.push(transaction.clone());
        self.persist()?;
        Ok(transaction)
    }

    /// Remove the entry with the given id.
    ///
    /// Idempotent: an absent id is a successful no-op and does not rewrite
    /// the backend. Returns whether an entry was actually removed.
    pub fn remove(&mut self, id: &TransactionId) -> CoreResult<bool> {
        let before = self.entries.len();
        self.entries.retain(|t| &t.id != id);
        let removed = self.entries.len() != before;
        if removed {
            self.persist()?;
        }
        Ok(removed)
    }

    /// All entries in insertion order
    pub fn list(&self) -> &[Transaction] {
        &self.entries
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn persist(&self) -> CoreResult<()> {
        write_record(self.store, keys::TRANSACTIONS, &self.entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, TransactionCategory, TransactionKind};
    use crate::storage::MemoryStore;
    use chrono::NaiveDate;

    fn entry(day: u32, cents: i64) -> NewTransaction {
        NewTransaction::new(
            NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
            "Groceries",
            TransactionCategory::Food,
            TransactionKind::Expense,
            Money::from_cents(cents),
        )
    }

    #[test]
    fn test_load_empty_store() {
        let store = MemoryStore::new();
        let ledger = TransactionLedger::load(&store).unwrap();
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_add_assigns_ids_and_preserves_order() {
        let store = MemoryStore::new();
        let mut ledger = TransactionLedger::load(&store).unwrap();

        let a = ledger.add(entry(1, 100)).unwrap();
        let b = ledger.add(entry(2, 200)).unwrap();

        assert_ne!(a.id, b.id);
        let listed: Vec<_> = ledger.list().iter().map(|t| t.id.clone()).collect();
        assert_eq!(listed, vec![a.id, b.id]);
    }

    #[test]
    fn test_entries_survive_reload() {
        let store = MemoryStore::new();
        let added = {
            let mut ledger = TransactionLedger::load(&store).unwrap();
            ledger.add(entry(1, 100)).unwrap()
        };

        let ledger = TransactionLedger::load(&store).unwrap();
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.list()[0], added);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let store = MemoryStore::new();
        let mut ledger = TransactionLedger::load(&store).unwrap();
        let added = ledger.add(entry(1, 100)).unwrap();

        assert!(ledger.remove(&added.id).unwrap());
        assert!(!ledger.remove(&added.id).unwrap());
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let store = MemoryStore::new();
        let mut ledger = TransactionLedger::load(&store).unwrap();
        ledger.add(entry(1, 100)).unwrap();

        assert!(!ledger.remove(&TransactionId::from_raw("txn-missing")).unwrap());
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_corrupt_store_starts_empty() {
        let store = MemoryStore::new();
        store.set(keys::TRANSACTIONS, "[{broken").unwrap();

        let ledger = TransactionLedger::load(&store).unwrap();
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_remove_persists() {
        let store = MemoryStore::new();
        let mut ledger = TransactionLedger::load(&store).unwrap();
        let added = ledger.add(entry(1, 100)).unwrap();
        ledger.remove(&added.id).unwrap();

        let reloaded = TransactionLedger::load(&store).unwrap();
        assert!(reloaded.is_empty());
    }
}
