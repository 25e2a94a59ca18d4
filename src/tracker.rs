//! Collaborator-facing facade
//!
//! The presentation layer talks to exactly one type: [`Tracker`] bundles the
//! session manager, the ledger, and the analytics queries over one injected
//! key-value backend. The facade also wires the audit trail so the domain
//! modules stay free of logging concerns.

use crate::audit::{AuditEntry, AuditEvent, AuditLogger};
use crate::auth::SessionManager;
use crate::config::Settings;
use crate::error::CoreResult;
use crate::ledger::{analytics, CategoryTotal, MonthlyTotals, TransactionLedger};
use crate::models::{Money, NewTransaction, Transaction, TransactionId, TransactionKind, UserRecord};
use crate::storage::KeyValueStore;

/// The one entry point consumed by presentation collaborators
pub struct Tracker<'a> {
    session: SessionManager<'a>,
    ledger: TransactionLedger<'a>,
    audit: Option<AuditLogger>,
}

impl<'a> Tracker<'a> {
    /// Build a tracker over an injected backend.
    ///
    /// Restores any persisted session (clearing it if corrupt) and loads the
    /// ledger. One tracker per process; the backend must not be shared with
    /// other writers.
    pub fn new(store: &'a dyn KeyValueStore, settings: &Settings) -> CoreResult<Self> {
        let mut session = SessionManager::with_demo_identity(store, settings.demo_identity);
        session.restore()?;
        let ledger = TransactionLedger::load(store)?;
        Ok(Self {
            session,
            ledger,
            audit: None,
        })
    }

    /// Attach an audit logger
    pub fn with_audit_log(mut self, logger: AuditLogger) -> Self {
        self.audit = Some(logger);
        self
    }

    // === Session operations ===

    /// Register a new identity and open a session for it
    pub fn register(&mut self, name: &str, email: &str, secret: &str) -> CoreResult<UserRecord> {
        let user = self.session.register(name, email, secret)?;
        self.audit(
            AuditEntry::now(AuditEvent::Register, user.id.as_str()).with_detail(user.email.clone()),
        )?;
        Ok(user)
    }

    /// Authenticate and open a session
    pub fn login(&mut self, email: &str, secret: &str) -> CoreResult<UserRecord> {
        let user = self.session.login(email, secret)?;
        self.audit(
            AuditEntry::now(AuditEvent::Login, user.id.as_str()).with_detail(user.email.clone()),
        )?;
        Ok(user)
    }

    /// Close the session
    pub fn logout(&mut self) -> CoreResult<()> {
        let entity_id = self
            .session
            .current_user()
            .map(|u| u.id.as_str().to_string());
        self.session.logout()?;
        if let Some(id) = entity_id {
            self.audit(AuditEntry::now(AuditEvent::Logout, id))?;
        }
        Ok(())
    }

    /// The currently authenticated user, if any
    pub fn current_user(&self) -> Option<&UserRecord> {
        self.session.current_user()
    }

    // === Ledger operations ===

    /// Add a transaction and return the stored entry
    pub fn add_transaction(&mut self, entry: NewTransaction) -> CoreResult<Transaction> {
        let transaction = self.ledger.add(entry)?;
        self.audit(
            AuditEntry::now(AuditEvent::TransactionAdded, transaction.id.as_str())
                .with_detail(transaction.description.clone()),
        )?;
        Ok(transaction)
    }

    /// Remove a transaction by id; absent ids are a successful no-op
    pub fn delete_transaction(&mut self, id: &TransactionId) -> CoreResult<()> {
        let removed = self.ledger.remove(id)?;
        if removed {
            self.audit(AuditEntry::now(AuditEvent::TransactionRemoved, id.as_str()))?;
        }
        Ok(())
    }

    /// All transactions in insertion order
    pub fn list_transactions(&self) -> &[Transaction] {
        self.ledger.list()
    }

    // === Analytics queries (recomputed per call) ===

    /// Sum of all income amounts
    pub fn total_income(&self) -> Money {
        analytics::total(self.ledger.list(), TransactionKind::Income)
    }

    /// Sum of all expense amounts
    pub fn total_expenses(&self) -> Money {
        analytics::total(self.ledger.list(), TransactionKind::Expense)
    }

    /// Income minus expenses
    pub fn balance(&self) -> Money {
        analytics::balance(self.ledger.list())
    }

    /// Per-category sums for one kind
    pub fn category_totals(&self, kind: TransactionKind) -> Vec<CategoryTotal> {
        analytics::category_totals(self.ledger.list(), kind)
    }

    /// Chronological per-month income/expense buckets
    pub fn monthly_series(&self) -> Vec<MonthlyTotals> {
        analytics::monthly_series(self.ledger.list())
    }

    fn audit(&self, entry: AuditEntry) -> CoreResult<()> {
        if let Some(logger) = &self.audit {
            logger.log(&entry)?;
        }
        Ok(())
    }
}
