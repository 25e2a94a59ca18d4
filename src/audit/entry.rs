//! Audit entry data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Types of events that are audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditEvent {
    /// A new identity was registered
    Register,
    /// A session was opened
    Login,
    /// A session was closed
    Logout,
    /// A transaction was added to the ledger
    TransactionAdded,
    /// A transaction was removed from the ledger
    TransactionRemoved,
}

impl fmt::Display for AuditEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Register => write!(f, "REGISTER"),
            Self::Login => write!(f, "LOGIN"),
            Self::Logout => write!(f, "LOGOUT"),
            Self::TransactionAdded => write!(f, "TXN_ADD"),
            Self::TransactionRemoved => write!(f, "TXN_REMOVE"),
        }
    }
}

/// A single audit log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the event occurred (UTC)
    pub timestamp: DateTime<Utc>,

    /// What happened
    pub event: AuditEvent,

    /// ID of the affected entity (user id or transaction id)
    pub entity_id: String,

    /// Human-readable detail (e.g. normalized email, transaction description)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl AuditEntry {
    /// Create an entry stamped with the current time
    pub fn now(event: AuditEvent, entity_id: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            event,
            entity_id: entity_id.into(),
            detail: None,
        }
    }

    /// Attach a human-readable detail
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}
