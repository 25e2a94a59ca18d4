//! Audit logging
//!
//! An append-only JSONL trail of authentication and ledger events. Attached
//! by the [`Tracker`](crate::tracker::Tracker) facade when a log path is
//! configured; the domain modules themselves stay free of logging concerns.

pub mod entry;
pub mod logger;

pub use entry::{AuditEntry, AuditEvent};
pub use logger::AuditLogger;
