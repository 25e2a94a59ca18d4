//! User account record
//!
//! The record the rest of the system sees after a successful registration or
//! login. The email is always stored in normalized form; the display name is
//! stored trimmed but otherwise as entered.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::UserId;

/// A registered (or built-in) user identity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Stable generator-assigned identifier
    pub id: UserId,

    /// Display name, trimmed
    pub name: String,

    /// Email in canonical normalized form
    pub email: String,
}

impl UserRecord {
    /// Create a record with a fresh id. Callers are expected to pass already
    /// normalized name/email (see `normalize`).
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: UserId::new(),
            name: name.into(),
            email: email.into(),
        }
    }
}

impl fmt::Display for UserRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}>", self.name, self.email)
    }
}
