//! Persisted credential records
//!
//! The credential schema gained `normalizedEmail`/`normalizedSecret` fields
//! after accounts already existed, so the store must read two record shapes:
//! the current one carrying precomputed normalized forms, and the legacy one
//! carrying only the raw fields. Records are modeled as an untagged variant
//! pair so a fallback chain over both shapes is explicit at the call sites
//! instead of relying on object-shape sniffing.

use serde::{Deserialize, Serialize};

use crate::normalize::{normalize_email, normalize_secret};

use super::user::UserRecord;

/// A credential as persisted under the `registeredUsers` key
///
/// Serde tries the `Normalized` shape first; records lacking the normalized
/// fields fall through to `Legacy`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StoredCredential {
    /// Current schema: raw secret plus precomputed normalized forms
    #[serde(rename_all = "camelCase")]
    Normalized {
        user: UserRecord,
        secret: String,
        normalized_email: String,
        normalized_secret: String,
    },

    /// Pre-normalization schema: raw fields only
    Legacy { user: UserRecord, secret: String },
}

impl StoredCredential {
    /// Build a current-schema credential, precomputing the normalized forms
    pub fn new(user: UserRecord, secret: impl Into<String>) -> Self {
        let secret = secret.into();
        let normalized_email = normalize_email(&user.email);
        let normalized_secret = normalize_secret(&secret);
        Self::Normalized {
            user,
            secret,
            normalized_email,
            normalized_secret,
        }
    }

    /// The user record carried by this credential
    pub fn user(&self) -> &UserRecord {
        match self {
            Self::Normalized { user, .. } => user,
            Self::Legacy { user, .. } => user,
        }
    }

    /// The normalized email this credential answers to, computing it on the
    /// fly for legacy records
    pub fn effective_normalized_email(&self) -> String {
        match self {
            Self::Normalized {
                normalized_email, ..
            } => normalized_email.clone(),
            Self::Legacy { user, .. } => normalize_email(&user.email),
        }
    }

    /// Exact match against the persisted normalized fields. Legacy records
    /// have none and never match this phase.
    pub fn matches_persisted(&self, email: &str, secret: &str) -> bool {
        match self {
            Self::Normalized {
                normalized_email,
                normalized_secret,
                ..
            } => normalized_email == email && normalized_secret == secret,
            Self::Legacy { .. } => false,
        }
    }

    /// Fallback match: re-normalize the raw email/secret of either variant.
    /// This is the rescue path for accounts written before normalization
    /// existed.
    pub fn matches_renormalized(&self, email: &str, secret: &str) -> bool {
        let (raw_email, raw_secret) = match self {
            Self::Normalized { user, secret, .. } => (&user.email, secret),
            Self::Legacy { user, secret } => (&user.email, secret),
        };
        normalize_email(raw_email) == email && normalize_secret(raw_secret) == secret
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ids::UserId;

    fn legacy_json() -> &'static str {
        r#"{"user":{"id":"user-1692000000000","name":"Old Timer","email":"Old.Timer@Mail.com"},"secret":" hunter2 "}"#
    }

    #[test]
    fn test_new_precomputes_normalized_fields() {
        let user = UserRecord::new("Alice", "alice@example.com");
        let cred = StoredCredential::new(user, " Secret1! ");
        match &cred {
            StoredCredential::Normalized {
                normalized_email,
                normalized_secret,
                secret,
                ..
            } => {
                assert_eq!(normalized_email, "alice@example.com");
                assert_eq!(normalized_secret, "Secret1!");
                assert_eq!(secret, " Secret1! ");
            }
            StoredCredential::Legacy { .. } => panic!("expected normalized variant"),
        }
    }

    #[test]
    fn test_current_schema_serializes_camel_case() {
        let user = UserRecord {
            id: UserId::from_raw("user-1"),
            name: "Alice".into(),
            email: "alice@example.com".into(),
        };
        let cred = StoredCredential::new(user, "pw");
        let json = serde_json::to_value(&cred).unwrap();
        assert!(json.get("normalizedEmail").is_some());
        assert!(json.get("normalizedSecret").is_some());
    }

    #[test]
    fn test_legacy_record_deserializes_as_legacy_variant() {
        let cred: StoredCredential = serde_json::from_str(legacy_json()).unwrap();
        assert!(matches!(cred, StoredCredential::Legacy { .. }));
    }

    #[test]
    fn test_legacy_effective_normalized_email() {
        let cred: StoredCredential = serde_json::from_str(legacy_json()).unwrap();
        assert_eq!(cred.effective_normalized_email(), "old.timer@mail.com");
    }

    #[test]
    fn test_legacy_never_matches_persisted_phase() {
        let cred: StoredCredential = serde_json::from_str(legacy_json()).unwrap();
        assert!(!cred.matches_persisted("old.timer@mail.com", "hunter2"));
    }

    #[test]
    fn test_legacy_matches_renormalized() {
        let cred: StoredCredential = serde_json::from_str(legacy_json()).unwrap();
        assert!(cred.matches_renormalized("old.timer@mail.com", "hunter2"));
        assert!(!cred.matches_renormalized("old.timer@mail.com", "hun ter2"));
    }

    #[test]
    fn test_normalized_round_trip() {
        let user = UserRecord::new("Alice", "alice@example.com");
        let cred = StoredCredential::new(user, "pw");
        let json = serde_json::to_string(&cred).unwrap();
        let back: StoredCredential = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cred);
        assert!(matches!(back, StoredCredential::Normalized { .. }));
    }
}
