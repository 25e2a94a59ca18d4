//! Credential store
//!
//! Owns the set of registered identities persisted under `registeredUsers`.
//! Uniqueness and login both compare normalized forms; matching runs a
//! fallback chain so accounts written before the normalized fields existed
//! are never locked out.
//!
//! Every operation is a plain read-modify-write of the full sequence. Two
//! processes sharing one backend can race a registration; the backend is
//! assumed single-process (see crate docs).

use crate::error::{CoreError, CoreResult};
use crate::models::{StoredCredential, UserId, UserRecord};
use crate::normalize::{normalize_email, normalize_name, normalize_secret};
use crate::storage::{keys, read_record, write_record, KeyValueStore};

/// Built-in demo identity, checked before the persisted set
pub const DEMO_EMAIL: &str = "demo@example.com";
pub const DEMO_SECRET: &str = "password123";
pub const DEMO_NAME: &str = "Demo User";
pub const DEMO_ID: &str = "user-1";

/// Store of registered identities over a key-value backend
pub struct CredentialStore<'a> {
    store: &'a dyn KeyValueStore,
    demo_enabled: bool,
}

impl<'a> CredentialStore<'a> {
    /// Create a credential store with the built-in demo identity enabled
    pub fn new(store: &'a dyn KeyValueStore) -> Self {
        Self {
            store,
            demo_enabled: true,
        }
    }

    /// Create a credential store, controlling the demo identity
    pub fn with_demo_identity(store: &'a dyn KeyValueStore, enabled: bool) -> Self {
        Self {
            store,
            demo_enabled: enabled,
        }
    }

    /// Register a new identity.
    ///
    /// Fails with `DuplicateEmail` when the normalized email is already
    /// claimed, by any stored record (current or legacy schema) or by the
    /// demo identity. On success the returned record carries the normalized
    /// email, so later uniqueness checks stay trivial.
    pub fn register(&self, name: &str, email: &str, secret: &str) -> CoreResult<UserRecord> {
        let name = normalize_name(name);
        let normalized_email = normalize_email(email);
        let normalized_secret = normalize_secret(secret);

        if name.is_empty() {
            return Err(CoreError::MissingField("name"));
        }
        if normalized_email.is_empty() {
            return Err(CoreError::MissingField("email"));
        }
        if normalized_secret.is_empty() {
            return Err(CoreError::MissingField("password"));
        }

        if self.find_by_normalized_email(&normalized_email)?.is_some() {
            return Err(CoreError::duplicate_email(normalized_email));
        }

        let user = UserRecord::new(name, normalized_email);
        let credential = StoredCredential::new(user.clone(), secret);

        let mut credentials = self.load()?;
        credentials.push(credential);
        self.save(&credentials)?;

        Ok(user)
    }

    /// Resolve a login attempt.
    ///
    /// Matching order: the demo identity, then persisted normalized fields,
    /// then a re-normalizing pass over every record's raw fields (the legacy
    /// rescue path). No match is `InvalidCredentials`.
    pub fn authenticate(&self, email: &str, secret: &str) -> CoreResult<UserRecord> {
        let normalized_email = normalize_email(email);
        let normalized_secret = normalize_secret(secret);

        if self.demo_enabled
            && normalized_email == DEMO_EMAIL
            && normalized_secret == DEMO_SECRET
        {
            return Ok(demo_user());
        }

        let credentials = self.load()?;

        if let Some(credential) = credentials
            .iter()
            .find(|c| c.matches_persisted(&normalized_email, &normalized_secret))
        {
            return Ok(credential.user().clone());
        }

        if let Some(credential) = credentials
            .iter()
            .find(|c| c.matches_renormalized(&normalized_email, &normalized_secret))
        {
            return Ok(credential.user().clone());
        }

        Err(CoreError::InvalidCredentials)
    }

    /// Look up an identity by its normalized email. Backs the uniqueness
    /// check; the demo identity counts as claimed when enabled.
    pub(crate) fn find_by_normalized_email(
        &self,
        normalized_email: &str,
    ) -> CoreResult<Option<UserRecord>> {
        if self.demo_enabled && normalized_email == DEMO_EMAIL {
            return Ok(Some(demo_user()));
        }

        let credentials = self.load()?;
        Ok(credentials
            .iter()
            .find(|c| c.effective_normalized_email() == normalized_email)
            .map(|c| c.user().clone()))
    }

    /// Load the persisted credential sequence; a missing key is the empty set
    fn load(&self) -> CoreResult<Vec<StoredCredential>> {
        Ok(read_record(self.store, keys::REGISTERED_USERS)?.unwrap_or_default())
    }

    fn save(&self, credentials: &[StoredCredential]) -> CoreResult<()> {
        write_record(self.store, keys::REGISTERED_USERS, &credentials)
    }
}

/// The built-in demo user record. The id is stable so repeated logins
/// resolve to the same identity.
fn demo_user() -> UserRecord {
    UserRecord {
        id: UserId::from_raw(DEMO_ID),
        name: DEMO_NAME.to_string(),
        email: DEMO_EMAIL.to_string(),
    }
}
