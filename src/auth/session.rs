//! Session manager
//!
//! Tracks which user, if any, is authenticated in this process, and keeps
//! the persisted token + user snapshot in step with that state. At most one
//! session exists per process.

use uuid::Uuid;

use crate::error::CoreResult;
use crate::models::UserRecord;
use crate::storage::{keys, read_record, write_record, KeyValueStore};

use super::credentials::CredentialStore;

/// Authentication state of the process
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    Anonymous,
    Authenticated(UserRecord),
}

/// Owns the process session over a key-value backend
pub struct SessionManager<'a> {
    store: &'a dyn KeyValueStore,
    credentials: CredentialStore<'a>,
    state: SessionState,
}

impl<'a> SessionManager<'a> {
    /// Create a session manager in the `Anonymous` state. Call `restore` to
    /// pick up a persisted session.
    pub fn new(store: &'a dyn KeyValueStore) -> Self {
        Self {
            store,
            credentials: CredentialStore::new(store),
            state: SessionState::Anonymous,
        }
    }

    /// Create a session manager, controlling the built-in demo identity
    pub fn with_demo_identity(store: &'a dyn KeyValueStore, enabled: bool) -> Self {
        Self {
            store,
            credentials: CredentialStore::with_demo_identity(store, enabled),
            state: SessionState::Anonymous,
        }
    }

    /// Restore a persisted session, if any.
    ///
    /// Requires both the token and a parseable user snapshot. A half-present
    /// or unparseable session is treated as corrupt: both keys are cleared
    /// and the state stays `Anonymous`. Corruption is never surfaced to the
    /// caller as a failure.
    pub fn restore(&mut self) -> CoreResult<()> {
        let token = self.store.get(keys::TOKEN)?;
        let user = match read_record::<UserRecord>(self.store, keys::USER) {
            Ok(user) => user,
            Err(e) if e.is_corrupt_state() => None,
            Err(e) => return Err(e),
        };

        match (token, user) {
            (Some(_), Some(user)) => {
                self.state = SessionState::Authenticated(user);
            }
            (None, None) => {
                self.state = SessionState::Anonymous;
            }
            // Half-valid or corrupt: reset rather than trust it
            _ => {
                self.clear_persisted()?;
                self.state = SessionState::Anonymous;
            }
        }

        Ok(())
    }

    /// Authenticate and open a session
    pub fn login(&mut self, email: &str, secret: &str) -> CoreResult<UserRecord> {
        let user = self.credentials.authenticate(email, secret)?;
        self.open_session(user.clone())?;
        Ok(user)
    }

    /// Register a new identity and open a session for it. Registration
    /// implies immediate authentication; there is no confirmation step.
    pub fn register(&mut self, name: &str, email: &str, secret: &str) -> CoreResult<UserRecord> {
        let user = self.credentials.register(name, email, secret)?;
        self.open_session(user.clone())?;
        Ok(user)
    }

    /// Close the session. Transitions to `Anonymous` unconditionally.
    pub fn logout(&mut self) -> CoreResult<()> {
        self.state = SessionState::Anonymous;
        self.clear_persisted()
    }

    /// The currently authenticated user, if any
    pub fn current_user(&self) -> Option<&UserRecord> {
        match &self.state {
            SessionState::Authenticated(user) => Some(user),
            SessionState::Anonymous => None,
        }
    }

    /// The current session state
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    fn open_session(&mut self, user: UserRecord) -> CoreResult<()> {
        let token = format!("tok-{}", Uuid::new_v4());
        self.store.set(keys::TOKEN, &token)?;
        write_record(self.store, keys::USER, &user)?;
        self.state = SessionState::Authenticated(user);
        Ok(())
    }

    fn clear_persisted(&self) -> CoreResult<()> {
        self.store.remove(keys::TOKEN)?;
        self.store.remove(keys::USER)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_starts_anonymous() {
        let store = MemoryStore::new();
        let session = SessionManager::new(&store);
        assert_eq!(session.current_user(), None);
        assert_eq!(*session.state(), SessionState::Anonymous);
    }

    #[test]
    fn test_register_authenticates_immediately() {
        let store = MemoryStore::new();
        let mut session = SessionManager::new(&store);

        let user = session.register("Alice", "alice@x.com", "pw").unwrap();
        assert_eq!(session.current_user(), Some(&user));
        assert!(store.get(keys::TOKEN).unwrap().is_some());
        assert!(store.get(keys::USER).unwrap().is_some());
    }

    #[test]
    fn test_login_persists_token_and_snapshot() {
        let store = MemoryStore::new();
        let mut session = SessionManager::new(&store);
        session.register("Alice", "alice@x.com", "pw").unwrap();
        session.logout().unwrap();

        let user = session.login("alice@x.com", "pw").unwrap();
        assert_eq!(session.current_user(), Some(&user));
        let token = store.get(keys::TOKEN).unwrap().unwrap();
        assert!(token.starts_with("tok-"));
    }

    #[test]
    fn test_failed_login_stays_anonymous() {
        let store = MemoryStore::new();
        let mut session = SessionManager::new(&store);

        let err = session.login("nobody@x.com", "pw").unwrap_err();
        assert!(err.is_invalid_credentials());
        assert_eq!(session.current_user(), None);
        assert_eq!(store.get(keys::TOKEN).unwrap(), None);
    }

    #[test]
    fn test_logout_clears_persisted_session() {
        let store = MemoryStore::new();
        let mut session = SessionManager::new(&store);
        session.register("Alice", "alice@x.com", "pw").unwrap();

        session.logout().unwrap();
        assert_eq!(session.current_user(), None);
        assert_eq!(store.get(keys::TOKEN).unwrap(), None);
        assert_eq!(store.get(keys::USER).unwrap(), None);

        // Idempotent
        session.logout().unwrap();
        assert_eq!(session.current_user(), None);
    }

    #[test]
    fn test_restore_picks_up_persisted_session() {
        let store = MemoryStore::new();
        let user = {
            let mut session = SessionManager::new(&store);
            session.register("Alice", "alice@x.com", "pw").unwrap()
        };

        let mut session = SessionManager::new(&store);
        session.restore().unwrap();
        assert_eq!(session.current_user(), Some(&user));
    }

    #[test]
    fn test_restore_with_empty_store_is_anonymous() {
        let store = MemoryStore::new();
        let mut session = SessionManager::new(&store);
        session.restore().unwrap();
        assert_eq!(session.current_user(), None);
    }

    #[test]
    fn test_restore_clears_corrupt_snapshot() {
        let store = MemoryStore::new();
        store.set(keys::TOKEN, "tok-abc").unwrap();
        store.set(keys::USER, "{not json").unwrap();

        let mut session = SessionManager::new(&store);
        session.restore().unwrap();

        assert_eq!(session.current_user(), None);
        assert_eq!(store.get(keys::TOKEN).unwrap(), None);
        assert_eq!(store.get(keys::USER).unwrap(), None);
    }

    #[test]
    fn test_restore_clears_half_valid_session() {
        let store = MemoryStore::new();
        store.set(keys::TOKEN, "tok-abc").unwrap();

        let mut session = SessionManager::new(&store);
        session.restore().unwrap();

        assert_eq!(session.current_user(), None);
        assert_eq!(store.get(keys::TOKEN).unwrap(), None);
    }
}
