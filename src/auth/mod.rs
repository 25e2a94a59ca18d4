//! Authentication subsystem
//!
//! The credential store owns registered identities; the session manager owns
//! the at-most-one authenticated session per process. Both share the same
//! key-value backend and are the only writers to the credential/session keys.

pub mod credentials;
pub mod session;

pub use credentials::CredentialStore;
pub use session::{SessionManager, SessionState};
