//! Persisted key names
//!
//! The backend namespace is inherited from the original store and must not
//! change: older deployments already hold data under these keys.

/// Opaque session token (Session Manager)
pub const TOKEN: &str = "token";

/// Serialized `UserRecord` snapshot of the authenticated user (Session Manager)
pub const USER: &str = "user";

/// Serialized sequence of `StoredCredential` (Credential Store)
pub const REGISTERED_USERS: &str = "registeredUsers";

/// Serialized sequence of `Transaction` (Transaction Ledger)
pub const TRANSACTIONS: &str = "transactions";
