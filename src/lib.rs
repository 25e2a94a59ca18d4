//! fintrack-core - Credential store and transaction ledger for the fintrack
//! personal finance dashboard
//!
//! This library holds the stateful core behind the dashboard: who is logged
//! in, what has been registered, which transactions exist, and the derived
//! figures (totals, category breakdown, monthly series) the views render.
//! Page layout, charts, and routing are external collaborators that call in
//! through the [`Tracker`] facade and never get called back.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `normalize`: Canonicalization of raw user input
//! - `models`: Core data models (users, credentials, transactions)
//! - `storage`: Key-value backend abstraction and JSON file store
//! - `auth`: Credential store and session manager
//! - `ledger`: Transaction collection and pure analytics queries
//! - `audit`: Append-only audit logging
//! - `tracker`: The facade consumed by presentation collaborators
//!
//! # Concurrency
//!
//! Everything is single-threaded and synchronous: each operation runs to
//! completion against one shared backend. Nothing here guards against a
//! second process writing the same backend; registration races across
//! processes are explicitly out of scope.
//!
//! # Example
//!
//! ```rust
//! use fintrack_core::config::Settings;
//! use fintrack_core::storage::MemoryStore;
//! use fintrack_core::Tracker;
//!
//! let store = MemoryStore::new();
//! let settings = Settings::default();
//! let mut tracker = Tracker::new(&store, &settings)?;
//!
//! tracker.register("Alice", "Alice@Example.com ", "Secret1!")?;
//! assert!(tracker.current_user().is_some());
//! # Ok::<(), fintrack_core::CoreError>(())
//! ```

pub mod audit;
pub mod auth;
pub mod config;
pub mod error;
pub mod ledger;
pub mod models;
pub mod normalize;
pub mod storage;
pub mod tracker;

pub use error::{CoreError, CoreResult};
pub use tracker::Tracker;
