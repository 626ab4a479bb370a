//! Lockbox: server-side engine for a personal secrets vault.
//!
//! Clients store small typed secrets (login/password pairs, payment
//! cards, free text) under an authenticated account.  The engine
//! encodes each secret to a canonical blob, encrypts it at rest under
//! a server-held key, and persists it per `(owner, type, name)` behind
//! pluggable storage traits.  The HTTP/CLI front end and the durable
//! database driver live outside this crate, behind [`store::VaultStore`]
//! and [`store::AccountStore`].

pub mod auth;
pub mod config;
pub mod crypto;
pub mod errors;
pub mod secret;
pub mod service;
pub mod store;

// Re-export the most commonly used items.
pub use config::EngineConfig;
pub use errors::{LockboxError, Result};
pub use secret::{Secret, SecretKind};
pub use service::VaultService;
pub use store::{AccountStore, MemoryBackend, VaultStore};
