//! Storage backend contracts and the reference in-memory backend.
//!
//! The engine never talks to a database directly.  It sees two
//! capability traits, and any backend (a durable SQL store, the
//! in-memory [`MemoryBackend`]) must satisfy them with identical error
//! semantics so callers cannot tell them apart.

pub mod memory;

use crate::auth::Account;
use crate::errors::Result;
use crate::secret::SecretKind;

pub use memory::MemoryBackend;

/// Persistence contract for encrypted secret blobs.
///
/// A record is addressed by the `(owner, kind, name)` triple, matched
/// exactly and case-sensitively.  Blobs arrive already encrypted; a
/// backend never sees plaintext.
pub trait VaultStore: Send + Sync {
    /// Persist `blob` under the triple.
    ///
    /// Saving to an existing triple is a last-write-wins upsert.  A
    /// backend-level failure surfaces as `StorageFailure`.
    fn save_blob(&self, owner: &str, kind: SecretKind, name: &str, blob: Vec<u8>) -> Result<()>;

    /// Fetch the blob stored under the triple.
    ///
    /// Fails with `DataNotFound` when no record matches, and with
    /// `StorageFailure` on backend-level faults.  The two are distinct
    /// so callers can tell "doesn't exist" from "unreadable".
    fn fetch_blob(&self, owner: &str, kind: SecretKind, name: &str) -> Result<Vec<u8>>;
}

/// Persistence contract for accounts.
pub trait AccountStore: Send + Sync {
    /// Create an account, assigning its id.
    ///
    /// Fails with `AccountExists` when `login` is already taken; the
    /// backend owns uniqueness enforcement.
    fn register_account(&self, login: &str, password_hash: &str) -> Result<Account>;

    /// Look up an account by login; `Ok(None)` means no such account.
    fn find_by_login(&self, login: &str) -> Result<Option<Account>>;
}
