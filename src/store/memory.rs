//! Reference in-memory backend.
//!
//! Implements both storage contracts with the same error semantics as
//! a durable backend, so the service layer can be exercised without a
//! database.  Safe for concurrent use: all state sits behind one
//! mutex, and each trait call is a single critical section, the
//! in-memory analog of a single insert/upsert statement.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::auth::Account;
use crate::errors::{LockboxError, Result};
use crate::secret::SecretKind;

use super::{AccountStore, VaultStore};

/// Key of one stored secret record.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct RecordKey {
    owner: String,
    kind: SecretKind,
    name: String,
}

#[derive(Default)]
struct Inner {
    records: HashMap<RecordKey, Vec<u8>>,
    accounts: HashMap<String, Account>,
    next_account_id: i64,
}

/// In-memory implementation of [`VaultStore`] and [`AccountStore`].
#[derive(Default)]
pub struct MemoryBackend {
    inner: Mutex<Inner>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored secret records.  Metadata only; useful for
    /// asserting that a rejected request never reached the store.
    pub fn record_count(&self) -> usize {
        match self.inner.lock() {
            Ok(inner) => inner.records.len(),
            Err(_) => 0,
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Inner>> {
        self.inner
            .lock()
            .map_err(|_| LockboxError::StorageFailure("storage mutex poisoned".to_string()))
    }
}

impl VaultStore for MemoryBackend {
    fn save_blob(&self, owner: &str, kind: SecretKind, name: &str, blob: Vec<u8>) -> Result<()> {
        let key = RecordKey {
            owner: owner.to_string(),
            kind,
            name: name.to_string(),
        };

        // Last-write-wins upsert, matching the documented policy.
        self.lock()?.records.insert(key, blob);
        Ok(())
    }

    fn fetch_blob(&self, owner: &str, kind: SecretKind, name: &str) -> Result<Vec<u8>> {
        let key = RecordKey {
            owner: owner.to_string(),
            kind,
            name: name.to_string(),
        };

        self.lock()?
            .records
            .get(&key)
            .cloned()
            .ok_or(LockboxError::DataNotFound)
    }
}

impl AccountStore for MemoryBackend {
    fn register_account(&self, login: &str, password_hash: &str) -> Result<Account> {
        let mut inner = self.lock()?;

        if inner.accounts.contains_key(login) {
            return Err(LockboxError::AccountExists(login.to_string()));
        }

        inner.next_account_id += 1;
        let account = Account {
            id: inner.next_account_id,
            login: login.to_string(),
            password_hash: password_hash.to_string(),
        };
        inner.accounts.insert(login.to_string(), account.clone());

        Ok(account)
    }

    fn find_by_login(&self, login: &str) -> Result<Option<Account>> {
        Ok(self.lock()?.accounts.get(login).cloned())
    }
}
