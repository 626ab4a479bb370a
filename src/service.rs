//! Vault service: the orchestration layer.
//!
//! Wires together authentication, the secret codec, the crypto layer,
//! and the storage backend.  Write path: verify token → encode →
//! encrypt → store.  Read path: fetch → decrypt → decode.  Any stage
//! failure aborts the whole operation; the store call is the only
//! persistence point, so there are no partial writes to roll back.

use std::sync::Arc;

use serde_json::Value;

use crate::auth::{Authenticator, Credentials};
use crate::config::EngineConfig;
use crate::crypto::encryption::{decrypt, encrypt};
use crate::crypto::keys::EncryptionKey;
use crate::errors::{LockboxError, Result};
use crate::secret::{codec, Secret, SecretKind};
use crate::store::{AccountStore, VaultStore};

/// The vault engine's inbound surface.
///
/// One instance serves every request; it is `Send + Sync`, holds no
/// per-request state, and the only shared mutable resource is the
/// storage backend behind its own trait.
pub struct VaultService {
    store: Arc<dyn VaultStore>,
    auth: Authenticator,
    encryption_key: EncryptionKey,
}

impl VaultService {
    pub fn new(
        config: EngineConfig,
        store: Arc<dyn VaultStore>,
        accounts: Arc<dyn AccountStore>,
    ) -> Self {
        Self {
            store,
            auth: Authenticator::new(accounts, config.signing_secret.into_bytes()),
            encryption_key: config.encryption_key,
        }
    }

    /// The authenticator, for callers that need token operations
    /// directly (e.g. a transport middleware).
    pub fn auth(&self) -> &Authenticator {
        &self.auth
    }

    // ------------------------------------------------------------------
    // Account operations
    // ------------------------------------------------------------------

    /// Register a new account and return a session token for it.
    pub fn register(&self, credentials: &Credentials) -> Result<String> {
        let account = self.auth.register(credentials)?;
        self.auth.issue_token(&account)
    }

    /// Authenticate an existing account and return a session token.
    pub fn login(&self, credentials: &Credentials) -> Result<String> {
        let account = self.auth.login(credentials)?;
        self.auth.issue_token(&account)
    }

    // ------------------------------------------------------------------
    // Secret operations
    // ------------------------------------------------------------------

    /// Save a secret under the token owner's vault.
    ///
    /// `type_tag` and `fields` come straight from the parsed request
    /// body; an unknown tag or mismatched fields are rejected before
    /// any crypto or storage work.  The owner is taken from the
    /// verified token only, never from the request.
    pub fn save_secret(
        &self,
        bearer_token: &str,
        type_tag: &str,
        name: &str,
        fields: Value,
    ) -> Result<()> {
        let identity = self.auth.verify_token(bearer_token)?;

        let kind = SecretKind::parse(type_tag)?;
        if name.is_empty() {
            return Err(LockboxError::EmptyName);
        }
        let secret = Secret::from_fields(kind, fields)?;

        let blob = codec::encode(&secret)?;
        let ciphertext = encrypt(self.encryption_key.as_bytes(), &blob)?;

        self.store
            .save_blob(&identity.login, kind, name, ciphertext)?;

        tracing::info!(owner = %identity.login, %kind, name, "secret saved");
        Ok(())
    }

    /// Fetch a secret from the token owner's vault.
    ///
    /// Fails with `DataNotFound` when no record matches the triple,
    /// and with a codec error when the stored blob does not hold the
    /// requested type.  The two are distinct so a client can tell
    /// "doesn't exist" from "unreadable".
    pub fn fetch_secret(&self, bearer_token: &str, type_tag: &str, name: &str) -> Result<Secret> {
        let identity = self.auth.verify_token(bearer_token)?;

        let kind = SecretKind::parse(type_tag)?;
        if name.is_empty() {
            return Err(LockboxError::EmptyName);
        }

        let ciphertext = self.store.fetch_blob(&identity.login, kind, name)?;
        let blob = decrypt(self.encryption_key.as_bytes(), &ciphertext)?;
        let secret = codec::decode(kind, &blob)?;

        tracing::debug!(owner = %identity.login, %kind, name, "secret fetched");
        Ok(secret)
    }
}
