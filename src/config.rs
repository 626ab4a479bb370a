//! Engine configuration.
//!
//! The process that embeds the engine (its config loader is out of
//! scope here) resolves the signing secret and encryption key however
//! it likes, then hands them to `EngineConfig::new`, which validates
//! them eagerly.  Nothing in the engine reads the environment or
//! global state, and a failed config never produces a half-working
//! service.

use crate::crypto::keys::EncryptionKey;
use crate::errors::{LockboxError, Result};

/// Validated secrets the engine needs at construction time.
///
/// Both values are read-only for the lifetime of the process.
#[derive(Debug)]
pub struct EngineConfig {
    /// Secret used to sign and verify session tokens.
    pub signing_secret: String,

    /// 32-byte key for blob encryption at rest.
    pub encryption_key: EncryptionKey,
}

impl EngineConfig {
    /// Build a config, validating both secrets.
    ///
    /// The encryption key must be exactly 32 bytes (it is never
    /// truncated or padded) and the signing secret must be non-empty.
    pub fn new(signing_secret: impl Into<String>, encryption_key: &[u8]) -> Result<Self> {
        let signing_secret = signing_secret.into();
        if signing_secret.is_empty() {
            return Err(LockboxError::ConfigError(
                "signing secret must not be empty".to_string(),
            ));
        }

        Ok(Self {
            signing_secret,
            encryption_key: EncryptionKey::from_bytes(encryption_key)?,
        })
    }
}
