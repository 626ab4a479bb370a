use thiserror::Error;

use crate::secret::SecretKind;

/// All errors that can occur in Lockbox.
#[derive(Debug, Error)]
pub enum LockboxError {
    // --- Input errors ---
    #[error("login must not be empty")]
    EmptyLogin,

    #[error("password must not be empty")]
    EmptyPassword,

    #[error("secret name must not be empty")]
    EmptyName,

    #[error("unknown secret type '{0}'")]
    UnknownSecretType(String),

    #[error("secret fields do not match type '{0}'")]
    InvalidSecretFields(SecretKind),

    // --- Authentication errors ---
    #[error("invalid login or password")]
    InvalidCredentials,

    #[error("unauthenticated")]
    Unauthenticated,

    #[error("token issuance failed: {0}")]
    TokenIssueFailed(String),

    // --- Conflict errors ---
    #[error("account '{0}' already exists")]
    AccountExists(String),

    // --- Crypto errors ---
    #[error("encryption key must be exactly {expected} bytes (got {got})")]
    InvalidKeyLength { expected: usize, got: usize },

    #[error("encryption failed: {0}")]
    EncryptionFailed(String),

    #[error("decryption failed — wrong key or corrupted ciphertext")]
    DecryptionFailed,

    #[error("password hashing failed: {0}")]
    HashFailure(String),

    // --- Codec errors ---
    #[error("cannot encode secret: {0}")]
    EncodeFailed(String),

    #[error("cannot decode secret blob")]
    DecodeFailed,

    #[error("stored secret is a '{found}' secret, expected '{expected}'")]
    SecretTypeMismatch {
        expected: SecretKind,
        found: SecretKind,
    },

    // --- Storage errors ---
    #[error("no secret found for that owner, type and name")]
    DataNotFound,

    #[error("storage backend failure: {0}")]
    StorageFailure(String),

    // --- Config errors ---
    #[error("config error: {0}")]
    ConfigError(String),
}

/// Convenience type alias for Lockbox results.
pub type Result<T> = std::result::Result<T, LockboxError>;
