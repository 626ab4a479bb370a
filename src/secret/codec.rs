//! Canonical blob codec for typed secrets.
//!
//! `encode` turns a secret into the byte blob that gets encrypted and
//! persisted; `decode` is the exact inverse.  The blob is the secret's
//! internally tagged JSON, so it is self-contained: decoding needs
//! nothing beyond the declared kind and the bytes, and the embedded
//! tag lets `decode` catch a caller asking for the wrong variant.

use crate::errors::{LockboxError, Result};
use crate::secret::{Secret, SecretKind};

/// Encode a secret into its canonical blob.
///
/// Pure and deterministic: no I/O, no external state.  Cannot fail
/// for a structurally valid secret; the `Result` only propagates
/// serializer faults such as allocation failure.
pub fn encode(secret: &Secret) -> Result<Vec<u8>> {
    serde_json::to_vec(secret).map_err(|e| LockboxError::EncodeFailed(e.to_string()))
}

/// Decode a blob back into the secret variant the caller expects.
///
/// Fails with `DecodeFailed` when the bytes are not a well-formed
/// encoded secret (truncated, corrupted, wrong field set), and with
/// `SecretTypeMismatch` when the blob decodes cleanly but carries a
/// different type tag than `kind`.  Neither error echoes blob
/// contents.
pub fn decode(kind: SecretKind, bytes: &[u8]) -> Result<Secret> {
    let secret: Secret =
        serde_json::from_slice(bytes).map_err(|_| LockboxError::DecodeFailed)?;

    if secret.kind() != kind {
        return Err(LockboxError::SecretTypeMismatch {
            expected: kind,
            found: secret.kind(),
        });
    }

    Ok(secret)
}
