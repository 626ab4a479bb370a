//! The server-held encryption key.
//!
//! The key is process-wide and read-only after construction: it is
//! validated once, wrapped so it cannot be printed by accident, and
//! zeroed when dropped.

use zeroize::Zeroize;

use crate::errors::{LockboxError, Result};

/// Length of the encryption key in bytes (256 bits, for AES-256-GCM).
pub const KEY_LEN: usize = 32;

/// A wrapper around the 32-byte server key that automatically zeroes
/// its memory when dropped.
#[derive(Clone, Zeroize)]
#[zeroize(drop)]
pub struct EncryptionKey {
    bytes: [u8; KEY_LEN],
}

impl EncryptionKey {
    /// Build a key from raw bytes, rejecting any length other than 32.
    ///
    /// A key of the wrong length fails fast here; it is never
    /// truncated or padded to fit.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let bytes: [u8; KEY_LEN] =
            bytes
                .try_into()
                .map_err(|_| LockboxError::InvalidKeyLength {
                    expected: KEY_LEN,
                    got: bytes.len(),
                })?;
        Ok(Self { bytes })
    }

    /// Access the raw key bytes (e.g. to pass to `encrypt`/`decrypt`).
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.bytes
    }
}

impl std::fmt::Debug for EncryptionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Never print key material.
        f.write_str("EncryptionKey(..)")
    }
}
