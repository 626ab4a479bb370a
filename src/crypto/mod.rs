//! Cryptographic primitives for Lockbox.
//!
//! This module provides:
//! - AES-256-GCM encryption and decryption of secret blobs (`encryption`)
//! - Argon2id password hashing and verification for accounts (`password`)
//! - The zeroize-on-drop encryption key wrapper (`keys`)

pub mod encryption;
pub mod keys;
pub mod password;

// Re-export the most commonly used items so callers can write:
//   use crate::crypto::{encrypt, decrypt, hash_password, ...};
pub use encryption::{decrypt, encrypt};
pub use keys::{EncryptionKey, KEY_LEN};
pub use password::{hash_password, verify_password};
