//! Argon2id password hashing for account credentials.
//!
//! `hash_password` salts every call with fresh randomness, so hashing
//! the same password twice produces two different PHC strings, yet
//! `verify_password` accepts both.  The plaintext password is never
//! stored, logged, or returned.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;

use crate::errors::{LockboxError, Result};

/// Hash a plaintext password with Argon2id and a random per-call salt.
///
/// Returns the hash in PHC string format, which embeds the salt and
/// the Argon2 parameters, so `verify_password` needs nothing else.
pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| LockboxError::HashFailure(e.to_string()))
}

/// Verify a plaintext password against a stored PHC hash string.
///
/// Returns `false` for a wrong password and for a malformed stored
/// hash; a corrupt hash must never authenticate anyone.  The
/// comparison itself is constant-time inside the argon2 crate.
pub fn verify_password(stored_hash: &str, password: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(stored_hash) else {
        return false;
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}
