//! Signed session tokens.
//!
//! Tokens are HS256 JWTs asserting `{user_id, login, iat, exp}` with a
//! fixed 10-hour validity window.  Issuance and verification are pure
//! functions of their inputs, the signing secret, and the clock.  No
//! server-side session state exists, so there is no revocation list.

use chrono::{DateTime, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::errors::{LockboxError, Result};

use super::Account;

/// How long an issued token stays valid.
pub const TOKEN_TTL_SECS: i64 = 10 * 60 * 60;

/// Claims carried inside a session token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub user_id: i64,
    pub login: String,
    pub iat: i64,
    pub exp: i64,
}

/// Sign a token asserting `account`'s identity, issued at `issued_at`
/// and expiring `TOKEN_TTL_SECS` later.
///
/// An account with an empty login is refused.  It should be
/// unreachable given the registration invariants, but a token that
/// asserts nobody must never exist.
pub fn issue(account: &Account, signing_secret: &[u8], issued_at: DateTime<Utc>) -> Result<String> {
    if account.login.is_empty() {
        return Err(LockboxError::TokenIssueFailed(
            "account login is empty".to_string(),
        ));
    }

    let issued = issued_at.timestamp();
    let claims = Claims {
        user_id: account.id,
        login: account.login.clone(),
        iat: issued,
        exp: issued + TOKEN_TTL_SECS,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(signing_secret),
    )
    .map_err(|e| LockboxError::TokenIssueFailed(e.to_string()))
}

/// Verify a token and return its claims.
///
/// Fails closed: a missing, malformed, tampered, or expired token, or
/// one whose asserted login is empty, all yield `Unauthenticated`.
/// Expiry is checked with zero leeway.
pub fn verify(token: &str, signing_secret: &[u8]) -> Result<Claims> {
    if token.is_empty() {
        return Err(LockboxError::Unauthenticated);
    }

    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 0;

    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(signing_secret),
        &validation,
    )
    .map_err(|e| {
        tracing::debug!(error = %e, "token verification failed");
        LockboxError::Unauthenticated
    })?;

    if data.claims.login.is_empty() {
        return Err(LockboxError::Unauthenticated);
    }

    Ok(data.claims)
}
