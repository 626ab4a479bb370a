//! Account authentication: credential checks, registration, login,
//! and session-token issuance/verification.
//!
//! The authenticator owns token lifetime semantics but not account
//! storage: lookups and uniqueness enforcement are delegated to an
//! [`AccountStore`] collaborator.

pub mod token;

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::crypto::password::{hash_password, verify_password};
use crate::errors::{LockboxError, Result};
use crate::store::AccountStore;

pub use token::{Claims, TOKEN_TTL_SECS};

/// A registered account as the storage backend holds it.
///
/// `password_hash` is a PHC string; it is only ever compared through
/// [`verify_password`], never by equality with plaintext.
#[derive(Debug, Clone)]
pub struct Account {
    pub id: i64,
    pub login: String,
    pub password_hash: String,
}

/// Credentials as submitted by a client on register/login.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Credentials {
    pub login: String,
    pub password: String,
}

/// The account identity asserted by a verified token.
///
/// This, and only this, is what vault operations use as the
/// ownership key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountIdentity {
    pub id: i64,
    pub login: String,
}

/// A valid Argon2id PHC string used to keep the unknown-login path of
/// `login` as expensive as a real verification.  Its parameters match
/// `Argon2::default()`, and it hashes no password anyone can submit.
const FALLBACK_HASH: &str =
    "$argon2id$v=19$m=19456,t=2,p=1$gZiV/M1gPc22ElAH/Jh1Hw$CWOrkoo7oJBQ/iyh7uJ0LO2aLEfrHwTWllSAxT0zRno";

/// Verifies submitted credentials and issues/verifies session tokens.
pub struct Authenticator {
    accounts: Arc<dyn AccountStore>,
    signing_secret: Vec<u8>,
}

impl Authenticator {
    pub fn new(accounts: Arc<dyn AccountStore>, signing_secret: impl Into<Vec<u8>>) -> Self {
        Self {
            accounts,
            signing_secret: signing_secret.into(),
        }
    }

    /// Reject structurally invalid credentials before any storage or
    /// hashing work happens.
    pub fn check_credentials(&self, credentials: &Credentials) -> Result<()> {
        if credentials.login.is_empty() {
            return Err(LockboxError::EmptyLogin);
        }
        if credentials.password.is_empty() {
            return Err(LockboxError::EmptyPassword);
        }
        Ok(())
    }

    /// Register a new account: hash the password and hand the pair to
    /// the backend, which enforces login uniqueness.
    pub fn register(&self, credentials: &Credentials) -> Result<Account> {
        self.check_credentials(credentials)?;

        let password_hash = hash_password(&credentials.password)?;
        let account = self
            .accounts
            .register_account(&credentials.login, &password_hash)?;

        tracing::info!(login = %account.login, id = account.id, "account registered");
        Ok(account)
    }

    /// Authenticate submitted credentials against the backend.
    ///
    /// An unknown login and a wrong password return the identical
    /// error, and the unknown-login path still runs one Argon2
    /// verification so the two failures cost the same.
    pub fn login(&self, credentials: &Credentials) -> Result<Account> {
        self.check_credentials(credentials)?;

        match self.accounts.find_by_login(&credentials.login)? {
            Some(account) if verify_password(&account.password_hash, &credentials.password) => {
                tracing::debug!(login = %account.login, "login accepted");
                Ok(account)
            }
            Some(_) => {
                tracing::debug!(login = %credentials.login, "login rejected");
                Err(LockboxError::InvalidCredentials)
            }
            None => {
                let _ = verify_password(FALLBACK_HASH, &credentials.password);
                tracing::debug!(login = %credentials.login, "login rejected");
                Err(LockboxError::InvalidCredentials)
            }
        }
    }

    /// Issue a session token for `account`, valid for ten hours from
    /// now.
    pub fn issue_token(&self, account: &Account) -> Result<String> {
        self.issue_token_at(account, Utc::now())
    }

    /// Issue a token with an explicit issue time.
    ///
    /// Exists so expiry behavior can be exercised without a mock
    /// clock; `issue_token` is the normal entry point.
    pub fn issue_token_at(&self, account: &Account, issued_at: DateTime<Utc>) -> Result<String> {
        token::issue(account, &self.signing_secret, issued_at)
    }

    /// Verify a bearer token and return the identity it asserts.
    ///
    /// Fails closed with `Unauthenticated` on any structural,
    /// signature, or expiry failure.
    pub fn verify_token(&self, bearer: &str) -> Result<AccountIdentity> {
        let claims = token::verify(bearer, &self.signing_secret)?;
        Ok(AccountIdentity {
            id: claims.user_id,
            login: claims.login,
        })
    }
}
