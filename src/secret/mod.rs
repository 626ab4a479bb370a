//! Typed secrets and their canonical blob codec.
//!
//! This module provides:
//! - The closed set of secret variants and their wire shape (`Secret`)
//! - The type-tag enum and factory (`SecretKind`)
//! - Encoding to and from the canonical storage blob (`codec`)

pub mod codec;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::{LockboxError, Result};

/// The closed set of secret type tags.
///
/// An unrecognized tag is a hard error at the parse boundary; there
/// is no default variant, and every `match` on this enum is
/// exhaustive, so adding a variant is a compile-time event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SecretKind {
    #[serde(rename = "login-password")]
    LoginPassword,
    #[serde(rename = "card")]
    Card,
    #[serde(rename = "text")]
    Text,
}

impl SecretKind {
    /// All known kinds, in wire-tag order.
    pub const ALL: [SecretKind; 3] = [
        SecretKind::LoginPassword,
        SecretKind::Card,
        SecretKind::Text,
    ];

    /// The wire tag for this kind (`login-password`, `card`, `text`).
    pub fn as_str(self) -> &'static str {
        match self {
            SecretKind::LoginPassword => "login-password",
            SecretKind::Card => "card",
            SecretKind::Text => "text",
        }
    }

    /// Map a wire tag to a kind.
    ///
    /// This is the factory gate for every inbound request: an unknown
    /// tag fails here, before any crypto or storage work happens.
    pub fn parse(tag: &str) -> Result<Self> {
        match tag {
            "login-password" => Ok(SecretKind::LoginPassword),
            "card" => Ok(SecretKind::Card),
            "text" => Ok(SecretKind::Text),
            other => Err(LockboxError::UnknownSecretType(other.to_string())),
        }
    }
}

impl std::fmt::Display for SecretKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One user-owned confidential record.
///
/// The serde representation is the wire shape shared with clients:
/// internally tagged with `type`, so an encoded secret always carries
/// its own variant tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Secret {
    #[serde(rename = "login-password")]
    LoginPassword { login: String, password: String },

    #[serde(rename = "card")]
    Card {
        #[serde(rename = "card_number")]
        number: String,
        holder: String,
        #[serde(rename = "exp_date")]
        expiry: String,
        cvc: String,
    },

    #[serde(rename = "text")]
    Text { text: String },
}

impl Secret {
    /// The type tag of this secret.
    pub fn kind(&self) -> SecretKind {
        match self {
            Secret::LoginPassword { .. } => SecretKind::LoginPassword,
            Secret::Card { .. } => SecretKind::Card,
            Secret::Text { .. } => SecretKind::Text,
        }
    }

    /// Build a typed secret from a declared kind and a parsed JSON
    /// object of wire fields.
    ///
    /// The transport layer parses request bodies; this is where the
    /// loose fields become a closed variant.  Fields that do not match
    /// the declared kind (missing or of the wrong shape) are an input
    /// error.  The declared kind is authoritative, so any `type` key
    /// inside `fields` is ignored.
    pub fn from_fields(kind: SecretKind, fields: Value) -> Result<Secret> {
        let Value::Object(mut map) = fields else {
            return Err(LockboxError::InvalidSecretFields(kind));
        };
        map.insert("type".to_string(), Value::String(kind.as_str().to_string()));

        serde_json::from_value(Value::Object(map))
            .map_err(|_| LockboxError::InvalidSecretFields(kind))
    }
}
