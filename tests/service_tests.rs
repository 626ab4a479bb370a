//! End-to-end tests for the vault service against the in-memory backend.

use std::sync::Arc;

use lockbox::auth::Credentials;
use lockbox::crypto::encrypt;
use lockbox::errors::LockboxError;
use lockbox::secret::{codec, Secret, SecretKind};
use lockbox::store::VaultStore;
use lockbox::{EngineConfig, MemoryBackend, VaultService};
use serde_json::json;

const ENCRYPTION_KEY: [u8; 32] = [7u8; 32];

fn setup() -> (VaultService, Arc<MemoryBackend>) {
    let backend = Arc::new(MemoryBackend::new());
    let config = EngineConfig::new("test-signing-secret", &ENCRYPTION_KEY).expect("config");
    let service = VaultService::new(config, backend.clone(), backend.clone());
    (service, backend)
}

fn credentials(login: &str, password: &str) -> Credentials {
    Credentials {
        login: login.to_string(),
        password: password.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Config validation
// ---------------------------------------------------------------------------

#[test]
fn config_rejects_bad_secrets() {
    let err = EngineConfig::new("", &ENCRYPTION_KEY).unwrap_err();
    assert!(matches!(err, LockboxError::ConfigError(_)));

    let err = EngineConfig::new("secret", &[1u8; 16]).unwrap_err();
    assert!(matches!(
        err,
        LockboxError::InvalidKeyLength {
            expected: 32,
            got: 16
        }
    ));
}

// ---------------------------------------------------------------------------
// Save / fetch scenarios
// ---------------------------------------------------------------------------

#[test]
fn save_and_fetch_text_secret() {
    let (service, _) = setup();

    let token = service
        .register(&credentials("alice", "pw1"))
        .expect("register");

    service
        .save_secret(&token, "text", "note1", json!({"text": "hello"}))
        .expect("save");

    let secret = service
        .fetch_secret(&token, "text", "note1")
        .expect("fetch");
    assert_eq!(
        secret,
        Secret::Text {
            text: "hello".to_string(),
        }
    );
}

#[test]
fn save_and_fetch_login_password_secret() {
    let (service, _) = setup();
    let token = service
        .register(&credentials("alice", "pw1"))
        .expect("register");

    service
        .save_secret(
            &token,
            "login-password",
            "work-email",
            json!({"login": "alice@corp", "password": "s3cret"}),
        )
        .expect("save");

    let secret = service
        .fetch_secret(&token, "login-password", "work-email")
        .expect("fetch");
    assert_eq!(
        secret,
        Secret::LoginPassword {
            login: "alice@corp".to_string(),
            password: "s3cret".to_string(),
        }
    );
}

#[test]
fn save_and_fetch_card_secret() {
    let (service, _) = setup();
    let token = service
        .register(&credentials("alice", "pw1"))
        .expect("register");

    service
        .save_secret(
            &token,
            "card",
            "visa",
            json!({
                "card_number": "4111 1111 1111 1111",
                "holder": "ALICE EXAMPLE",
                "exp_date": "12/29",
                "cvc": "123"
            }),
        )
        .expect("save");

    let secret = service.fetch_secret(&token, "card", "visa").expect("fetch");
    assert_eq!(secret.kind(), SecretKind::Card);
}

#[test]
fn blobs_are_stored_encrypted() {
    let (service, backend) = setup();
    let token = service
        .register(&credentials("alice", "pw1"))
        .expect("register");

    service
        .save_secret(&token, "text", "note1", json!({"text": "hello"}))
        .expect("save");

    let stored = backend
        .fetch_blob("alice", SecretKind::Text, "note1")
        .expect("raw blob");

    // The persisted bytes must not contain the plaintext or the wire JSON.
    let stored_str = String::from_utf8_lossy(&stored);
    assert!(!stored_str.contains("hello"));
    assert!(!stored_str.contains("text"));
}

// ---------------------------------------------------------------------------
// Input rejection
// ---------------------------------------------------------------------------

#[test]
fn unknown_type_is_rejected_before_any_storage_call() {
    let (service, backend) = setup();
    let token = service
        .register(&credentials("alice", "pw1"))
        .expect("register");

    let err = service
        .save_secret(&token, "bogus", "x", json!({}))
        .unwrap_err();

    assert!(matches!(err, LockboxError::UnknownSecretType(_)));
    assert_eq!(backend.record_count(), 0, "nothing must reach the store");
}

#[test]
fn mismatched_fields_are_rejected_before_any_storage_call() {
    let (service, backend) = setup();
    let token = service
        .register(&credentials("alice", "pw1"))
        .expect("register");

    let err = service
        .save_secret(&token, "card", "visa", json!({"text": "not a card"}))
        .unwrap_err();

    assert!(matches!(err, LockboxError::InvalidSecretFields(_)));
    assert_eq!(backend.record_count(), 0);
}

#[test]
fn empty_name_is_rejected() {
    let (service, _) = setup();
    let token = service
        .register(&credentials("alice", "pw1"))
        .expect("register");

    let err = service
        .save_secret(&token, "text", "", json!({"text": "hi"}))
        .unwrap_err();
    assert!(matches!(err, LockboxError::EmptyName));

    let err = service.fetch_secret(&token, "text", "").unwrap_err();
    assert!(matches!(err, LockboxError::EmptyName));
}

// ---------------------------------------------------------------------------
// Authentication boundary
// ---------------------------------------------------------------------------

#[test]
fn vault_operations_require_a_valid_token() {
    let (service, backend) = setup();

    let err = service
        .save_secret("garbage-token", "text", "note1", json!({"text": "hi"}))
        .unwrap_err();
    assert!(matches!(err, LockboxError::Unauthenticated));
    assert_eq!(backend.record_count(), 0);

    let err = service
        .fetch_secret("garbage-token", "text", "note1")
        .unwrap_err();
    assert!(matches!(err, LockboxError::Unauthenticated));
}

#[test]
fn login_token_grants_access_to_previously_saved_secrets() {
    let (service, _) = setup();

    let register_token = service
        .register(&credentials("alice", "pw1"))
        .expect("register");
    service
        .save_secret(&register_token, "text", "note1", json!({"text": "hello"}))
        .expect("save");

    // A fresh token from login reaches the same vault.
    let login_token = service.login(&credentials("alice", "pw1")).expect("login");
    let secret = service
        .fetch_secret(&login_token, "text", "note1")
        .expect("fetch");
    assert_eq!(secret.kind(), SecretKind::Text);
}

#[test]
fn accounts_cannot_read_each_others_secrets() {
    let (service, _) = setup();

    let alice = service
        .register(&credentials("alice", "pw1"))
        .expect("register alice");
    let bob = service
        .register(&credentials("bob", "pw2"))
        .expect("register bob");

    service
        .save_secret(&alice, "text", "note1", json!({"text": "alice's note"}))
        .expect("save");

    // Bob holds a structurally valid token, but not for alice's vault.
    let err = service.fetch_secret(&bob, "text", "note1").unwrap_err();
    assert!(matches!(err, LockboxError::DataNotFound));
}

// ---------------------------------------------------------------------------
// Error taxonomy on the read path
// ---------------------------------------------------------------------------

#[test]
fn fetching_a_never_saved_secret_is_not_found() {
    let (service, _) = setup();
    let token = service
        .register(&credentials("alice", "pw1"))
        .expect("register");

    let err = service
        .fetch_secret(&token, "card", "never-saved")
        .unwrap_err();

    // Distinct from a decode error: the record simply does not exist.
    assert!(matches!(err, LockboxError::DataNotFound));
}

#[test]
fn mislabeled_blob_fails_with_a_type_mismatch() {
    let (service, backend) = setup();
    let token = service
        .register(&credentials("alice", "pw1"))
        .expect("register");

    // Plant a text blob under a card-typed record, as a corrupted or
    // misfiled backend row would present it.
    let text_blob = codec::encode(&Secret::Text {
        text: "not a card".to_string(),
    })
    .expect("encode");
    let ciphertext = encrypt(&ENCRYPTION_KEY, &text_blob).expect("encrypt");
    backend
        .save_blob("alice", SecretKind::Card, "mislabeled", ciphertext)
        .expect("plant");

    let err = service
        .fetch_secret(&token, "card", "mislabeled")
        .unwrap_err();
    assert!(matches!(
        err,
        LockboxError::SecretTypeMismatch {
            expected: SecretKind::Card,
            found: SecretKind::Text,
        }
    ));
}

// ---------------------------------------------------------------------------
// Overwrite policy
// ---------------------------------------------------------------------------

#[test]
fn saving_the_same_triple_twice_is_last_write_wins() {
    let (service, backend) = setup();
    let token = service
        .register(&credentials("alice", "pw1"))
        .expect("register");

    service
        .save_secret(&token, "text", "note1", json!({"text": "first"}))
        .expect("save 1");
    service
        .save_secret(&token, "text", "note1", json!({"text": "second"}))
        .expect("save 2");

    assert_eq!(backend.record_count(), 1, "upsert, not duplicate");

    let secret = service
        .fetch_secret(&token, "text", "note1")
        .expect("fetch");
    assert_eq!(
        secret,
        Secret::Text {
            text: "second".to_string(),
        }
    );
}

#[test]
fn same_name_under_different_types_are_distinct_records() {
    let (service, backend) = setup();
    let token = service
        .register(&credentials("alice", "pw1"))
        .expect("register");

    service
        .save_secret(&token, "text", "shared-name", json!({"text": "a note"}))
        .expect("save text");
    service
        .save_secret(
            &token,
            "login-password",
            "shared-name",
            json!({"login": "a", "password": "b"}),
        )
        .expect("save login-password");

    assert_eq!(backend.record_count(), 2);

    let text = service
        .fetch_secret(&token, "text", "shared-name")
        .expect("fetch text");
    assert_eq!(text.kind(), SecretKind::Text);
}
