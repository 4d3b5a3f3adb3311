//! End-to-end tests for the Churnboard auth flow.
//!
//! These tests verify the full path: signup → file storage → login, against
//! a real file on disk.

use churnboard_core::storage::{AccountStore, JsonAccountStore};
use churnboard_core::{AuthService, Error, PasswordAuthService, PasswordDigest, SignUpOutcome};
use std::sync::Arc;
use tempfile::TempDir;

fn service_at(path: &std::path::Path) -> PasswordAuthService {
    PasswordAuthService::new(Arc::new(JsonAccountStore::new(path)))
}

/// Signup against empty storage creates the file with one hashed account.
#[tokio::test]
async fn test_signup_creates_account_on_disk() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("users.json");
    let auth = service_at(&path);

    let outcome = auth.sign_up("bob", "hunter2").await.unwrap();
    assert_eq!(outcome, SignUpOutcome::Created);

    // The file holds exactly the expected wire format
    let contents = std::fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&contents).unwrap();
    let users = value["users"].as_array().unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0]["username"], "bob");
    assert_eq!(
        users[0]["password"],
        serde_json::Value::String(PasswordDigest::from_password("hunter2").to_hex())
    );
}

/// A second signup with the same username is rejected and storage is unchanged.
#[tokio::test]
async fn test_duplicate_signup_leaves_storage_unchanged() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("users.json");
    let auth = service_at(&path);

    auth.sign_up("bob", "hunter2").await.unwrap();
    let before = std::fs::read_to_string(&path).unwrap();

    let outcome = auth.sign_up("bob", "other").await.unwrap();
    assert_eq!(outcome, SignUpOutcome::AlreadyExists);

    let after = std::fs::read_to_string(&path).unwrap();
    assert_eq!(before, after);
}

/// Login matches on username and digest, and nothing else.
#[tokio::test]
async fn test_login_decisions() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("users.json");
    let auth = service_at(&path);

    auth.sign_up("bob", "hunter2").await.unwrap();

    assert!(auth.log_in("bob", "hunter2").await.unwrap());
    assert!(!auth.log_in("bob", "wrong").await.unwrap());
    assert!(!auth.log_in("carol", "anything").await.unwrap());
}

/// A corrupt accounts file surfaces as an error instead of an empty roster.
#[tokio::test]
async fn test_corrupt_storage_is_surfaced() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("users.json");
    std::fs::write(&path, "definitely not json").unwrap();

    let auth = service_at(&path);

    assert!(matches!(
        auth.sign_up("bob", "hunter2").await.unwrap_err(),
        Error::StorageRead(_)
    ));
    assert!(matches!(
        auth.log_in("bob", "hunter2").await.unwrap_err(),
        Error::StorageRead(_)
    ));

    // The corrupt file was not clobbered by the failed signup
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "definitely not json");
}

/// Load-then-save of an untouched roster preserves the stored pairs.
#[tokio::test]
async fn test_load_save_roundtrip() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("users.json");
    let store = JsonAccountStore::new(&path);
    let auth = PasswordAuthService::new(Arc::new(JsonAccountStore::new(&path)));

    auth.sign_up("bob", "hunter2").await.unwrap();
    auth.sign_up("alice", "secret").await.unwrap();

    let roster = store.load().await.unwrap();
    store.save(&roster).await.unwrap();

    let reloaded = store.load().await.unwrap();
    assert_eq!(reloaded, roster);
}

/// Accounts persist across a reopen of the storage path.
#[tokio::test]
async fn test_accounts_persist_across_reopen() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("users.json");

    {
        let auth = service_at(&path);
        auth.sign_up("bob", "hunter2").await.unwrap();
    }

    let auth = service_at(&path);
    assert!(auth.log_in("bob", "hunter2").await.unwrap());
    assert_eq!(
        auth.sign_up("bob", "hunter2").await.unwrap(),
        SignUpOutcome::AlreadyExists
    );
}
