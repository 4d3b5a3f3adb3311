//! Authentication service.
//!
//! Orchestrates signup (create-if-absent) and login (verify) over an
//! [`AccountStore`], and exposes the session-gate decision to the shell.

pub mod models;

use crate::digest::PasswordDigest;
use crate::storage::AccountStore;
use crate::{Account, Result};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

pub use models::SignUpOutcome;

/// Signup and login decisions over stored accounts.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Create an account if the username is free.
    ///
    /// Credentials are taken as-is; an empty username or password is hashed
    /// and stored like any other string.
    async fn sign_up(&self, username: &str, password: &str) -> Result<SignUpOutcome>;

    /// True iff an account exists whose username and password digest both
    /// match. Unknown usernames and wrong passwords are the same `false`.
    async fn log_in(&self, username: &str, password: &str) -> Result<bool>;
}

/// Default [`AuthService`] over a shared account store.
pub struct PasswordAuthService {
    store: Arc<dyn AccountStore>,
    // Serializes load-modify-save: every save rewrites the whole file, so
    // overlapping mutations would drop each other's accounts.
    guard: Mutex<()>,
}

impl PasswordAuthService {
    /// Create a service over the given store.
    pub fn new(store: Arc<dyn AccountStore>) -> Self {
        Self {
            store,
            guard: Mutex::new(()),
        }
    }
}

#[async_trait]
impl AuthService for PasswordAuthService {
    async fn sign_up(&self, username: &str, password: &str) -> Result<SignUpOutcome> {
        let _guard = self.guard.lock().await;

        let mut roster = self.store.load().await?;
        if roster.find(username).is_some() {
            tracing::debug!("signup rejected, username taken: {}", username);
            return Ok(SignUpOutcome::AlreadyExists);
        }

        roster.insert(Account::new(username, password))?;
        self.store.save(&roster).await?;

        tracing::info!("account created: {}", username);
        Ok(SignUpOutcome::Created)
    }

    async fn log_in(&self, username: &str, password: &str) -> Result<bool> {
        let _guard = self.guard.lock().await;

        let roster = self.store.load().await?;
        let digest = PasswordDigest::from_password(password);
        Ok(roster
            .find(username)
            .map_or(false, |account| account.digest == digest))
    }
}
