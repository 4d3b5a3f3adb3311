//! Account and roster types.

use crate::digest::PasswordDigest;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// One username/password-digest pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Unique, case-sensitive username
    pub username: String,
    /// Stored credential digest (JSON key `password`)
    #[serde(rename = "password")]
    pub digest: PasswordDigest,
}

impl Account {
    /// Create an account by hashing the given plaintext password.
    pub fn new(username: impl Into<String>, password: &str) -> Self {
        Self {
            username: username.into(),
            digest: PasswordDigest::from_password(password),
        }
    }
}

/// In-memory collection of all known accounts.
///
/// Loaded whole from storage, mutated in memory, and written back whole.
/// Invariant: no two entries share a username.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    /// Accounts in insertion order
    pub users: Vec<Account>,
}

impl Roster {
    /// Exact, case-sensitive lookup by username.
    pub fn find(&self, username: &str) -> Option<&Account> {
        self.users.iter().find(|a| a.username == username)
    }

    /// Append an account, rejecting duplicate usernames.
    pub fn insert(&mut self, account: Account) -> Result<()> {
        if self.find(&account.username).is_some() {
            return Err(Error::DuplicateUsername(account.username));
        }
        self.users.push(account);
        Ok(())
    }

    /// Number of accounts.
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// True when no accounts exist yet.
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
