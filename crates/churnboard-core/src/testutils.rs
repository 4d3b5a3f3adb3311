//! Test utilities for Churnboard.
//!
//! Provides reusable test helpers and fixtures.

use crate::storage::MemoryAccountStore;
use crate::{Account, PasswordDigest, PasswordAuthService, Roster};
use std::sync::Arc;

/// Auth service over a fresh in-memory store.
pub fn memory_service() -> PasswordAuthService {
    PasswordAuthService::new(Arc::new(MemoryAccountStore::new()))
}

/// Roster pre-populated with the given username/password pairs.
pub fn roster_of(entries: &[(&str, &str)]) -> Roster {
    let mut roster = Roster::default();
    for (username, password) in entries {
        roster
            .insert(Account::new(*username, password))
            .expect("duplicate username in fixture");
    }
    roster
}

/// Digest helper for assertions against stored hex values.
pub fn digest_hex(password: &str) -> String {
    PasswordDigest::from_password(password).to_hex()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roster_fixture() {
        let roster = roster_of(&[("bob", "hunter2"), ("alice", "secret")]);
        assert_eq!(roster.len(), 2);
        assert_eq!(roster.find("bob").unwrap().digest.to_hex(), digest_hex("hunter2"));
    }
}
