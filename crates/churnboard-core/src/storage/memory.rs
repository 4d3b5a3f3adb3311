//! In-memory storage backend (for testing).

use crate::storage::traits::AccountStore;
use crate::{Result, Roster};
use async_trait::async_trait;
use std::sync::Mutex;

/// Account storage held entirely in memory.
///
/// Mirrors the file store's whole-roster load/save contract without touching
/// disk. Intended for tests and ephemeral deployments.
#[derive(Default)]
pub struct MemoryAccountStore {
    roster: Mutex<Roster>,
}

impl MemoryAccountStore {
    /// Create an empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AccountStore for MemoryAccountStore {
    async fn load(&self) -> Result<Roster> {
        Ok(self.roster.lock().unwrap().clone())
    }

    async fn save(&self, roster: &Roster) -> Result<()> {
        *self.roster.lock().unwrap() = roster.clone();
        Ok(())
    }
}
