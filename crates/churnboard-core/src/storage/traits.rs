//! Storage trait definitions.

use crate::{Result, Roster};
use async_trait::async_trait;

/// Persistent account storage.
///
/// The roster is loaded whole on every read and rewritten whole on every
/// save; there is no partial update or append path. Callers that perform a
/// load-modify-save sequence must serialize it themselves (see
/// [`crate::PasswordAuthService`]).
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Load the full roster.
    ///
    /// A store that has never been written yields an empty roster. A store
    /// that exists but cannot be parsed is an error, never an empty roster.
    async fn load(&self) -> Result<Roster>;

    /// Replace the stored roster with `roster`.
    async fn save(&self, roster: &Roster) -> Result<()>;
}
