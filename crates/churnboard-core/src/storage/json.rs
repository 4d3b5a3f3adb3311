//! JSON file storage backend implementation.

use crate::error::{Error, Result};
use crate::storage::traits::AccountStore;
use crate::Roster;
use async_trait::async_trait;
use std::fs;
use std::path::{Path, PathBuf};

/// Account storage backed by a single JSON file.
///
/// On-disk format: `{"users": [{"username": ..., "password": <hex>}, ...]}`.
/// Saves go through a temp file in the same directory followed by a rename,
/// so a failed write leaves the prior content intact.
pub struct JsonAccountStore {
    path: PathBuf,
}

impl JsonAccountStore {
    /// Create a store over the given file path. The file is not created
    /// until the first save.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl AccountStore for JsonAccountStore {
    async fn load(&self) -> Result<Roster> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("no account file at {}, starting empty", self.path.display());
                return Ok(Roster::default());
            }
            Err(e) => return Err(Error::Io(e)),
        };

        serde_json::from_str(&contents).map_err(|e| {
            Error::StorageRead(format!("{}: {}", self.path.display(), e))
        })
    }

    async fn save(&self, roster: &Roster) -> Result<()> {
        let contents = serde_json::to_string(roster)
            .map_err(|e| Error::StorageWrite(e.to_string()))?;

        // Temp file in the same directory keeps the rename on one filesystem.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, contents)
            .map_err(|e| Error::StorageWrite(format!("{}: {}", tmp.display(), e)))?;
        fs::rename(&tmp, &self.path)
            .map_err(|e| Error::StorageWrite(format!("{}: {}", self.path.display(), e)))?;

        tracing::debug!("saved {} account(s) to {}", roster.len(), self.path.display());
        Ok(())
    }
}
