//! services/tui/src/adapters/favorites.rs
//!
//! This module contains the favorites-store adapter, the concrete
//! implementation of the `FavoritesStore` port from the `core` crate. It
//! persists one JSON document per user in the configured data directory.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use std::collections::BTreeSet;
use tooldex_core::domain::ToolId;
use tooldex_core::ports::{FavoritesStore, PortError, PortResult};

/// A file-backed adapter that implements the `FavoritesStore` port.
///
/// Keys follow the `favorites_<email>` convention; each key maps to a JSON
/// array of tool identifiers, so save-then-load is lossless.
#[derive(Clone)]
pub struct JsonFavoritesStore {
    dir: PathBuf,
}

impl JsonFavoritesStore {
    /// Creates a new `JsonFavoritesStore` rooted at `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, email: &str) -> PathBuf {
        // '/' is the only character that would escape the directory; emails
        // otherwise map onto filenames as-is, mirroring the storage key.
        let key = email.replace('/', "_");
        self.dir.join(format!("favorites_{key}.json"))
    }
}

#[async_trait]
impl FavoritesStore for JsonFavoritesStore {
    async fn load(&self, email: &str) -> PortResult<Option<BTreeSet<ToolId>>> {
        let path = self.path_for(email);
        let raw = match tokio::fs::read_to_string(&path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(read_error(&path, e)),
        };
        let favorites = serde_json::from_str(&raw)
            .map_err(|e| PortError::Unexpected(format!("Malformed favorites file {}: {e}", path.display())))?;
        Ok(Some(favorites))
    }

    async fn save(&self, email: &str, favorites: &BTreeSet<ToolId>) -> PortResult<()> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| PortError::Unexpected(format!("Failed to create {}: {e}", self.dir.display())))?;
        let path = self.path_for(email);
        let json = serde_json::to_string_pretty(favorites)
            .map_err(|e| PortError::Unexpected(format!("Failed to serialize favorites: {e}")))?;
        tokio::fs::write(&path, json)
            .await
            .map_err(|e| PortError::Unexpected(format!("Failed to write {}: {e}", path.display())))?;
        Ok(())
    }
}

fn read_error(path: &Path, e: std::io::Error) -> PortError {
    PortError::Unexpected(format!("Failed to read {}: {e}", path.display()))
}
