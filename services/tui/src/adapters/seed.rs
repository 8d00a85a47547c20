//! services/tui/src/adapters/seed.rs
//!
//! The seed-dataset supplier: the concrete implementation of the
//! `SeedSource` port. The catalog is installed from a JSON array of tool
//! records, read from a configured path when one is given and from the
//! dataset embedded in the binary otherwise.

use std::path::PathBuf;

use async_trait::async_trait;

use tooldex_core::domain::Tool;
use tooldex_core::ports::{PortError, PortResult, SeedSource};

/// The dataset shipped with the binary.
const DEFAULT_SEED: &str = include_str!("../seed/default_tools.json");

/// Seed supplier reading from an optional override path.
#[derive(Clone, Default)]
pub struct SeedFile {
    path: Option<PathBuf>,
}

impl SeedFile {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }
}

#[async_trait]
impl SeedSource for SeedFile {
    async fn load(&self) -> PortResult<Vec<Tool>> {
        let raw = match &self.path {
            Some(path) => tokio::fs::read_to_string(path).await.map_err(|e| {
                PortError::Unexpected(format!("Failed to read seed file {}: {e}", path.display()))
            })?,
            None => DEFAULT_SEED.to_string(),
        };
        serde_json::from_str(&raw)
            .map_err(|e| PortError::Unexpected(format!("Malformed seed dataset: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;
    use tooldex_core::domain::Category;

    #[tokio::test]
    async fn embedded_seed_parses_with_unique_ids() {
        let tools = SeedFile::default().load().await.unwrap();
        assert!(!tools.is_empty());

        let ids: BTreeSet<_> = tools.iter().map(|t| t.id).collect();
        assert_eq!(ids.len(), tools.len());
    }

    #[tokio::test]
    async fn embedded_seed_covers_every_category() {
        let tools = SeedFile::default().load().await.unwrap();
        for category in Category::ALL {
            assert!(
                tools.iter().any(|t| t.category == category),
                "no seed entry for {}",
                category.id()
            );
        }
    }

    #[tokio::test]
    async fn override_path_takes_precedence() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("seed.json");
        tokio::fs::write(&path, "[]").await.unwrap();

        let tools = SeedFile::new(Some(path)).load().await.unwrap();
        assert!(tools.is_empty());
    }

    #[tokio::test]
    async fn missing_override_path_is_reported() {
        let result = SeedFile::new(Some(PathBuf::from("/nonexistent/seed.json")))
            .load()
            .await;
        assert!(matches!(result, Err(PortError::Unexpected(_))));
    }
}
