//! services/tui/src/state.rs
//!
//! Defines the application's shared state: the adapter handles behind their
//! ports, the configuration, and the core state aggregate the UI drives.

use std::sync::Arc;

use tooldex_core::ports::{CredentialVerifier, FavoritesStore};
use tooldex_core::Directory;

use crate::config::Config;

/// Everything the event loop needs, built once at startup.
pub struct AppState {
    pub directory: Directory,
    pub store: Arc<dyn FavoritesStore>,
    pub verifier: Arc<dyn CredentialVerifier>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(
        directory: Directory,
        store: Arc<dyn FavoritesStore>,
        verifier: Arc<dyn CredentialVerifier>,
        config: Arc<Config>,
    ) -> Self {
        Self {
            directory,
            store,
            verifier,
            config,
        }
    }
}
