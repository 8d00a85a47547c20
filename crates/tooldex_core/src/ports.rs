//! crates/tooldex_core/src/ports.rs
//!
//! Defines the service contracts (traits) for the application's core logic.
//! These traits form the boundary of the hexagonal architecture, allowing the core
//! to be independent of specific external implementations like the favorites
//! store or the credential verifier.

use async_trait::async_trait;
use std::collections::BTreeSet;

use crate::domain::{Tool, ToolId, User};

//=========================================================================================
// Generic Port Error and Result Types
//=========================================================================================

/// A generic error type for all port operations.
/// This abstracts away the specific errors from external resources (e.g., the
/// key-value store on disk).
#[derive(Debug, thiserror::Error)]
pub enum PortError {
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Credentials rejected: {0}")]
    Rejected(String),
    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}

/// A convenience type alias for `Result<T, PortError>`.
pub type PortResult<T> = Result<T, PortError>;

//=========================================================================================
// Service Ports (Traits)
//=========================================================================================

/// Key-value persistence for per-user favorite sets, keyed by email.
/// A save followed by a load for the same email must round-trip losslessly.
#[async_trait]
pub trait FavoritesStore: Send + Sync {
    /// Returns the persisted set for `email`, or `None` if the user has
    /// never had favorites saved.
    async fn load(&self, email: &str) -> PortResult<Option<BTreeSet<ToolId>>>;

    /// Persists the full set for `email`, replacing any previous value.
    /// An empty set is a valid value and must be written, not skipped.
    async fn save(&self, email: &str, favorites: &BTreeSet<ToolId>) -> PortResult<()>;
}

/// Credentials as captured by the sign-in or register form. Never stored.
#[derive(Debug, Clone)]
pub struct Credentials {
    /// Display name from the register form; sign-in leaves it unset.
    pub name: Option<String>,
    pub email: String,
    pub password: String,
}

/// Pluggable credential verification. The core never assumes acceptance;
/// the shipped implementation is the demo "accept anything well-formed"
/// verifier, and a real one could be substituted without touching the core.
#[async_trait]
pub trait CredentialVerifier: Send + Sync {
    /// Verifies the credentials and returns the authenticated identity,
    /// or `PortError::Rejected` with a human-readable reason.
    async fn verify(&self, credentials: &Credentials) -> PortResult<User>;
}

/// Supplier of the fixed record list installed into the catalog at startup.
#[async_trait]
pub trait SeedSource: Send + Sync {
    async fn load(&self) -> PortResult<Vec<Tool>>;
}
