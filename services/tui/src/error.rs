//! services/tui/src/error.rs
//!
//! Defines the primary error type for the entire TUI service.

use crate::config::ConfigError;
use tooldex_core::ports::PortError;

/// The primary error type for the `tui` service.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Represents an error that occurred during configuration loading.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Represents an error that propagated up from one of the core service ports.
    #[error("Service Port Error: {0}")]
    Port(#[from] PortError),

    /// Represents a standard Input/Output error (e.g., setting up the terminal).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
