//! Roster CLI Library
//!
//! Terminal front-end for a remote users collection: configuration loading
//! and plain-text rendering of the controller's state.
//!
//! This library exposes the core components for testing purposes.

pub mod config;
pub mod error;
pub mod exit;
pub mod render;

// Re-export commonly used types for convenience
pub use config::{ApiSettings, RosterConfig, UiSettings};
pub use error::{CliError, Result};
