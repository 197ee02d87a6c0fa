//! Configuration types for the Roster client.

use std::time::Duration;

/// Collection endpoint used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3001/users";

/// Configuration for connecting to a users collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Collection URL (e.g., "http://localhost:3001/users")
    pub base_url: String,
    /// Per-request timeout; `None` keeps the transport default
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    /// Create a config for the given collection URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: None,
        }
    }

    /// Set a per-request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
