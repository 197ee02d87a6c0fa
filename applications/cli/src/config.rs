/// CLI configuration
use crate::error::{CliError, Result};
use roster_client::{ClientConfig, DEFAULT_BASE_URL};
use roster_state::ControllerOptions;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Config file picked up from the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "roster.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RosterConfig {
    #[serde(default = "default_api")]
    pub api: ApiSettings,

    #[serde(default = "default_ui")]
    pub ui: UiSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ApiSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout; unset keeps the transport default
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Show a status message when a remote call fails
    #[serde(default)]
    pub surface_errors: bool,
}

impl RosterConfig {
    /// Load configuration from file and environment
    ///
    /// `path` wins over `roster.toml` in the working directory. Environment
    /// variables use the `ROSTER_` prefix and `__` between section and key,
    /// e.g. `ROSTER_API__BASE_URL`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                if !path.exists() {
                    return Err(CliError::Config(format!(
                        "config file not found: {}",
                        path.display()
                    )));
                }
                settings = settings.add_source(config::File::from(path.to_path_buf()));
            }
            None => {
                let config_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if config_path.exists() {
                    settings = settings.add_source(config::File::from(config_path));
                }
            }
        }

        settings = settings.add_source(
            config::Environment::with_prefix("ROSTER")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = settings.build()?;
        Ok(config.try_deserialize()?)
    }

    /// Apply the `--base-url` flag on top of file and environment values
    pub fn override_base_url(&mut self, base_url: Option<String>) {
        if let Some(base_url) = base_url {
            self.api.base_url = base_url;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.api.base_url.trim().is_empty() {
            return Err(CliError::Config(
                "API base URL is required (set ROSTER_API__BASE_URL)".to_string(),
            ));
        }

        if self.api.timeout_secs == Some(0) {
            return Err(CliError::Config(
                "API timeout must be at least one second".to_string(),
            ));
        }

        Ok(())
    }

    /// Client settings derived from the `[api]` section
    pub fn client_config(&self) -> ClientConfig {
        let config = ClientConfig::new(self.api.base_url.clone());
        match self.api.timeout_secs {
            Some(secs) => config.with_timeout(Duration::from_secs(secs)),
            None => config,
        }
    }

    /// Controller switches derived from the `[ui]` section
    pub fn controller_options(&self) -> ControllerOptions {
        ControllerOptions {
            surface_remote_errors: self.ui.surface_errors,
        }
    }
}

// Default values
fn default_api() -> ApiSettings {
    ApiSettings {
        base_url: default_base_url(),
        timeout_secs: None,
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_ui() -> UiSettings {
    UiSettings {
        surface_errors: false,
    }
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            api: default_api(),
            ui: default_ui(),
        }
    }
}
