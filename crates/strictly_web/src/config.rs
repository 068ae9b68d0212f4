//! Front-end configuration, bundled into the binary as TOML.

use crate::error::ConfigError;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

const BUNDLED: &str = include_str!("../strictly_web.toml");

/// Settings for mounting and logging the game page.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WebConfig {
    /// Id of the DOM element the root component is rendered into.
    mount_id: String,

    /// `EnvFilter` directives for the console logger.
    log_filter: String,

    /// Heading shown above the board.
    title: String,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            mount_id: "root".to_string(),
            log_filter: "info".to_string(),
            title: "Tic Tac Toe".to_string(),
        }
    }
}

impl WebConfig {
    /// Loads the configuration compiled in from `strictly_web.toml`.
    #[instrument]
    pub fn bundled() -> Result<Self, ConfigError> {
        Self::from_toml_str(BUNDLED)
    }

    /// Parses configuration from TOML; missing keys take their defaults.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        if config.mount_id.trim().is_empty() {
            return Err(ConfigError::new("mount_id must not be empty"));
        }

        debug!(mount_id = %config.mount_id, log_filter = %config.log_filter, "Config loaded");
        Ok(config)
    }
}
