//! Configuration management for buildmatch
//!
//! Settings are loaded from environment variables with sensible defaults.
//!
//! # Environment Variables
//!
//! - `BUILDMATCH_LOG_LEVEL`: Logging level - default: "info"
//! - `BUILDMATCH_LOG_JSON`: JSON log output (true|false) - default: "false"
//! - `BUILDMATCH_BUILDPACKS_BUILDER`: Builder image for buildpacks artifacts -
//!   default: "gcr.io/buildpacks/builder:v1"
//!
//! # Example
//!
//! ```no_run
//! use buildmatch::InitConfig;
//!
//! let config = InitConfig::default();
//! config.validate().expect("Invalid configuration");
//! ```

use crate::reference::ImageReference;
use crate::util::LoggingConfig;
use crate::util::logging::parse_level;
use std::collections::HashMap;
use std::env;
use thiserror::Error;
use tracing::Level;

/// Builder image used for buildpacks artifacts unless configured otherwise
pub const DEFAULT_BUILDPACKS_BUILDER: &str = "gcr.io/buildpacks/builder:v1";

const DEFAULT_LOG_LEVEL: &str = "info";

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration validation failed
    #[error("Configuration validation failed: {0}")]
    ValidationFailed(String),

    /// Failed to parse configuration value
    #[error("Failed to parse {field}: {error}")]
    ParseError { field: String, error: String },
}

/// Settings for an init run
#[derive(Debug, Clone)]
pub struct InitConfig {
    /// Logging level (trace, debug, info, warn, error)
    pub log_level: String,

    /// Emit logs as JSON
    pub log_json: bool,

    /// Builder image written into buildpacks artifacts
    pub buildpacks_builder: String,
}

impl Default for InitConfig {
    /// Loads BUILDMATCH_* environment variables, falling back to defaults
    fn default() -> Self {
        let log_level = env::var("BUILDMATCH_LOG_LEVEL")
            .unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string())
            .to_lowercase();

        let log_json = env::var("BUILDMATCH_LOG_JSON")
            .ok()
            .and_then(|v| v.parse::<bool>().ok())
            .unwrap_or(false);

        let buildpacks_builder = env::var("BUILDMATCH_BUILDPACKS_BUILDER")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BUILDPACKS_BUILDER.to_string());

        Self {
            log_level,
            log_json,
            buildpacks_builder,
        }
    }
}

impl InitConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when the log level is unknown or the buildpacks
    /// builder is not a valid image reference.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if parse_level(&self.log_level).is_none() {
            return Err(ConfigError::ValidationFailed(format!(
                "Invalid log level: {}. Valid options: trace, debug, info, warn, error",
                self.log_level
            )));
        }

        ImageReference::parse(&self.buildpacks_builder).map_err(|e| ConfigError::ParseError {
            field: "buildpacks_builder".to_string(),
            error: e.to_string(),
        })?;

        Ok(())
    }

    /// Logging settings derived from this configuration
    pub fn logging(&self) -> LoggingConfig {
        LoggingConfig {
            level: parse_level(&self.log_level).unwrap_or(Level::INFO),
            use_json: self.log_json,
            ..Default::default()
        }
    }

    /// Converts configuration to a display map
    pub fn to_display_map(&self) -> HashMap<String, String> {
        let mut map = HashMap::new();
        map.insert("log_level".to_string(), self.log_level.clone());
        map.insert("log_json".to_string(), self.log_json.to_string());
        map.insert(
            "buildpacks_builder".to_string(),
            self.buildpacks_builder.clone(),
        );
        map
    }
}
