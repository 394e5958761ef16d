//! Configuration management
//!
//! This module handles loading, validation, and merging of the policy and
//! logging configuration.

pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::utils::error::{AuthzError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// Environment variable selecting the moderator delete policy
pub const ENV_MODERATOR_DELETE: &str = "ROLEGATE_MODERATOR_DELETE";
/// Environment variable for the default log level
pub const ENV_LOG_LEVEL: &str = "ROLEGATE_LOG_LEVEL";
/// Environment variable enabling JSON log output
pub const ENV_LOG_JSON: &str = "ROLEGATE_LOG_JSON";

/// Main configuration struct
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Rule table policy
    #[serde(default)]
    pub policy: PolicyConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path).await?;
        let config = Self::from_yaml_str(&content)?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Parse and validate a YAML document
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(content)?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from a variable lookup, defaults for unset keys
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(policy) = lookup(ENV_MODERATOR_DELETE) {
            config.policy.moderator_delete = policy.parse()?;
        }
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            config.logging.level = level;
        }
        if let Some(json) = lookup(ENV_LOG_JSON) {
            config.logging.json = matches!(json.to_lowercase().as_str(), "1" | "true" | "yes");
        }

        config.validate()?;
        Ok(config)
    }

    /// Get policy configuration
    pub fn policy(&self) -> &PolicyConfig {
        &self.policy
    }

    /// Get logging configuration
    pub fn logging(&self) -> &LoggingConfig {
        &self.logging
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.policy
            .validate()
            .map_err(|e| AuthzError::validation(format!("Policy config error: {}", e)))?;

        self.logging
            .validate()
            .map_err(|e| AuthzError::validation(format!("Logging config error: {}", e)))?;

        debug!("Configuration validation completed");
        Ok(())
    }

    /// Merge with another configuration
    ///
    /// Fields of `other` that differ from their defaults take precedence.
    /// A field left at its default in `other` never resets `self`.
    pub fn merge(mut self, other: Self) -> Self {
        self.policy = self.policy.merge(other.policy);
        self.logging = self.logging.merge(other.logging);
        self
    }

    /// Convert to JSON string
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}
