//! Authorization policy configuration

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::utils::error::{AuthzError, Result};

/// Policy configuration for the rule table
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PolicyConfig {
    /// Which resources a moderator may delete
    #[serde(default)]
    pub moderator_delete: ModeratorDeletePolicy,
}

/// Scope of the moderator delete grant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModeratorDeletePolicy {
    /// Any resource
    #[default]
    Any,
    /// Own resources, and resources whose owner ranks below moderator
    BelowModerator,
}

impl PolicyConfig {
    /// Merge policy configurations
    ///
    /// Only non-default values in `other` override `self`.
    pub fn merge(mut self, other: Self) -> Self {
        if other.moderator_delete != ModeratorDeletePolicy::default() {
            self.moderator_delete = other.moderator_delete;
        }
        self
    }
}

impl FromStr for ModeratorDeletePolicy {
    type Err = AuthzError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "any" => Ok(Self::Any),
            "below_moderator" => Ok(Self::BelowModerator),
            other => Err(AuthzError::config(format!(
                "Unknown moderator delete policy: {}",
                other
            ))),
        }
    }
}
