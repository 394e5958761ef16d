//! Policy and logging configuration validators

use super::trait_def::Validate;
use crate::config::models::*;
use tracing::{debug, warn};

impl Validate for PolicyConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating policy configuration");

        if self.moderator_delete == ModeratorDeletePolicy::Any {
            debug!("Moderators may delete resources owned by other moderators and admins");
        }

        Ok(())
    }
}

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        if self.level.trim().is_empty() {
            return Err("Log level cannot be empty".to_string());
        }

        if self.level.parse::<tracing::Level>().is_err() {
            return Err(format!(
                "Invalid log level '{}', expected one of trace, debug, info, warn, error",
                self.level
            ));
        }

        if self.level.eq_ignore_ascii_case("trace") {
            warn!("Trace logging records every permission decision");
        }

        Ok(())
    }
}
