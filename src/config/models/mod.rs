//! Configuration data models

pub mod logging;
pub mod policy;

pub use logging::*;
pub use policy::*;

/// Default log level
pub fn default_log_level() -> String {
    "info".to_string()
}
