//! Utility modules
//!
//! - **error**: error type and helpers
//! - **logging**: tracing subscriber setup

pub mod error; // Error handling
pub mod logging; // Logging

pub use error::{AuthzError, Result};
pub use logging::init_logging;
