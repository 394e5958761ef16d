//! Error handling for rolegate
//!
//! This module defines the error type shared by the evaluator and the
//! configuration layer. A denied permission is never an error: it is an
//! `Ok(false)` from the evaluator.

mod helpers;
mod types;

pub use types::{AuthzError, Result};
