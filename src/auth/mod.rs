//! Authorization
//!
//! Authentication is the caller's job: it resolves a [`rbac::Subject`] and
//! hands it to the evaluator here.

pub mod rbac;

pub use rbac::{RbacSystem, Subject};
