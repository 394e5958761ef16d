//! Role-Based Access Control (RBAC) system
//!
//! Cascading role hierarchy `guest < normal < moderator < admin` evaluated
//! against a declarative rule table. A role's effective grants are every
//! table row for that role and the roles below it, so a higher role can
//! only widen what a lower one was allowed.

mod grants;
mod helpers;
mod permissions;
mod roles;
mod system;
mod types;

use once_cell::sync::Lazy;

use crate::config::PolicyConfig;
use crate::utils::error::Result;

// Re-export public types and structs
pub use system::RbacSystem;
pub use types::{
    Action, ActionMatcher, ClassMatcher, Grant, MemberRole, PermissionCheck, Resource,
    ResourceRef, Role, Scope, Subject, SubjectId,
};

static DEFAULT_SYSTEM: Lazy<RbacSystem> = Lazy::new(|| {
    let config = PolicyConfig::default();
    let grants = system::default_grants(&config);
    RbacSystem::from_parts(config, grants)
});

/// Process-wide evaluator built from the default policy
pub fn default_system() -> &'static RbacSystem {
    &DEFAULT_SYSTEM
}

/// Evaluate against the default policy. See [`RbacSystem::can`].
pub fn can<R: Resource + ?Sized>(subject: &Subject, action: Action, resource: &R) -> Result<bool> {
    default_system().can(subject, action, resource)
}
