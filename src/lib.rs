//! # rolegate
//!
//! Cascading role-based permission evaluator.
//!
//! Subjects are either anonymous (evaluated as `guest`) or identified with a
//! stored role of `normal`, `moderator` or `admin`. Permissions come from a
//! declarative rule table ordered by role; each role inherits every grant of
//! the roles below it.
//!
//! ## Quick Start
//!
//! ```rust
//! use rolegate::{Action, MemberRole, RbacSystem, ResourceRef, Subject, SubjectId};
//! use rolegate::config::PolicyConfig;
//!
//! fn main() -> rolegate::Result<()> {
//!     let rbac = RbacSystem::new(&PolicyConfig::default())?;
//!
//!     let author = Subject::identified(SubjectId(5), MemberRole::Normal);
//!     let post = ResourceRef::new("post").with_id("10").with_owner(SubjectId(5));
//!
//!     assert!(rbac.can(&author, Action::Update, &post)?);
//!     assert!(!rbac.can(&Subject::Anonymous, Action::Update, &post)?);
//!     assert!(rbac.can(&Subject::Anonymous, Action::Read, &post)?);
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]

pub mod auth;
pub mod config;
pub mod utils;

// Re-export main types
pub use auth::rbac::{
    Action, ActionMatcher, ClassMatcher, Grant, MemberRole, PermissionCheck, RbacSystem,
    Resource, ResourceRef, Role, Scope, Subject, SubjectId, can, default_system,
};
pub use config::Config;
pub use utils::error::{AuthzError, Result};
