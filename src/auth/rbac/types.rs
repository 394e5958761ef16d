//! RBAC type definitions

use serde::{Deserialize, Serialize};

/// Privilege tier, totally ordered `Guest < Normal < Moderator < Admin`
///
/// `Guest` is what an unauthenticated subject holds. It is derived from
/// [`Subject::Anonymous`] and never stored; see [`MemberRole`] for the
/// storable subset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Guest,
    Normal,
    Moderator,
    Admin,
}

/// Role held by an identified subject
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberRole {
    Normal,
    Moderator,
    Admin,
}

/// Opaque subject identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubjectId(pub u64);

/// The party asking for permission, resolved by the caller from its
/// authentication state before evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Subject {
    /// No authenticated identity. Evaluated as [`Role::Guest`].
    Anonymous,
    /// An authenticated identity with a stored role
    Identified { id: SubjectId, role: MemberRole },
}

/// Requested operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Read,
    Create,
    Update,
    Delete,
    /// Administrative operations. Only matched by grants covering every action.
    Manage,
}

/// Anything permissions can be evaluated against
pub trait Resource {
    /// Resource class, e.g. `"post"`
    fn class(&self) -> &str;

    /// Owning subject, if the resource has one
    fn owner_id(&self) -> Option<SubjectId> {
        None
    }

    /// Stored role of the owning subject, if known
    fn owner_role(&self) -> Option<MemberRole> {
        None
    }
}

/// Plain [`Resource`] description for callers that don't implement the
/// trait on their own models
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceRef {
    /// Resource class
    pub class: String,
    /// Resource identifier
    #[serde(default)]
    pub id: Option<String>,
    /// Owner identifier
    #[serde(default)]
    pub owner_id: Option<SubjectId>,
    /// Owner role
    #[serde(default)]
    pub owner_role: Option<MemberRole>,
}

/// Which actions a grant covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionMatcher {
    Only(Action),
    /// Every action, including [`Action::Manage`]
    Any,
}

/// Which resource classes a grant covers
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ClassMatcher {
    Any,
    Named(String),
}

/// Condition narrowing a grant to resources related to the subject
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scope {
    Unconditional,
    /// `resource.owner_id == subject.id`
    Owner,
    /// Owned by the subject, or owned by someone ranked strictly below the
    /// given role. Needs the resource to expose its owner's role.
    OwnedOrOwnerBelow(Role),
}

/// One row of the rule table
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grant {
    /// Lowest role the row applies to
    pub role: Role,
    /// Covered actions
    pub action: ActionMatcher,
    /// Covered resource classes
    pub class: ClassMatcher,
    /// Scope predicate
    pub scope: Scope,
    /// Human readable description
    pub description: String,
}

/// Permission check result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermissionCheck {
    /// Whether permission is granted
    pub granted: bool,
    /// Role of the grant that allowed the action
    pub granted_by: Option<Role>,
    /// Reason for denial (if not granted)
    pub denial_reason: Option<String>,
}
