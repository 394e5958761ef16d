//! Actions, resources and rule table rows

use std::fmt;
use std::str::FromStr;

use crate::utils::error::{AuthzError, Result};

use super::types::{
    Action, ActionMatcher, ClassMatcher, Grant, MemberRole, Resource, ResourceRef, Role, Scope,
    SubjectId,
};

impl Action {
    pub const ALL: [Action; 5] = [
        Action::Read,
        Action::Create,
        Action::Update,
        Action::Delete,
        Action::Manage,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Read => "read",
            Action::Create => "create",
            Action::Update => "update",
            Action::Delete => "delete",
            Action::Manage => "manage",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = AuthzError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "read" => Ok(Action::Read),
            "create" => Ok(Action::Create),
            "update" => Ok(Action::Update),
            "delete" => Ok(Action::Delete),
            "manage" => Ok(Action::Manage),
            other => Err(AuthzError::invalid_request(format!("Unknown action: {}", other))),
        }
    }
}

impl ResourceRef {
    pub fn new(class: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            id: None,
            owner_id: None,
            owner_role: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_owner(mut self, owner_id: SubjectId) -> Self {
        self.owner_id = Some(owner_id);
        self
    }

    pub fn with_owner_role(mut self, role: MemberRole) -> Self {
        self.owner_role = Some(role);
        self
    }
}

impl Resource for ResourceRef {
    fn class(&self) -> &str {
        &self.class
    }

    fn owner_id(&self) -> Option<SubjectId> {
        self.owner_id
    }

    fn owner_role(&self) -> Option<MemberRole> {
        self.owner_role
    }
}

impl ActionMatcher {
    pub fn matches(&self, action: Action) -> bool {
        match self {
            ActionMatcher::Only(expected) => *expected == action,
            ActionMatcher::Any => true,
        }
    }
}

impl ClassMatcher {
    pub fn matches(&self, class: &str) -> bool {
        match self {
            ClassMatcher::Any => true,
            ClassMatcher::Named(name) => name == class,
        }
    }

    pub fn matches_every_class(&self) -> bool {
        matches!(self, ClassMatcher::Any)
    }
}

impl Grant {
    /// Grant covering every resource class
    pub fn new(role: Role, action: ActionMatcher, scope: Scope) -> Self {
        Self {
            role,
            action,
            class: ClassMatcher::Any,
            scope,
            description: String::new(),
        }
    }

    /// Restrict the grant to one resource class
    pub fn for_class(mut self, class: impl Into<String>) -> Self {
        self.class = ClassMatcher::Named(class.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Whether the row covers the action on the class, ignoring scope
    pub fn applies_to(&self, action: Action, class: &str) -> bool {
        self.action.matches(action) && self.class.matches(class)
    }

    pub fn is_unconditional(&self) -> bool {
        self.scope == Scope::Unconditional
    }
}
