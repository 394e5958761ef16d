//! Role and subject methods

use std::fmt;
use std::str::FromStr;

use crate::utils::error::{AuthzError, Result};

use super::types::{MemberRole, Role, Subject, SubjectId};

impl Role {
    /// Every role, lowest first
    pub const ALL: [Role; 4] = [Role::Guest, Role::Normal, Role::Moderator, Role::Admin];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Guest => "guest",
            Role::Normal => "normal",
            Role::Moderator => "moderator",
            Role::Admin => "admin",
        }
    }

    /// Roles ranked at or below this one, lowest first
    pub fn cascade(self) -> impl Iterator<Item = Role> {
        Self::ALL.into_iter().take_while(move |r| *r <= self)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = AuthzError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "guest" => Ok(Role::Guest),
            "normal" => Ok(Role::Normal),
            "moderator" => Ok(Role::Moderator),
            "admin" => Ok(Role::Admin),
            other => Err(AuthzError::invalid_request(format!("Unknown role: {}", other))),
        }
    }
}

impl MemberRole {
    pub fn as_str(&self) -> &'static str {
        Role::from(*self).as_str()
    }
}

impl fmt::Display for MemberRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<MemberRole> for Role {
    fn from(role: MemberRole) -> Self {
        match role {
            MemberRole::Normal => Role::Normal,
            MemberRole::Moderator => Role::Moderator,
            MemberRole::Admin => Role::Admin,
        }
    }
}

impl TryFrom<Role> for MemberRole {
    type Error = AuthzError;

    fn try_from(role: Role) -> Result<Self> {
        match role {
            Role::Guest => Err(AuthzError::invalid_request(
                "guest is implied by an anonymous subject and cannot be stored",
            )),
            Role::Normal => Ok(MemberRole::Normal),
            Role::Moderator => Ok(MemberRole::Moderator),
            Role::Admin => Ok(MemberRole::Admin),
        }
    }
}

impl FromStr for MemberRole {
    type Err = AuthzError;

    fn from_str(s: &str) -> Result<Self> {
        s.parse::<Role>()?.try_into()
    }
}

impl From<u64> for SubjectId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for SubjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Subject {
    pub fn identified(id: SubjectId, role: MemberRole) -> Self {
        Subject::Identified { id, role }
    }

    /// Role the subject is evaluated with
    pub fn role(&self) -> Role {
        match self {
            Subject::Anonymous => Role::Guest,
            Subject::Identified { role, .. } => (*role).into(),
        }
    }

    pub fn id(&self) -> Option<SubjectId> {
        match self {
            Subject::Anonymous => None,
            Subject::Identified { id, .. } => Some(*id),
        }
    }

    pub fn is_anonymous(&self) -> bool {
        matches!(self, Subject::Anonymous)
    }
}

impl From<Option<(SubjectId, MemberRole)>> for Subject {
    /// Resolve an optional authenticated identity
    fn from(identity: Option<(SubjectId, MemberRole)>) -> Self {
        match identity {
            Some((id, role)) => Subject::Identified { id, role },
            None => Subject::Anonymous,
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Subject::Anonymous => f.write_str("anonymous"),
            Subject::Identified { id, role } => write!(f, "{}#{}", role, id),
        }
    }
}
