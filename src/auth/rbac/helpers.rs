//! Helper methods for RBAC operations

use crate::utils::error::{AuthzError, Result};

use super::system::RbacSystem;
use super::types::{
    Action, ClassMatcher, Grant, MemberRole, Resource, ResourceRef, Role, Scope, Subject,
    SubjectId,
};

pub(super) trait RbacHelpers {
    /// Decide whether a grant's scope admits the subject on the resource
    fn scope_allows<R: Resource + ?Sized>(
        &self,
        grant: &Grant,
        subject: &Subject,
        action: Action,
        resource: &R,
    ) -> Result<bool>;
}

impl RbacHelpers for RbacSystem {
    fn scope_allows<R: Resource + ?Sized>(
        &self,
        grant: &Grant,
        subject: &Subject,
        action: Action,
        resource: &R,
    ) -> Result<bool> {
        let ceiling = match grant.scope {
            Scope::Unconditional => return Ok(true),
            Scope::Owner => None,
            Scope::OwnedOrOwnerBelow(role) => Some(role),
        };

        // Ownership can't hold for a subject without an identity.
        let Some(subject_id) = subject.id() else {
            return Ok(false);
        };

        let owner_id = resource
            .owner_id()
            .ok_or_else(|| missing_attribute("owner_id", action, resource))?;
        if owner_id == subject_id {
            return Ok(true);
        }

        match ceiling {
            None => Ok(false),
            Some(ceiling) => {
                let owner_role = resource
                    .owner_role()
                    .ok_or_else(|| missing_attribute("owner_role", action, resource))?;
                Ok(Role::from(owner_role) < ceiling)
            }
        }
    }
}

fn missing_attribute<R: Resource + ?Sized>(
    attribute: &str,
    action: Action,
    resource: &R,
) -> AuthzError {
    AuthzError::invalid_request(format!(
        "{} on '{}' requires the resource to expose {}",
        action,
        resource.class(),
        attribute
    ))
}

impl RbacSystem {
    /// Effective grant set of a role: every row for the role and the roles
    /// below it, lowest first
    pub fn grants_for(&self, role: Role) -> Vec<&Grant> {
        self.grants.iter().filter(|grant| grant.role <= role).collect()
    }

    /// Check that a higher role never loses a decision a lower role has
    ///
    /// Grant sets are nested by construction: rows are sorted by role and
    /// [`grants_for`](Self::grants_for) keeps every row at or below the role.
    /// Scopes are what could still make decisions diverge, so this runs
    /// every action against representative resources of each class the
    /// table names, plus one class it doesn't, walking the ladder from
    /// anonymous to admin. An evaluation error counts as not granted.
    pub fn is_monotonic(&self) -> bool {
        let mut classes: Vec<&str> = self
            .grants
            .iter()
            .filter_map(|grant| match &grant.class {
                ClassMatcher::Named(class) => Some(class.as_str()),
                ClassMatcher::Any => None,
            })
            .collect();
        classes.sort_unstable();
        classes.dedup();
        classes.push("");

        // Every identified rung shares one id so "own" means the same resource.
        let me = SubjectId(0);
        let ladder = [
            Subject::Anonymous,
            Subject::identified(me, MemberRole::Normal),
            Subject::identified(me, MemberRole::Moderator),
            Subject::identified(me, MemberRole::Admin),
        ];

        classes.into_iter().all(|class| {
            representative_resources(class, me).iter().all(|resource| {
                Action::ALL.into_iter().all(|action| {
                    let decisions: Vec<bool> = ladder
                        .iter()
                        .map(|subject| self.can(subject, action, resource).unwrap_or(false))
                        .collect();
                    decisions.windows(2).all(|pair| !pair[0] || pair[1])
                })
            })
        })
    }
}

/// Unowned, owned by `me`, and owned by someone else with each known and
/// unknown owner role
fn representative_resources(class: &str, me: SubjectId) -> Vec<ResourceRef> {
    let other = SubjectId(me.0 + 1);
    let mut resources = vec![
        ResourceRef::new(class),
        ResourceRef::new(class).with_owner(me),
        ResourceRef::new(class).with_owner(other),
    ];
    resources.extend(
        [MemberRole::Normal, MemberRole::Moderator, MemberRole::Admin]
            .into_iter()
            .map(|role| ResourceRef::new(class).with_owner(other).with_owner_role(role)),
    );
    resources
}
