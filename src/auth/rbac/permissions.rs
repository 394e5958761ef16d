//! Permission checking methods

use crate::utils::error::{AuthzError, Result};
use tracing::trace;

use super::helpers::RbacHelpers;
use super::system::RbacSystem;
use super::types::{Action, PermissionCheck, Resource, Role, Subject};

impl PermissionCheck {
    pub(super) fn granted(role: Role) -> Self {
        Self {
            granted: true,
            granted_by: Some(role),
            denial_reason: None,
        }
    }

    pub(super) fn denied(reason: String) -> Self {
        Self {
            granted: false,
            granted_by: None,
            denial_reason: Some(reason),
        }
    }
}

impl RbacSystem {
    /// Whether `subject` may perform `action` on `resource`
    ///
    /// Returns `Ok(false)` when no rule grants the action. Errors only when
    /// the matching rules need a resource attribute that is missing.
    pub fn can<R: Resource + ?Sized>(
        &self,
        subject: &Subject,
        action: Action,
        resource: &R,
    ) -> Result<bool> {
        Ok(self
            .check_permission_detailed(subject, action, resource)?
            .granted)
    }

    /// Same as [`RbacSystem::can`] with the action given by name
    pub fn can_named<R: Resource + ?Sized>(
        &self,
        subject: &Subject,
        action: &str,
        resource: &R,
    ) -> Result<bool> {
        let action = action.parse::<Action>()?;
        self.can(subject, action, resource)
    }

    /// Detailed permission check
    ///
    /// Rows are visited lowest role first and the first one whose scope
    /// admits the subject decides. A scoped row that can't be evaluated for
    /// lack of a resource attribute only fails the check if no later row
    /// grants the action.
    pub fn check_permission_detailed<R: Resource + ?Sized>(
        &self,
        subject: &Subject,
        action: Action,
        resource: &R,
    ) -> Result<PermissionCheck> {
        let role = subject.role();
        let class = resource.class();

        if subject.is_anonymous() && action != Action::Read {
            trace!(%subject, %action, class, "permission denied");
            return Ok(PermissionCheck::denied(format!(
                "Anonymous subjects may only read '{}'",
                class
            )));
        }

        let mut unresolved: Option<AuthzError> = None;

        for grant in self.grants_for(role) {
            if !grant.applies_to(action, class) {
                continue;
            }

            match self.scope_allows(grant, subject, action, resource) {
                Ok(true) => {
                    trace!(%subject, %action, class, granted_by = %grant.role, "permission granted");
                    return Ok(PermissionCheck::granted(grant.role));
                }
                Ok(false) => {}
                Err(e) if unresolved.is_none() => unresolved = Some(e),
                Err(_) => {}
            }
        }

        if let Some(e) = unresolved {
            trace!(%subject, %action, class, "permission check failed: {}", e);
            return Err(e);
        }

        trace!(%subject, %action, class, "permission denied");
        Ok(PermissionCheck::denied(format!(
            "No grant allows {} to {} '{}'",
            role, action, class
        )))
    }

    /// Check if subject is admin
    pub fn is_admin(&self, subject: &Subject) -> bool {
        subject.role() == Role::Admin
    }
}
