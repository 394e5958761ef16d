//! RBAC system core functionality

use crate::config::{ModeratorDeletePolicy, PolicyConfig};
use crate::utils::error::{AuthzError, Result};
use tracing::{debug, info, warn};

use super::types::{Action, ActionMatcher, Grant, Role, Scope};

/// Rule table evaluator
///
/// Rows are kept sorted by role, lowest first. The table is fixed at
/// construction and only ever read afterwards, so a single instance can be
/// shared across threads.
#[derive(Debug, Clone)]
pub struct RbacSystem {
    /// Policy configuration
    pub(super) config: PolicyConfig,
    /// Rule table
    pub(super) grants: Vec<Grant>,
}

impl RbacSystem {
    /// Create a new RBAC system with the default rule table
    pub fn new(config: &PolicyConfig) -> Result<Self> {
        info!("Initializing RBAC system");

        let rbac = Self::from_parts(config.clone(), default_grants(config));
        rbac.validate_grants()?;

        info!(
            "RBAC system initialized with {} grants (moderator delete: {:?})",
            rbac.grants.len(),
            config.moderator_delete
        );
        Ok(rbac)
    }

    /// Create an RBAC system from a custom rule table
    pub fn with_grants(config: &PolicyConfig, grants: Vec<Grant>) -> Result<Self> {
        info!("Initializing RBAC system from {} custom grants", grants.len());

        let rbac = Self::from_parts(config.clone(), grants);
        rbac.validate_grants()?;
        Ok(rbac)
    }

    /// Build without validation. Used for the built-in table, which is
    /// known to be well formed.
    pub(super) fn from_parts(config: PolicyConfig, mut grants: Vec<Grant>) -> Self {
        // Stable, so rows of the same role keep their declared order.
        grants.sort_by_key(|grant| grant.role);
        Self { config, grants }
    }

    /// Reject tables that cannot satisfy the evaluation contract
    fn validate_grants(&self) -> Result<()> {
        debug!("Validating {} grants", self.grants.len());

        if self.grants.is_empty() {
            return Err(AuthzError::config("Rule table cannot be empty"));
        }

        let has_read_baseline = self.grants.iter().any(|grant| {
            grant.role == Role::Guest
                && grant.action.matches(Action::Read)
                && grant.class.matches_every_class()
                && grant.is_unconditional()
        });
        if !has_read_baseline {
            return Err(AuthzError::config(
                "Rule table must grant unconditional read on every class to guest",
            ));
        }

        if let Some(grant) = self
            .grants
            .iter()
            .find(|grant| {
                grant.role == Role::Guest && grant.action != ActionMatcher::Only(Action::Read)
            })
        {
            return Err(AuthzError::config(format!(
                "Guest grant '{}' must only cover read",
                grant.description
            )));
        }

        if let Some(grant) = self
            .grants
            .iter()
            .find(|grant| grant.role < Role::Admin && grant.action == ActionMatcher::Any)
        {
            warn!(
                "Grant '{}' gives every action to {}, below admin",
                grant.description, grant.role
            );
        }

        Ok(())
    }

    /// Policy this system was built with
    pub fn config(&self) -> &PolicyConfig {
        &self.config
    }

    /// Full rule table, lowest role first
    pub fn list_grants(&self) -> &[Grant] {
        &self.grants
    }
}

/// Built-in cascade: guest reads, normal creates and edits their own
/// resources, moderator edits and deletes anything, admin manages.
pub(super) fn default_grants(config: &PolicyConfig) -> Vec<Grant> {
    debug!("Building default grants");

    let moderator_delete = match config.moderator_delete {
        ModeratorDeletePolicy::Any => Scope::Unconditional,
        ModeratorDeletePolicy::BelowModerator => Scope::OwnedOrOwnerBelow(Role::Moderator),
    };

    vec![
        Grant::new(
            Role::Guest,
            ActionMatcher::Only(Action::Read),
            Scope::Unconditional,
        )
        .with_description("Read any resource"),
        Grant::new(
            Role::Normal,
            ActionMatcher::Only(Action::Create),
            Scope::Unconditional,
        )
        .with_description("Create resources"),
        Grant::new(Role::Normal, ActionMatcher::Only(Action::Update), Scope::Owner)
            .with_description("Update own resources"),
        Grant::new(
            Role::Moderator,
            ActionMatcher::Only(Action::Update),
            Scope::Unconditional,
        )
        .with_description("Update any resource"),
        Grant::new(
            Role::Moderator,
            ActionMatcher::Only(Action::Delete),
            moderator_delete,
        )
        .with_description("Delete resources"),
        Grant::new(Role::Admin, ActionMatcher::Any, Scope::Unconditional)
            .with_description("Manage everything"),
    ]
}
