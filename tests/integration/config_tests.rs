//! Configuration integration tests
//!
//! Configuration is loaded the way an application would and fed to the
//! evaluator.

#[cfg(test)]
mod tests {
    use crate::common::{PostFactory, SubjectFactory};
    use rolegate::config::{ModeratorDeletePolicy, Validate};
    use rolegate::{Action, AuthzError, Config, MemberRole, RbacSystem};
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Policy loaded from a YAML file drives the rule table
    #[test]
    fn test_policy_file_drives_evaluator() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"policy:\n  moderator_delete: below_moderator\n")
            .unwrap();

        let config = tokio_test::block_on(Config::from_file(file.path())).unwrap();
        let rbac = RbacSystem::new(config.policy()).unwrap();

        let admin_post = PostFactory::by(1, 9, MemberRole::Admin);
        assert!(
            !rbac
                .can(&SubjectFactory::moderator(2), Action::Delete, &admin_post)
                .unwrap()
        );
    }

    /// Defaults give the permissive moderator policy
    #[test]
    fn test_default_policy() {
        let config = Config::default();
        assert_eq!(config.policy.moderator_delete, ModeratorDeletePolicy::Any);
        assert!(config.policy.validate().is_ok());

        let rbac = RbacSystem::new(config.policy()).unwrap();
        let admin_post = PostFactory::by(1, 9, MemberRole::Admin);
        assert!(
            rbac.can(&SubjectFactory::moderator(2), Action::Delete, &admin_post)
                .unwrap()
        );
    }

    /// Unparseable documents are YAML errors, bad values are validation errors
    #[test]
    fn test_bad_document() {
        let err = Config::from_yaml_str("policy: [").unwrap_err();
        assert!(matches!(err, AuthzError::Yaml(_)));

        let err = Config::from_yaml_str("logging:\n  level: loud\n").unwrap_err();
        assert!(matches!(err, AuthzError::Validation(_)));
    }
}
