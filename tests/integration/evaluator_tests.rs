//! Permission evaluation integration tests
//!
//! Exercise the evaluator through the public API with application-defined
//! resource types.

#[cfg(test)]
mod tests {
    use crate::common::{PostFactory, SubjectFactory};
    use rolegate::config::{ModeratorDeletePolicy, PolicyConfig};
    use rolegate::{Action, AuthzError, MemberRole, RbacSystem, ResourceRef, Role, Subject};
    use std::sync::Arc;
    use std::thread;

    fn default_rbac() -> RbacSystem {
        RbacSystem::new(&PolicyConfig::default()).unwrap()
    }

    // ==================== Scenario ====================

    /// Normal member edits their own post but not someone else's;
    /// promoting them to moderator lifts the restriction
    #[test]
    fn test_post_editing_scenario() {
        let rbac = default_rbac();
        let own = PostFactory::create(10, 5);
        let other = PostFactory::create(11, 7);

        assert!(rbac.can(&SubjectFactory::normal(5), Action::Update, &own).unwrap());
        assert!(!rbac.can(&SubjectFactory::normal(5), Action::Update, &other).unwrap());
        assert!(rbac.can(&SubjectFactory::moderator(5), Action::Update, &other).unwrap());
    }

    // ==================== Properties ====================

    /// Everyone can read everything
    #[test]
    fn test_read_is_universal() {
        let rbac = default_rbac();
        let post = PostFactory::create(1, 99);

        for subject in SubjectFactory::ladder(3) {
            assert!(rbac.can(&subject, Action::Read, &post).unwrap());
        }
    }

    /// Decisions never get narrower going up the role ladder
    #[test]
    fn test_decisions_are_monotonic() {
        let rbac = default_rbac();
        let posts = [PostFactory::create(1, 3), PostFactory::create(2, 4)];

        for post in &posts {
            for action in Action::ALL {
                let mut previous = false;
                for subject in SubjectFactory::ladder(3) {
                    let allowed = rbac.can(&subject, action, post).unwrap();
                    assert!(
                        allowed || !previous,
                        "{} lost {} on post {}",
                        subject,
                        action,
                        post.id
                    );
                    previous = allowed;
                }
            }
        }
    }

    /// Only admins may manage
    #[test]
    fn test_manage_is_admin_only() {
        let rbac = default_rbac();
        let post = PostFactory::create(1, 3);

        let allowed: Vec<Role> = SubjectFactory::ladder(3)
            .iter()
            .filter(|s| rbac.can(s, Action::Manage, &post).unwrap())
            .map(Subject::role)
            .collect();
        assert_eq!(allowed, vec![Role::Admin]);
    }

    /// The default evaluator matches a freshly built one
    #[test]
    fn test_default_system_matches_new() {
        let rbac = default_rbac();
        let post = PostFactory::create(1, 3);

        assert_eq!(rolegate::default_system().list_grants(), rbac.list_grants());
        for subject in SubjectFactory::ladder(3) {
            for action in Action::ALL {
                assert_eq!(
                    rolegate::can(&subject, action, &post).unwrap(),
                    rbac.can(&subject, action, &post).unwrap()
                );
            }
        }
    }

    // ==================== Errors ====================

    /// Unknown action names surface as invalid requests, not denials
    #[test]
    fn test_unknown_action_name() {
        let rbac = default_rbac();
        let post = PostFactory::create(1, 3);

        let result = rbac.can_named(&SubjectFactory::admin(1), "archive", &post);
        assert!(matches!(result, Err(AuthzError::InvalidRequest(_))));
        assert!(rbac.can_named(&SubjectFactory::normal(3), "update", &post).unwrap());
    }

    /// A resource without an owner can't satisfy an ownership rule
    #[test]
    fn test_missing_owner() {
        let rbac = default_rbac();
        let orphan = ResourceRef::new("post").with_id("1");

        let err = rbac
            .can(&SubjectFactory::normal(3), Action::Update, &orphan)
            .unwrap_err();
        assert!(err.is_invalid_request());

        // Unconditional rows still decide without the attribute.
        assert!(rbac.can(&SubjectFactory::normal(3), Action::Create, &orphan).unwrap());
        assert!(rbac.can(&SubjectFactory::admin(1), Action::Update, &orphan).unwrap());
    }

    // ==================== Restricted moderator delete ====================

    /// Moderators can't delete peers' or admins' posts under the restricted policy
    #[test]
    fn test_restricted_moderator_delete() {
        let config = PolicyConfig {
            moderator_delete: ModeratorDeletePolicy::BelowModerator,
        };
        let rbac = RbacSystem::new(&config).unwrap();
        let moderator = SubjectFactory::moderator(2);

        let cases = [
            (PostFactory::by(1, 7, MemberRole::Normal), true),
            (PostFactory::by(2, 8, MemberRole::Moderator), false),
            (PostFactory::by(3, 9, MemberRole::Admin), false),
            (PostFactory::by(4, 2, MemberRole::Moderator), true),
        ];
        for (post, expected) in &cases {
            assert_eq!(
                rbac.can(&moderator, Action::Delete, post).unwrap(),
                *expected,
                "post {}",
                post.title
            );
        }
        assert!(rbac.is_monotonic());
    }

    // ==================== Concurrency ====================

    /// One evaluator shared across threads gives the same answers
    #[test]
    fn test_shared_across_threads() {
        let rbac = Arc::new(default_rbac());

        let handles: Vec<_> = (0..4u64)
            .map(|owner| {
                let rbac = Arc::clone(&rbac);
                thread::spawn(move || {
                    let post = PostFactory::create(owner, owner);
                    (0..4u64)
                        .map(|id| {
                            rbac.can(&SubjectFactory::normal(id), Action::Update, &post)
                                .unwrap()
                        })
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        for (owner, handle) in handles.into_iter().enumerate() {
            let decisions = handle.join().unwrap();
            for (id, allowed) in decisions.into_iter().enumerate() {
                assert_eq!(allowed, id == owner);
            }
        }
    }
}
