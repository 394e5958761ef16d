//! Test fixtures and data factories
//!
//! Provides factory methods for creating test data with sensible defaults.

use rolegate::{MemberRole, Resource, Subject, SubjectId};

/// Factory for creating test subjects
pub struct SubjectFactory;

impl SubjectFactory {
    pub fn anonymous() -> Subject {
        Subject::Anonymous
    }

    pub fn normal(id: u64) -> Subject {
        Subject::identified(SubjectId(id), MemberRole::Normal)
    }

    pub fn moderator(id: u64) -> Subject {
        Subject::identified(SubjectId(id), MemberRole::Moderator)
    }

    pub fn admin(id: u64) -> Subject {
        Subject::identified(SubjectId(id), MemberRole::Admin)
    }

    /// One subject per role, lowest first, all sharing the same id
    pub fn ladder(id: u64) -> Vec<Subject> {
        vec![
            Self::anonymous(),
            Self::normal(id),
            Self::moderator(id),
            Self::admin(id),
        ]
    }
}

/// Blog post model as an application would define it
#[derive(Debug, Clone)]
pub struct TestPost {
    pub id: u64,
    pub owner_id: SubjectId,
    pub owner_role: MemberRole,
    pub title: String,
}

impl Resource for TestPost {
    fn class(&self) -> &str {
        "post"
    }

    fn owner_id(&self) -> Option<SubjectId> {
        Some(self.owner_id)
    }

    fn owner_role(&self) -> Option<MemberRole> {
        Some(self.owner_role)
    }
}

/// Factory for creating test posts
pub struct PostFactory;

impl PostFactory {
    /// Post written by a normal member
    pub fn create(id: u64, owner: u64) -> TestPost {
        TestPost {
            id,
            owner_id: SubjectId(owner),
            owner_role: MemberRole::Normal,
            title: format!("Post {}", id),
        }
    }

    /// Post written by a member with a specific role
    pub fn by(id: u64, owner: u64, owner_role: MemberRole) -> TestPost {
        let mut post = Self::create(id, owner);
        post.owner_role = owner_role;
        post
    }
}
