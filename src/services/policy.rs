//! Ownership rules for mutating blog operations.

use crate::models::Blog;

/// The authenticated caller for the duration of one request, produced by
/// verifying a bearer token. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub user_id: i32,
    pub username: String,
}

/// Decides which identity may create, modify, or delete which blog.
///
/// Creation is open to any authenticated caller; modification and deletion
/// are restricted to the recorded owner. The comparison is a typed id
/// equality, never a string comparison.
pub struct AuthPolicy;

impl AuthPolicy {
    /// Any authenticated caller may create a blog (recorded as its owner).
    pub fn can_create(identity: Option<&Identity>) -> bool {
        identity.is_some()
    }

    /// Only the owner may modify a blog.
    pub fn can_modify(identity: &Identity, blog: &Blog) -> bool {
        identity.user_id == blog.user_id
    }

    /// Deletion follows the same rule as modification.
    pub fn can_delete(identity: &Identity, blog: &Blog) -> bool {
        Self::can_modify(identity, blog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity(user_id: i32) -> Identity {
        Identity {
            user_id,
            username: format!("user{user_id}"),
        }
    }

    fn blog_owned_by(user_id: i32) -> Blog {
        Blog {
            id: 1,
            title: "React patterns".to_string(),
            author: Some("Michael Chan".to_string()),
            url: "https://reactpatterns.com/".to_string(),
            likes: 7,
            user_id,
        }
    }

    #[test]
    fn any_authenticated_identity_may_create() {
        assert!(AuthPolicy::can_create(Some(&identity(1))));
        assert!(!AuthPolicy::can_create(None));
    }

    #[test]
    fn owner_may_modify_and_delete() {
        let owner = identity(5);
        let blog = blog_owned_by(5);
        assert!(AuthPolicy::can_modify(&owner, &blog));
        assert!(AuthPolicy::can_delete(&owner, &blog));
    }

    #[test]
    fn non_owner_may_not_modify_or_delete() {
        let intruder = identity(6);
        let blog = blog_owned_by(5);
        assert!(!AuthPolicy::can_modify(&intruder, &blog));
        assert!(!AuthPolicy::can_delete(&intruder, &blog));
    }

    #[test]
    fn same_username_different_id_is_not_owner() {
        // Ownership is an id comparison, not a name comparison.
        let looks_like_owner = Identity {
            user_id: 9,
            username: "user5".to_string(),
        };
        assert!(!AuthPolicy::can_modify(&looks_like_owner, &blog_owned_by(5)));
    }
}
