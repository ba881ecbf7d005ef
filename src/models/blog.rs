use diesel::prelude::*;

/// Blog model for reading from database.
///
/// Invariants enforced elsewhere: `title` and `url` are non-empty on any
/// persisted record and `likes` is never negative (service validation plus a
/// CHECK constraint in the migration).
#[derive(Debug, Queryable, Selectable, Clone, PartialEq, Eq)]
#[diesel(table_name = crate::schema::blogs)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Blog {
    pub id: i32,
    pub title: String,
    pub author: Option<String>,
    pub url: String,
    pub likes: i32,
    pub user_id: i32,
}

/// NewBlog model for inserting new records.
/// `user_id` is always the authenticated creator, set by the service layer.
#[derive(Debug, Insertable, Clone)]
#[diesel(table_name = crate::schema::blogs)]
pub struct NewBlog {
    pub title: String,
    pub author: Option<String>,
    pub url: String,
    pub likes: i32,
    pub user_id: i32,
}

/// UpdateBlog model for partial updates.
/// Derives AsChangeset for UPDATE operations; `None` fields are left untouched.
#[derive(Debug, AsChangeset, Clone, Default)]
#[diesel(table_name = crate::schema::blogs)]
pub struct UpdateBlog {
    pub title: Option<String>,
    pub author: Option<String>,
    pub url: Option<String>,
    pub likes: Option<i32>,
}

impl UpdateBlog {
    /// True when the patch carries no fields. Diesel rejects an empty
    /// changeset, so callers short-circuit in that case.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.author.is_none() && self.url.is_none() && self.likes.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_patch_is_detected() {
        assert!(UpdateBlog::default().is_empty());
    }

    #[test]
    fn patch_with_any_field_is_not_empty() {
        let patch = UpdateBlog {
            likes: Some(3),
            ..UpdateBlog::default()
        };
        assert!(!patch.is_empty());
    }
}
