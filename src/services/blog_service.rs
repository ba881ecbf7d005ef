//! Blog service for business logic operations.
//!
//! Validates input, applies the ownership policy, and coordinates with the
//! repository layer. All authorization failures are surfaced as errors here,
//! never silently ignored.

use crate::aggregate::{self, BlogStats};
use crate::error::{AppError, AppResult};
use crate::models::{Blog, NewBlog, UpdateBlog, UserSummary};
use crate::repositories::BlogRepository;
use crate::services::policy::{AuthPolicy, Identity};

/// Input for creating a blog. The owner is taken from the authenticated
/// identity, never from the payload.
#[derive(Debug, Clone)]
pub struct CreateBlogInput {
    pub title: String,
    pub author: Option<String>,
    pub url: String,
    pub likes: Option<i32>,
}

/// Blog service for handling blog-related business logic.
#[derive(Clone)]
pub struct BlogService {
    repo: BlogRepository,
}

impl BlogService {
    /// Creates a new BlogService with the given repository.
    pub fn new(repo: BlogRepository) -> Self {
        Self { repo }
    }

    /// Creates a blog owned by the authenticated identity.
    ///
    /// # Errors
    /// `Validation` when title or url is missing/empty.
    pub async fn create(&self, identity: &Identity, input: CreateBlogInput) -> AppResult<Blog> {
        if !AuthPolicy::can_create(Some(identity)) {
            return Err(AppError::unauthorized("invalid token"));
        }
        Self::validate_create(&input)?;

        let new_blog = NewBlog {
            title: input.title,
            author: input.author,
            url: input.url,
            likes: Self::normalize_likes(input.likes),
            user_id: identity.user_id,
        };
        self.repo.create(new_blog).await
    }

    /// Applies a partial update to an existing blog, owner only.
    ///
    /// # Errors
    /// `NotFound` when the blog does not exist, `Forbidden` when the caller
    /// is not the owner, `Validation` when a present field is invalid.
    pub async fn update(
        &self,
        identity: &Identity,
        blog_id: i32,
        patch: UpdateBlog,
    ) -> AppResult<Blog> {
        let existing = self.get(blog_id).await?;
        Self::authorize_modify(identity, &existing)?;
        Self::validate_patch(&patch)?;

        if patch.is_empty() {
            return Ok(existing);
        }
        self.repo.update(blog_id, patch).await
    }

    /// Deletes an existing blog, owner only.
    ///
    /// Deleting an id that was never persisted (or already removed) is a
    /// NotFound error, consistent with update.
    pub async fn delete(&self, identity: &Identity, blog_id: i32) -> AppResult<()> {
        let existing = self.get(blog_id).await?;
        Self::authorize_delete(identity, &existing)?;
        self.repo.delete(blog_id).await?;
        Ok(())
    }

    /// Lists all blogs with owners resolved to their public summary.
    pub async fn list(&self) -> AppResult<Vec<(Blog, UserSummary)>> {
        self.repo.list_with_owners().await
    }

    /// Computes the aggregate statistics over all blogs.
    pub async fn stats(&self) -> AppResult<BlogStats> {
        let blogs = self.repo.list_all().await?;
        Ok(aggregate::summarize(&blogs))
    }

    async fn get(&self, blog_id: i32) -> AppResult<Blog> {
        Self::ensure_found(self.repo.find_by_id(blog_id).await?, blog_id)
    }

    /// An absent row surfaces as NotFound before any ownership check runs.
    fn ensure_found(blog: Option<Blog>, blog_id: i32) -> AppResult<Blog> {
        blog.ok_or_else(|| AppError::not_found("blog", "id", blog_id))
    }

    fn authorize_modify(identity: &Identity, blog: &Blog) -> AppResult<()> {
        if !AuthPolicy::can_modify(identity, blog) {
            return Err(AppError::forbidden("only the owner may modify a blog"));
        }
        Ok(())
    }

    fn authorize_delete(identity: &Identity, blog: &Blog) -> AppResult<()> {
        if !AuthPolicy::can_delete(identity, blog) {
            return Err(AppError::forbidden("only the owner may delete a blog"));
        }
        Ok(())
    }

    /// A missing or negative likes value defaults to 0.
    fn normalize_likes(likes: Option<i32>) -> i32 {
        likes.filter(|l| *l >= 0).unwrap_or(0)
    }

    fn validate_create(input: &CreateBlogInput) -> AppResult<()> {
        if input.title.trim().is_empty() || input.url.trim().is_empty() {
            return Err(AppError::validation("title and url are required"));
        }
        Ok(())
    }

    /// Fields absent from the patch stay untouched; fields that are present
    /// must still satisfy the record invariants.
    fn validate_patch(patch: &UpdateBlog) -> AppResult<()> {
        if patch.title.as_deref().is_some_and(|t| t.trim().is_empty()) {
            return Err(AppError::validation("title must not be empty"));
        }
        if patch.url.as_deref().is_some_and(|u| u.trim().is_empty()) {
            return Err(AppError::validation("url must not be empty"));
        }
        if patch.likes.is_some_and(|l| l < 0) {
            return Err(AppError::validation("likes must be a non-negative integer"));
        }
        Ok(())
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
            id: 17,
            title: "Go To Statement Considered Harmful".to_string(),
            author: Some("Edsger W. Dijkstra".to_string()),
            url: "https://homepages.cwi.nl/~storm/teaching/reader/Dijkstra68.pdf".to_string(),
            likes: 5,
            user_id,
        }
    }

    fn input(title: &str, url: &str, likes: Option<i32>) -> CreateBlogInput {
        CreateBlogInput {
            title: title.to_string(),
            author: Some("Testaaja".to_string()),
            url: url.to_string(),
            likes,
        }
    }

    #[test]
    fn missing_title_fails_validation() {
        let result = BlogService::validate_create(&input("", "www.google.fi", Some(6)));
        assert!(matches!(result, Err(AppError::Validation { .. })));
    }

    #[test]
    fn missing_url_fails_validation() {
        let result = BlogService::validate_create(&input("Url missing", "", Some(6)));
        assert!(matches!(result, Err(AppError::Validation { .. })));
    }

    #[test]
    fn whitespace_only_title_fails_validation() {
        let result = BlogService::validate_create(&input("   ", "www.google.fi", None));
        assert!(matches!(result, Err(AppError::Validation { .. })));
    }

    #[test]
    fn complete_input_passes_validation() {
        assert!(BlogService::validate_create(&input("New blog", "www.google.fi", None)).is_ok());
    }

    #[test]
    fn absent_likes_default_to_zero() {
        assert_eq!(BlogService::normalize_likes(None), 0);
    }

    #[test]
    fn negative_likes_default_to_zero() {
        assert_eq!(BlogService::normalize_likes(Some(-3)), 0);
    }

    #[test]
    fn valid_likes_are_kept() {
        assert_eq!(BlogService::normalize_likes(Some(7)), 7);
    }

    #[test]
    fn patch_with_empty_title_is_rejected() {
        let patch = UpdateBlog {
            title: Some(String::new()),
            ..UpdateBlog::default()
        };
        assert!(matches!(
            BlogService::validate_patch(&patch),
            Err(AppError::Validation { .. })
        ));
    }

    #[test]
    fn patch_with_negative_likes_is_rejected() {
        let patch = UpdateBlog {
            likes: Some(-1),
            ..UpdateBlog::default()
        };
        assert!(matches!(
            BlogService::validate_patch(&patch),
            Err(AppError::Validation { .. })
        ));
    }

    #[test]
    fn partial_patch_with_valid_fields_passes() {
        let patch = UpdateBlog {
            likes: Some(100),
            ..UpdateBlog::default()
        };
        assert!(BlogService::validate_patch(&patch).is_ok());
    }

    #[test]
    fn empty_patch_passes_validation() {
        assert!(BlogService::validate_patch(&UpdateBlog::default()).is_ok());
    }

    #[test]
    fn non_owner_modification_is_forbidden() {
        let result = BlogService::authorize_modify(&identity(6), &blog_owned_by(5));
        match result {
            Err(AppError::Forbidden { message }) => {
                assert_eq!(message, "only the owner may modify a blog");
            }
            other => panic!("Expected Forbidden, got {:?}", other),
        }
    }

    #[test]
    fn non_owner_deletion_is_forbidden() {
        let result = BlogService::authorize_delete(&identity(6), &blog_owned_by(5));
        match result {
            Err(AppError::Forbidden { message }) => {
                assert_eq!(message, "only the owner may delete a blog");
            }
            other => panic!("Expected Forbidden, got {:?}", other),
        }
    }

    #[test]
    fn owner_passes_both_authorization_checks() {
        let owner = identity(5);
        let blog = blog_owned_by(5);
        assert!(BlogService::authorize_modify(&owner, &blog).is_ok());
        assert!(BlogService::authorize_delete(&owner, &blog).is_ok());
    }

    #[test]
    fn absent_blog_is_not_found() {
        let result = BlogService::ensure_found(None, 42);
        match result {
            Err(AppError::NotFound { entity, field, value }) => {
                assert_eq!(entity, "blog");
                assert_eq!(field, "id");
                assert_eq!(value, "42");
            }
            other => panic!("Expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn present_blog_is_returned_intact() {
        let blog = blog_owned_by(5);
        let found = BlogService::ensure_found(Some(blog.clone()), blog.id).unwrap();
        assert_eq!(found, blog);
    }
}
