//! Blog-related DTOs for API requests and responses.

use crate::aggregate::{AuthorBlogCount, AuthorLikes, BlogStats};
use crate::api::dto::UserResponse;
use crate::models::{Blog, UpdateBlog, UserSummary};
use crate::services::CreateBlogInput;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

// ============================================================================
// Request DTOs
// ============================================================================

/// Request body for creating a new blog.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CreateBlogRequest {
    #[validate(length(min = 1, message = "title and url are required"))]
    #[schema(example = "React patterns", min_length = 1)]
    pub title: String,
    #[schema(example = "Michael Chan")]
    pub author: Option<String>,
    #[validate(length(min = 1, message = "title and url are required"))]
    #[schema(example = "https://reactpatterns.com/", min_length = 1)]
    pub url: String,
    /// Defaults to 0 when absent or negative
    #[schema(example = 7)]
    pub likes: Option<i32>,
}

impl CreateBlogRequest {
    /// Converts the request DTO into service-level creation input.
    pub fn into_input(self) -> CreateBlogInput {
        CreateBlogInput {
            title: self.title,
            author: self.author,
            url: self.url,
            likes: self.likes,
        }
    }
}

/// Request body for partially updating a blog. Absent fields are untouched.
#[derive(Debug, Deserialize, ToSchema, Validate, Default)]
pub struct UpdateBlogRequest {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: Option<String>,
    pub author: Option<String>,
    #[validate(length(min = 1, message = "url must not be empty"))]
    pub url: Option<String>,
    #[validate(range(min = 0, message = "likes must be a non-negative integer"))]
    pub likes: Option<i32>,
}

impl UpdateBlogRequest {
    /// Converts the request DTO into an UpdateBlog changeset.
    pub fn into_update_blog(self) -> UpdateBlog {
        UpdateBlog {
            title: self.title,
            author: self.author,
            url: self.url,
            likes: self.likes,
        }
    }
}

// ============================================================================
// Response DTOs
// ============================================================================

/// Response body for a single blog, as returned by create and update.
#[derive(Debug, Serialize, ToSchema)]
pub struct BlogResponse {
    pub id: i32,
    pub title: String,
    pub author: Option<String>,
    pub url: String,
    pub likes: i32,
    /// Id of the owning user
    pub user_id: i32,
}

impl From<Blog> for BlogResponse {
    fn from(blog: Blog) -> Self {
        Self {
            id: blog.id,
            title: blog.title,
            author: blog.author,
            url: blog.url,
            likes: blog.likes,
            user_id: blog.user_id,
        }
    }
}

/// Response body for the blog listing, with the owner resolved to a public
/// summary.
#[derive(Debug, Serialize, ToSchema)]
pub struct BlogWithOwnerResponse {
    pub id: i32,
    pub title: String,
    pub author: Option<String>,
    pub url: String,
    pub likes: i32,
    pub user: UserResponse,
}

impl From<(Blog, UserSummary)> for BlogWithOwnerResponse {
    fn from((blog, owner): (Blog, UserSummary)) -> Self {
        Self {
            id: blog.id,
            title: blog.title,
            author: blog.author,
            url: blog.url,
            likes: blog.likes,
            user: UserResponse::from(owner),
        }
    }
}

/// The most-liked blog inside the statistics response.
#[derive(Debug, Serialize, ToSchema)]
pub struct FavoriteBlogResponse {
    pub title: String,
    pub author: Option<String>,
    pub url: String,
    pub likes: i32,
}

impl From<Blog> for FavoriteBlogResponse {
    fn from(blog: Blog) -> Self {
        Self {
            title: blog.title,
            author: blog.author,
            url: blog.url,
            likes: blog.likes,
        }
    }
}

/// Response body for the aggregate statistics endpoint.
#[derive(Debug, Serialize, ToSchema)]
pub struct BlogStatsResponse {
    pub total_likes: i64,
    pub favorite: Option<FavoriteBlogResponse>,
    pub most_blogs: Option<AuthorBlogCount>,
    pub most_likes: Option<AuthorLikes>,
}

impl From<BlogStats> for BlogStatsResponse {
    fn from(stats: BlogStats) -> Self {
        Self {
            total_likes: stats.total_likes,
            favorite: stats.favorite.map(FavoriteBlogResponse::from),
            most_blogs: stats.most_blogs,
            most_likes: stats.most_likes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn empty_title_fails_dto_validation() {
        let request = CreateBlogRequest {
            title: String::new(),
            author: None,
            url: "www.google.fi".to_string(),
            likes: None,
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn absent_optional_fields_pass_update_validation() {
        assert!(UpdateBlogRequest::default().validate().is_ok());
    }

    #[test]
    fn negative_likes_fail_update_validation() {
        let request = UpdateBlogRequest {
            likes: Some(-1),
            ..UpdateBlogRequest::default()
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn listing_response_embeds_owner_summary() {
        let blog = Blog {
            id: 1,
            title: "Type wars".to_string(),
            author: Some("Robert C. Martin".to_string()),
            url: "http://blog.cleancoder.com/uncle-bob/2016/05/01/TypeWars.html".to_string(),
            likes: 2,
            user_id: 9,
        };
        let owner = UserSummary {
            id: 9,
            username: "testuser1".to_string(),
            name: None,
        };

        let body = serde_json::to_value(BlogWithOwnerResponse::from((blog, owner))).unwrap();
        assert_eq!(body["user"]["username"], "testuser1");
        assert!(body["user"].get("password_hash").is_none());
    }
}
