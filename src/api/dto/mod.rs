//! Data Transfer Objects for API requests and responses.

pub mod auth;
pub mod blog;
pub mod error;
pub mod user;

pub use auth::{LoginRequest, LoginResponse};
pub use blog::{
    BlogResponse, BlogStatsResponse, BlogWithOwnerResponse, CreateBlogRequest, FavoriteBlogResponse,
    UpdateBlogRequest,
};
pub use error::ErrorResponse;
pub use user::{RegisterRequest, UserResponse};
