//! Service layer for business logic operations.
//!
//! Services encapsulate business logic and coordinate between
//! repositories and handlers.

mod blog_service;
pub mod policy;
mod user_service;

pub use blog_service::{BlogService, CreateBlogInput};
pub use policy::{AuthPolicy, Identity};
pub use user_service::{RegisterInput, UserService};

use crate::repositories::Repositories;

/// Aggregates all services for convenient access.
///
/// This struct is designed to be used as Axum application state.
/// Cloning is cheap since underlying pools use `Arc` internally.
#[derive(Clone)]
pub struct Services {
    pub users: UserService,
    pub blogs: BlogService,
}

impl Services {
    /// Creates a new Services instance from Repositories.
    pub fn new(repos: Repositories) -> Self {
        Self {
            users: UserService::new(repos.users),
            blogs: BlogService::new(repos.blogs),
        }
    }
}
