//! Repository layer for data access operations.
//!
//! Provides async CRUD operations for all domain entities.

mod blog_repo;
mod user_repo;

pub use blog_repo::BlogRepository;
pub use user_repo::UserRepository;

use crate::db::AsyncDbPool;

/// Aggregates all repositories for convenient access.
///
/// Since `AsyncDbPool` uses `Arc` internally, cloning is cheap.
#[derive(Clone)]
pub struct Repositories {
    pub users: UserRepository,
    pub blogs: BlogRepository,
}

impl Repositories {
    /// Creates a new Repositories instance with all repositories initialized.
    pub fn new(pool: AsyncDbPool) -> Self {
        Self {
            users: UserRepository::new(pool.clone()),
            blogs: BlogRepository::new(pool),
        }
    }
}
