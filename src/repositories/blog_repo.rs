//! Blog repository for async database operations.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::AsyncDbPool;
use crate::error::AppError;
use crate::models::{Blog, NewBlog, UpdateBlog, UserSummary};
use crate::schema::{blogs, users};

/// Blog repository holding an async connection pool.
#[derive(Clone)]
pub struct BlogRepository {
    pool: AsyncDbPool,
}

impl BlogRepository {
    /// Creates a new BlogRepository with the given connection pool.
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }

    /// Inserts a new blog and returns it with its assigned id.
    pub async fn create(&self, new_blog: NewBlog) -> Result<Blog, AppError> {
        let mut conn = self.pool.get().await?;

        diesel::insert_into(blogs::table)
            .values(&new_blog)
            .returning(Blog::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Finds a blog by its id.
    pub async fn find_by_id(&self, blog_id: i32) -> Result<Option<Blog>, AppError> {
        let mut conn = self.pool.get().await?;

        blogs::table
            .filter(blogs::id.eq(blog_id))
            .select(Blog::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    /// Lists all blogs in insertion order.
    pub async fn list_all(&self) -> Result<Vec<Blog>, AppError> {
        let mut conn = self.pool.get().await?;

        blogs::table
            .order(blogs::id.asc())
            .select(Blog::as_select())
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Lists all blogs with their owners resolved to a public summary.
    pub async fn list_with_owners(&self) -> Result<Vec<(Blog, UserSummary)>, AppError> {
        let mut conn = self.pool.get().await?;

        blogs::table
            .inner_join(users::table)
            .order(blogs::id.asc())
            .select((Blog::as_select(), UserSummary::as_select()))
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Applies a partial update and returns the updated blog.
    /// Callers must not pass an empty patch; diesel rejects empty changesets.
    pub async fn update(&self, blog_id: i32, patch: UpdateBlog) -> Result<Blog, AppError> {
        let mut conn = self.pool.get().await?;

        diesel::update(blogs::table.filter(blogs::id.eq(blog_id)))
            .set(&patch)
            .returning(Blog::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Deletes a blog, returning the number of affected rows (0 or 1).
    pub async fn delete(&self, blog_id: i32) -> Result<usize, AppError> {
        let mut conn = self.pool.get().await?;

        diesel::delete(blogs::table.filter(blogs::id.eq(blog_id)))
            .execute(&mut conn)
            .await
            .map_err(AppError::from)
    }
}
