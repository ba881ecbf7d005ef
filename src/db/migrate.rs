//! Embedded database migrations.

use diesel::Connection;
use diesel_async::AsyncPgConnection;
use diesel_async::async_connection_wrapper::AsyncConnectionWrapper;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};

use crate::error::{AppError, AppResult};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Runs all pending migrations against the given database.
///
/// Diesel's migration harness is synchronous, so the work is moved onto a
/// blocking thread with the async connection wrapper.
pub async fn run_pending_migrations(database_url: &str) -> AppResult<()> {
    let url = database_url.to_string();

    tokio::task::spawn_blocking(move || -> AppResult<()> {
        let mut conn =
            <AsyncConnectionWrapper<AsyncPgConnection> as Connection>::establish(&url).map_err(
                |e| AppError::Database {
                    operation: "connect for migrations".to_string(),
                    source: anyhow::Error::new(e),
                },
            )?;

        let applied = conn
            .run_pending_migrations(MIGRATIONS)
            .map_err(|e| AppError::Database {
                operation: "run migrations".to_string(),
                source: anyhow::anyhow!("{e}"),
            })?;

        for migration in applied {
            tracing::info!(migration = %migration, "Applied migration");
        }
        Ok(())
    })
    .await
    .map_err(|e| AppError::Internal {
        source: anyhow::Error::new(e),
    })?
}
