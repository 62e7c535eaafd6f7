//! Persistence layer for clinic content.
//!
//! [`storage::ContentStorage`] is the facade the API talks to; the
//! repositories underneath are plain SQL against PostgreSQL.

use sqlx::postgres::PgPoolOptions;

pub mod models;
pub mod repositories;
pub mod seed;
pub mod storage;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool that opens no connection until first use.
///
/// Fails only if the URL itself cannot be parsed.
pub fn create_lazy_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(20)
        .connect_lazy(database_url)
}

/// Verify the database answers a trivial query.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply pending migrations from `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}
