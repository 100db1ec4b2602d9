mod crud_tests;

use anyhow::Result;
use migration::MigratorTrait;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

/// Fresh in-memory database per test. A single pooled connection keeps the
/// SQLite memory store alive for the lifetime of the handle.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let mut opts = ConnectOptions::new("sqlite::memory:");
    opts.max_connections(1).sqlx_logging(false);
    let db = Database::connect(opts).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}
