#![cfg(test)]
use anyhow::Result;
use migration::MigratorTrait;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

/// Fresh in-memory database per test. The pool is pinned to one connection
/// so the SQLite memory store survives for the whole test.
pub async fn get_db() -> Result<DatabaseConnection> {
    let mut opts = ConnectOptions::new("sqlite::memory:");
    opts.max_connections(1).sqlx_logging(false);
    let db = Database::connect(opts).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}
