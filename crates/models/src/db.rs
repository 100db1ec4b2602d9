use once_cell::sync::Lazy;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::env;
use std::time::Duration;

pub static DATABASE_URL: Lazy<String> = Lazy::new(|| {
    // Load .env if present
    let _ = dotenvy::dotenv();
    env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://vetclinic.db?mode=rwc".to_string())
});

/// Connect using `config.toml` if present, else env vars, else the
/// default SQLite file next to the binary.
pub async fn connect() -> anyhow::Result<DatabaseConnection> {
    let mut cfg =
        configs::DatabaseConfig::from_file().unwrap_or_else(|_| configs::DatabaseConfig::from_env());
    if cfg.url.trim().is_empty() {
        cfg.url = DATABASE_URL.clone();
    }
    connect_with_config(&cfg).await
}

/// Connect with explicit pool settings.
pub async fn connect_with_config(cfg: &configs::DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let mut opts = ConnectOptions::new(cfg.url.clone());
    opts.max_connections(cfg.max_connections)
        .min_connections(cfg.min_connections)
        .connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))
        .idle_timeout(Duration::from_secs(cfg.idle_timeout_secs))
        .max_lifetime(Duration::from_secs(cfg.max_lifetime_secs))
        .acquire_timeout(Duration::from_secs(cfg.acquire_timeout_secs))
        .sqlx_logging(cfg.sqlx_logging);
    let db = Database::connect(opts).await?;
    Ok(db)
}
