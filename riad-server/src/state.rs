//! Application state for riad-server

use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;

use crate::auth::rate_limit::RateLimiter;
use crate::config::Config;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// SQLite connection pool
    pub pool: SqlitePool,
    /// Admin login email (lowercase)
    pub admin_email: String,
    /// Admin password hash (argon2 PHC)
    pub admin_password_hash: String,
    /// Session cookie signing secret
    pub session_secret: String,
    /// Session lifetime, refreshed on every authenticated request
    pub session_ttl_hours: i64,
    /// Static site root holding the `admin/` pages
    pub admin_dir: String,
    /// Take client IPs from `X-Forwarded-For` instead of the peer address
    pub trusted_proxy: bool,
    /// Rate limiter for the login route
    pub rate_limiter: RateLimiter,
}

impl AppState {
    /// Connect to the database, apply migrations and build the state
    pub async fn new(config: &Config) -> Result<Self, BoxError> {
        let pool = SqlitePoolOptions::new()
            .max_connections(config.db_max_connections)
            .connect(&config.database_url)
            .await?;
        tracing::info!("Database connected");

        Self::with_pool(pool, config).await
    }

    /// Build the state around an existing pool (migrations are applied)
    pub async fn with_pool(pool: SqlitePool, config: &Config) -> Result<Self, BoxError> {
        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(Self {
            pool,
            admin_email: config.admin_email.clone(),
            admin_password_hash: config.admin_password_hash.clone(),
            session_secret: config.session_secret.clone(),
            session_ttl_hours: config.session_ttl_hours,
            admin_dir: config.admin_dir.clone(),
            trusted_proxy: config.trusted_proxy,
            rate_limiter: RateLimiter::new(),
        })
    }
}
