//! Server configuration

use crate::util::{hash_password, is_password_hash};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Environment: development | staging | production
    pub environment: String,
    /// SQLite connection URL
    pub database_url: String,
    /// Pool size
    pub db_max_connections: u32,
    /// HTTP port
    pub http_port: u16,
    /// The single admin account
    pub admin_email: String,
    /// Argon2 PHC string of the admin password
    pub admin_password_hash: String,
    /// HS256 signing secret for session cookies
    pub session_secret: String,
    /// Sliding session lifetime
    pub session_ttl_hours: i64,
    /// Behind a reverse proxy: trust its `X-Forwarded-For` for client IPs
    pub trusted_proxy: bool,
    /// Root of the exported site; admin pages live in its `admin/` directory
    pub admin_dir: String,
}

impl Config {
    /// Require a secret env var: must be set and non-empty in non-development environments.
    fn require_secret(name: &str, environment: &str) -> Result<String, BoxError> {
        let val = match std::env::var(name) {
            Ok(v) => v,
            Err(_) => {
                if environment != "development" {
                    return Err(format!("{name} must be set in {environment} environment").into());
                }
                format!("dev-{name}-not-for-production")
            }
        };
        if val.is_empty() && environment != "development" {
            return Err(format!("{name} must not be empty in {environment} environment").into());
        }
        Ok(val)
    }

    /// Admin password hash. Development may fall back to hashing
    /// `ADMIN_PASSWORD` (default `admin`) at start-up.
    fn admin_password_hash(environment: &str) -> Result<String, BoxError> {
        match std::env::var("ADMIN_PASSWORD_HASH") {
            Ok(hash) if !hash.is_empty() => {
                if !is_password_hash(&hash) {
                    return Err("ADMIN_PASSWORD_HASH is not a valid argon2 hash".into());
                }
                Ok(hash)
            }
            _ if environment != "development" => {
                Err(format!("ADMIN_PASSWORD_HASH must be set in {environment} environment").into())
            }
            _ => {
                let password = std::env::var("ADMIN_PASSWORD").unwrap_or_else(|_| "admin".into());
                tracing::warn!("ADMIN_PASSWORD_HASH not set, hashing development password");
                hash_password(&password).map_err(|e| format!("hash admin password: {e}").into())
            }
        }
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, BoxError> {
        let environment = std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into());

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://riad-connect.db?mode=rwc".into()),
            db_max_connections: std::env::var("DB_MAX_CONNECTIONS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            admin_email: std::env::var("ADMIN_EMAIL")
                .map(|e| e.trim().to_lowercase())
                .unwrap_or_else(|_| "admin@riadconnect.ma".into()),
            admin_password_hash: Self::admin_password_hash(&environment)?,
            session_secret: Self::require_secret("SESSION_SECRET", &environment)?,
            session_ttl_hours: std::env::var("SESSION_TTL_HOURS")
                .ok()
                .and_then(|p| p.parse().ok())
                .filter(|h: &i64| *h > 0)
                .unwrap_or(24),
            trusted_proxy: std::env::var("TRUSTED_PROXY")
                .map(|v| matches!(v.trim(), "1" | "true" | "yes"))
                .unwrap_or(false),
            admin_dir: std::env::var("ADMIN_DIR").unwrap_or_else(|_| "public".into()),
            environment,
        })
    }
}
