use anyhow::{ Context, Result };
use sqlx::postgres::{ PgPool, PgPoolOptions };
use std::env;
use std::sync::Arc;
use std::time::Duration;

use crate::utils::logging::log_activity;

pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 30;

/// Database configuration for connecting to PostgreSQL
#[derive(Debug, Clone)]
pub struct DbConfig {
    pub connection_string: String,
    pub max_connections: u32,
    pub connect_timeout: Duration,
}

impl DbConfig {
    pub fn new(connection_string: impl Into<String>) -> Self {
        Self {
            connection_string: connection_string.into(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
        }
    }

    /// Create a new DbConfig from environment variables
    pub fn from_env() -> Result<Self> {
        let db_url = env::var("DATABASE_URL").context("DATABASE_URL environment variable not set")?;

        let max_connections = env
            ::var("DATABASE_MAX_CONNECTIONS")
            .unwrap_or_else(|_| DEFAULT_MAX_CONNECTIONS.to_string())
            .parse::<u32>()
            .context("Invalid DATABASE_MAX_CONNECTIONS value")?;

        let connect_timeout_secs = env
            ::var("DATABASE_CONNECT_TIMEOUT")
            .unwrap_or_else(|_| DEFAULT_CONNECT_TIMEOUT_SECS.to_string())
            .parse::<u64>()
            .context("Invalid DATABASE_CONNECT_TIMEOUT value")?;

        Ok(Self {
            connection_string: db_url,
            max_connections,
            connect_timeout: Duration::from_secs(connect_timeout_secs),
        })
    }
}

/// Database connection pool shared by all repositories
#[derive(Clone)]
pub struct Database {
    pool: Arc<PgPool>,
}

impl Database {
    /// Create a new database connection pool
    pub async fn connect(config: DbConfig) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.connect_timeout)
            .connect(&config.connection_string).await
            .context("Failed to connect to database")?;

        // Verify connection by running a simple query
        sqlx::query("SELECT 1").execute(&pool).await.context("Failed to execute test query")?;

        log_activity(
            "Database",
            "Connected",
            Some(&format!("max_connections={}", config.max_connections))
        );

        Ok(Self {
            pool: Arc::new(pool),
        })
    }

    /// Wrap an existing pool
    pub fn from_pool(pool: PgPool) -> Self {
        Self {
            pool: Arc::new(pool),
        }
    }

    /// Get a reference to the inner connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}
