use anyhow::{ Context, Result };
use serde::{ Deserialize, Serialize };
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::db::pool::{ DbConfig, DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_MAX_CONNECTIONS };

/// Connection settings of the `postgres` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostgresConfig {
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub user: String,
    pub password: String,
    pub dbname: String,
    #[serde(default)]
    pub max_connections: Option<u32>,
}

fn default_port() -> u16 {
    5432
}

impl PostgresConfig {
    pub fn connection_string(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.user,
            self.password,
            self.host,
            self.port,
            self.dbname
        )
    }
}

/// Application configuration file (JSON)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub postgres: PostgresConfig,
    #[serde(default = "default_log_level", rename = "loglevel")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path).context("Failed to open config file")?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).context("Failed to parse config file")
    }

    pub fn db_config(&self) -> DbConfig {
        DbConfig {
            connection_string: self.postgres.connection_string(),
            max_connections: self.postgres.max_connections.unwrap_or(DEFAULT_MAX_CONNECTIONS),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
        }
    }
}
