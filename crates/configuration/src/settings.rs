use serde::Deserialize;

use crate::error::ConfigError;

/// The root configuration structure for the entire application.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: Server,
    pub database: Database,
    pub logging: Logging,
}

/// Where the HTTP transport listens.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Server {
    pub host: String,
    pub port: u16,
}

/// Which store backs the roll catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    #[default]
    Postgres,
    /// Keeps rolls in process memory. Nothing survives a restart.
    Memory,
}

/// Contains the connection parameters for the roll store.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Database {
    pub backend: StorageBackend,
    /// Falls back to `DATABASE_URL` when not set.
    pub url: Option<String>,
    pub max_connections: u32,
    /// Upper bound on waiting for a pooled connection before a store call fails.
    pub acquire_timeout_secs: u64,
    pub run_migrations: bool,
}

/// Controls the tracing subscriber.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Logging {
    /// Default filter directive, overridden by `RUST_LOG`.
    pub level: String,
    /// When set, logs are also written to a daily rolling file in this directory.
    pub directory: Option<String>,
    pub file_prefix: String,
}

impl Default for Server {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Default for Database {
    fn default() -> Self {
        Self {
            backend: StorageBackend::Postgres,
            url: None,
            max_connections: 10,
            acquire_timeout_secs: 5,
            run_migrations: true,
        }
    }
}

impl Default for Logging {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            directory: None,
            file_prefix: "warehouse".to_string(),
        }
    }
}

impl Server {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Config {
    /// Checks the cross-field rules that serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::ValidationError(
                "server.port must be greater than 0".to_string(),
            ));
        }
        if self.database.max_connections == 0 {
            return Err(ConfigError::ValidationError(
                "database.max_connections must be greater than 0".to_string(),
            ));
        }
        if self.database.acquire_timeout_secs == 0 {
            return Err(ConfigError::ValidationError(
                "database.acquire_timeout_secs must be greater than 0".to_string(),
            ));
        }
        if self.database.backend == StorageBackend::Postgres
            && self.database.url.as_deref().is_none_or(str::is_empty)
        {
            return Err(ConfigError::ValidationError(
                "database.url (or DATABASE_URL) must be set for the postgres backend".to_string(),
            ));
        }
        Ok(())
    }
}
