use std::path::Path;

use crate::error::ConfigError;

// Declare the modules that make up this crate.
pub mod error;
pub mod logging;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use logging::init_tracing;
pub use settings::{Config, Database, Logging, Server, StorageBackend};

/// The file looked up when no explicit path is given.
pub const DEFAULT_CONFIG_FILE: &str = "warehouse.toml";

/// Loads the application configuration.
///
/// Sources are layered: built-in defaults, then the TOML file at `path` (if it
/// exists), then `WAREHOUSE__SECTION__KEY` environment variables. A missing
/// `database.url` is filled from `DATABASE_URL`, which may come from `.env`.
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    load_config_with_backend(path, None)
}

/// Like `load_config`, with the storage backend forced before validation.
pub fn load_config_with_backend(
    path: &Path,
    backend: Option<StorageBackend>,
) -> Result<Config, ConfigError> {
    dotenvy::dotenv().ok();

    let builder = config::Config::builder()
        .add_source(config::File::from(path).required(false))
        .add_source(
            config::Environment::with_prefix("WAREHOUSE")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let mut config = builder.try_deserialize::<Config>()?;
    if let Some(backend) = backend {
        config.database.backend = backend;
    }
    if config.database.url.is_none() {
        config.database.url = std::env::var("DATABASE_URL").ok();
    }

    config.validate()?;
    Ok(config)
}
