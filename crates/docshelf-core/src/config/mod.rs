//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section.

pub mod app;
pub mod database;
pub mod library;
pub mod logging;
pub mod storage;
pub mod sync;

use serde::{Deserialize, Serialize};

pub use self::app::{CorsConfig, ServerConfig};
pub use self::database::DatabaseConfig;
pub use self::library::{LibraryConfig, RequestConfig};
pub use self::logging::LoggingConfig;
pub use self::storage::{DropboxConfig, LocalStorageConfig, StorageConfig};
pub use self::sync::SyncConfig;

use crate::error::AppError;

/// Root application configuration.
///
/// This struct is the top-level deserialization target for the merged
/// TOML configuration files (default.toml + environment overlay).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Database connection settings.
    pub database: DatabaseConfig,
    /// Remote file-storage settings.
    #[serde(default)]
    pub storage: StorageConfig,
    /// Synchronization schedule settings.
    #[serde(default)]
    pub sync: SyncConfig,
    /// Library tree materialization settings.
    #[serde(default)]
    pub library: LibraryConfig,
    /// Title request (voting) settings.
    #[serde(default)]
    pub requests: RequestConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration for the given environment name.
    ///
    /// Merges `config/default`, the environment overlay `config/{env}`, and
    /// environment variables prefixed with `DOCSHELF__`.
    pub fn load(env: &str) -> Result<Self, AppError> {
        Self::load_from("config/default", env)
    }

    /// Load configuration with an explicit base file (extension optional).
    pub fn load_from(base: &str, env: &str) -> Result<Self, AppError> {
        let base_dir = std::path::Path::new(base)
            .parent()
            .map(|p| p.to_string_lossy().to_string())
            .filter(|p| !p.is_empty())
            .unwrap_or_else(|| ".".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name(base).required(false))
            .add_source(config::File::with_name(&format!("{base_dir}/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("DOCSHELF")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_config_fills_defaults() {
        let json = serde_json::json!({
            "database": { "url": "postgres://docshelf@localhost/docshelf" }
        });
        let config: AppConfig = serde_json::from_value(json).expect("deserialize");

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.database.max_connections, 20);
        assert_eq!(config.storage.provider, "dropbox");
        assert_eq!(config.storage.allowed_extensions, vec!["pdf".to_string()]);
        assert_eq!(config.library.fetch_page_size, 1000);
        assert_eq!(config.requests.daily_limit, 5);
        assert_eq!(config.requests.min_title_length, 2);
        assert!(!config.sync.schedule_enabled);
        assert_eq!(config.logging.format, "json");
    }
}
