//! # docshelf-storage
//!
//! Implementations of [`docshelf_core::traits::StorageProvider`] that scan
//! the library root of a remote (Dropbox) or local file store.

pub mod providers;

use std::sync::Arc;

use docshelf_core::config::StorageConfig;
use docshelf_core::error::AppError;
use docshelf_core::result::AppResult;
use docshelf_core::traits::StorageProvider;

pub use providers::{DropboxStorageProvider, LocalStorageProvider};

/// Build the provider selected by `storage.provider`.
pub async fn build_provider(config: &StorageConfig) -> AppResult<Arc<dyn StorageProvider>> {
    match config.provider.to_lowercase().as_str() {
        "dropbox" => Ok(Arc::new(DropboxStorageProvider::new(&config.dropbox)?)),
        "local" => Ok(Arc::new(
            LocalStorageProvider::new(&config.local.base_dir).await?,
        )),
        other => Err(AppError::configuration(format!(
            "Unknown storage provider: '{other}'. Expected one of: dropbox, local"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_build_local_provider() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut config = StorageConfig::default();
        config.provider = "local".to_string();
        config.local.base_dir = dir.path().to_string_lossy().to_string();

        let provider = build_provider(&config).await.expect("provider");
        assert_eq!(provider.provider_type(), "local");
    }

    #[tokio::test]
    async fn test_unknown_provider_is_configuration_error() {
        let mut config = StorageConfig::default();
        config.provider = "ftp".to_string();
        let err = build_provider(&config).await.expect_err("should fail");
        assert_eq!(err.kind, docshelf_core::error::ErrorKind::Configuration);
    }
}
