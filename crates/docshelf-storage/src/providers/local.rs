//! Local filesystem storage provider.

use std::path::PathBuf;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::fs;
use tracing::debug;

use docshelf_core::error::{AppError, ErrorKind};
use docshelf_core::result::AppResult;
use docshelf_core::traits::{ScanResult, StorageObjectMeta, StorageProvider};

/// Serves a directory tree as the provider namespace (`/` = `base_dir`).
///
/// Local scans are always full; no cursor is produced.
#[derive(Debug, Clone)]
pub struct LocalStorageProvider {
    base: PathBuf,
}

impl LocalStorageProvider {
    /// Create a provider rooted at `base_dir`, creating the directory if needed.
    pub async fn new(base_dir: &str) -> AppResult<Self> {
        let base = PathBuf::from(base_dir);
        fs::create_dir_all(&base).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to create storage root: {}", base.display()),
                e,
            )
        })?;
        Ok(Self { base })
    }

    fn resolve(&self, path: &str) -> PathBuf {
        self.base.join(path.trim_start_matches('/'))
    }
}

fn join_provider_path(parent: &str, name: &str) -> String {
    if parent.ends_with('/') {
        format!("{parent}{name}")
    } else {
        format!("{parent}/{name}")
    }
}

#[async_trait]
impl StorageProvider for LocalStorageProvider {
    fn provider_type(&self) -> &str {
        "local"
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(fs::metadata(&self.base)
            .await
            .map(|m| m.is_dir())
            .unwrap_or(false))
    }

    async fn scan(&self, root: &str, cursor: Option<&str>) -> AppResult<ScanResult> {
        if cursor.is_some() {
            debug!("Local provider ignores cursors; performing full scan");
        }

        let root_dir = self.resolve(root);
        if !fs::try_exists(&root_dir).await.unwrap_or(false) {
            return Err(AppError::not_found(format!("Library root not found: {root}")));
        }

        let root_path = if root.starts_with('/') {
            root.trim_end_matches('/').to_string()
        } else {
            format!("/{}", root.trim_end_matches('/'))
        };

        let mut entries = Vec::new();
        let mut pending = vec![(root_dir, root_path)];

        while let Some((dir, provider_path)) = pending.pop() {
            let mut reader = fs::read_dir(&dir).await.map_err(|e| {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to read directory: {provider_path}"),
                    e,
                )
            })?;

            while let Some(entry) = reader.next_entry().await? {
                let name = entry.file_name().to_string_lossy().to_string();
                let meta = entry.metadata().await?;
                let path = join_provider_path(&provider_path, &name);

                if meta.is_dir() {
                    pending.push((entry.path(), path.clone()));
                }

                entries.push(StorageObjectMeta {
                    path,
                    name,
                    size_bytes: if meta.is_dir() { 0 } else { meta.len() },
                    last_modified: meta.modified().ok().map(DateTime::<Utc>::from),
                    is_directory: meta.is_dir(),
                });
            }
        }

        entries.sort_by(|a, b| a.path.cmp(&b.path));
        debug!(root = %root, entries = entries.len(), "Local scan finished");

        Ok(ScanResult {
            entries,
            deleted_paths: Vec::new(),
            cursor: None,
            is_full: true,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn write(base: &std::path::Path, rel: &str, body: &[u8]) {
        let full = base.join(rel);
        fs::create_dir_all(full.parent().expect("parent"))
            .await
            .expect("mkdir");
        fs::write(full, body).await.expect("write");
    }

    #[tokio::test]
    async fn test_scan_lists_nested_files() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "library/Book A/1과/worksheet.pdf", b"abc").await;
        write(dir.path(), "library/Book A/intro.pdf", b"x").await;
        write(dir.path(), "elsewhere/skip.pdf", b"x").await;

        let provider = LocalStorageProvider::new(dir.path().to_str().unwrap())
            .await
            .unwrap();
        let scan = provider.scan("/library", None).await.unwrap();

        assert!(scan.is_full);
        assert!(scan.cursor.is_none());
        let files: Vec<_> = scan
            .entries
            .iter()
            .filter(|e| !e.is_directory)
            .map(|e| e.path.as_str())
            .collect();
        assert_eq!(
            files,
            vec!["/library/Book A/1과/worksheet.pdf", "/library/Book A/intro.pdf"]
        );
        let worksheet = scan
            .entries
            .iter()
            .find(|e| e.name == "worksheet.pdf")
            .unwrap();
        assert_eq!(worksheet.size_bytes, 3);
        assert!(worksheet.last_modified.is_some());
    }

    #[tokio::test]
    async fn test_scan_missing_root_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let provider = LocalStorageProvider::new(dir.path().to_str().unwrap())
            .await
            .unwrap();
        let err = provider.scan("/nope", None).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_health_check() {
        let dir = tempfile::tempdir().unwrap();
        let provider = LocalStorageProvider::new(dir.path().to_str().unwrap())
            .await
            .unwrap();
        assert!(provider.health_check().await.unwrap());
    }
}
