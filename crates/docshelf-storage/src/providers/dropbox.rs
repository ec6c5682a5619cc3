//! Dropbox storage provider (HTTP RPC API v2).

use std::fmt;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::json;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use docshelf_core::config::DropboxConfig;
use docshelf_core::error::{AppError, ErrorKind};
use docshelf_core::result::AppResult;
use docshelf_core::traits::{ScanResult, StorageObjectMeta, StorageProvider};

/// Refresh this long before the reported expiry.
const TOKEN_EXPIRY_MARGIN: Duration = Duration::from_secs(60);

/// One page of `files/list_folder` or `files/list_folder/continue`.
#[derive(Debug, Deserialize)]
struct ListFolderPage {
    entries: Vec<DropboxEntry>,
    cursor: String,
    has_more: bool,
}

#[derive(Debug, Deserialize)]
#[serde(tag = ".tag", rename_all = "lowercase")]
enum DropboxEntry {
    File {
        name: String,
        path_display: Option<String>,
        path_lower: Option<String>,
        size: u64,
        server_modified: Option<DateTime<Utc>>,
    },
    Folder {
        name: String,
        path_display: Option<String>,
        path_lower: Option<String>,
    },
    Deleted {
        path_display: Option<String>,
        path_lower: Option<String>,
    },
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    expires_in: Option<u64>,
}

#[derive(Debug)]
struct CachedToken {
    value: String,
    expires_at: Option<Instant>,
}

impl CachedToken {
    fn is_fresh(&self) -> bool {
        self.expires_at
            .map(|at| Instant::now() + TOKEN_EXPIRY_MARGIN < at)
            .unwrap_or(true)
    }
}

/// A non-success response from the Dropbox API.
#[derive(Debug)]
struct ApiFailure {
    status: u16,
    body: String,
}

impl ApiFailure {
    /// Dropbox answers 409 `reset` when a cursor can no longer be continued.
    fn is_cursor_reset(&self) -> bool {
        self.status == 409 && self.body.contains("reset")
    }

    fn into_error(self, endpoint: &str) -> AppError {
        AppError::external(format!(
            "Dropbox {endpoint} failed with status {}: {}",
            self.status, self.body
        ))
    }
}

/// Scans a Dropbox folder tree with `files/list_folder`.
pub struct DropboxStorageProvider {
    client: reqwest::Client,
    config: DropboxConfig,
    token: Mutex<Option<CachedToken>>,
}

impl fmt::Debug for DropboxStorageProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DropboxStorageProvider")
            .field("api_url", &self.config.api_url)
            .field("uses_refresh_token", &self.uses_refresh_token())
            .finish()
    }
}

impl DropboxStorageProvider {
    /// Create a provider. Requires an access token or a refresh token with
    /// app credentials.
    pub fn new(config: &DropboxConfig) -> AppResult<Self> {
        let has_refresh = !config.refresh_token.is_empty()
            && !config.app_key.is_empty()
            && !config.app_secret.is_empty();
        if config.access_token.is_empty() && !has_refresh {
            return Err(AppError::configuration(
                "Dropbox requires storage.dropbox.access_token or refresh_token with app_key and app_secret",
            ));
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| {
                AppError::with_source(ErrorKind::Configuration, "Failed to build HTTP client", e)
            })?;

        let token = if has_refresh {
            None
        } else {
            Some(CachedToken {
                value: config.access_token.clone(),
                expires_at: None,
            })
        };

        Ok(Self {
            client,
            config: config.clone(),
            token: Mutex::new(token),
        })
    }

    fn uses_refresh_token(&self) -> bool {
        !self.config.refresh_token.is_empty()
    }

    async fn access_token(&self) -> AppResult<String> {
        let mut guard = self.token.lock().await;
        if let Some(token) = guard.as_ref().filter(|t| t.is_fresh()) {
            return Ok(token.value.clone());
        }

        let refreshed = self.refresh_access_token().await?;
        let value = refreshed.value.clone();
        *guard = Some(refreshed);
        Ok(value)
    }

    fn token_request(&self) -> reqwest::RequestBuilder {
        self.client.post(&self.config.token_url).form(&[
            ("grant_type", "refresh_token"),
            ("refresh_token", self.config.refresh_token.as_str()),
            ("client_id", self.config.app_key.as_str()),
            ("client_secret", self.config.app_secret.as_str()),
        ])
    }

    async fn refresh_access_token(&self) -> AppResult<CachedToken> {
        debug!("Refreshing Dropbox access token");
        let response = self
            .token_request()
            .send()
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::ExternalService, "Dropbox token request failed", e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiFailure {
                status: status.as_u16(),
                body,
            }
            .into_error("oauth2/token"));
        }

        let token: TokenResponse = response.json().await.map_err(|e| {
            AppError::with_source(ErrorKind::ExternalService, "Invalid Dropbox token response", e)
        })?;
        info!(expires_in = ?token.expires_in, "Dropbox access token refreshed");

        Ok(CachedToken {
            value: token.access_token,
            expires_at: token
                .expires_in
                .map(|secs| Instant::now() + Duration::from_secs(secs)),
        })
    }

    async fn rpc(
        &self,
        endpoint: &str,
        body: &serde_json::Value,
    ) -> AppResult<Result<ListFolderPage, ApiFailure>> {
        let token = self.access_token().await?;
        let url = format!("{}/{endpoint}", self.config.api_url.trim_end_matches('/'));

        let response = self
            .client
            .post(&url)
            .bearer_auth(token)
            .json(body)
            .send()
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::ExternalService,
                    format!("Dropbox {endpoint} request failed"),
                    e,
                )
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Ok(Err(ApiFailure {
                status: status.as_u16(),
                body,
            }));
        }

        let page = response.json::<ListFolderPage>().await.map_err(|e| {
            AppError::with_source(
                ErrorKind::ExternalService,
                format!("Invalid Dropbox {endpoint} response"),
                e,
            )
        })?;
        Ok(Ok(page))
    }

    async fn list_folder(&self, root: &str) -> AppResult<ListFolderPage> {
        let body = json!({
            "path": api_path(root),
            "recursive": true,
            "include_deleted": false,
            "include_non_downloadable_files": false,
        });
        self.rpc("files/list_folder", &body)
            .await?
            .map_err(|failure| failure.into_error("files/list_folder"))
    }

    async fn list_folder_continue(&self, cursor: &str) -> AppResult<Result<ListFolderPage, ApiFailure>> {
        self.rpc("files/list_folder/continue", &json!({ "cursor": cursor }))
            .await
    }

    async fn drain(&self, mut page: ListFolderPage, scan: &mut ScanResult) -> AppResult<String> {
        loop {
            collect_page(&mut page.entries, scan);
            if !page.has_more {
                return Ok(page.cursor);
            }
            page = self
                .list_folder_continue(&page.cursor)
                .await?
                .map_err(|failure| failure.into_error("files/list_folder/continue"))?;
        }
    }
}

/// Dropbox addresses the account root as the empty string.
fn api_path(root: &str) -> String {
    let trimmed = root.trim_end_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    }
}

fn collect_page(entries: &mut Vec<DropboxEntry>, scan: &mut ScanResult) {
    for entry in entries.drain(..) {
        match entry {
            DropboxEntry::File {
                name,
                path_display,
                path_lower,
                size,
                server_modified,
            } => {
                let Some(path) = path_display.or(path_lower) else {
                    continue;
                };
                scan.entries.push(StorageObjectMeta {
                    path,
                    name,
                    size_bytes: size,
                    last_modified: server_modified,
                    is_directory: false,
                });
            }
            DropboxEntry::Folder {
                name,
                path_display,
                path_lower,
            } => {
                let Some(path) = path_display.or(path_lower) else {
                    continue;
                };
                scan.entries.push(StorageObjectMeta {
                    path,
                    name,
                    size_bytes: 0,
                    last_modified: None,
                    is_directory: true,
                });
            }
            DropboxEntry::Deleted {
                path_display,
                path_lower,
            } => {
                if let Some(path) = path_display.or(path_lower) {
                    scan.deleted_paths.push(path);
                }
            }
        }
    }
}

#[async_trait]
impl StorageProvider for DropboxStorageProvider {
    fn provider_type(&self) -> &str {
        "dropbox"
    }

    async fn health_check(&self) -> AppResult<bool> {
        match self.access_token().await {
            Ok(_) => Ok(true),
            Err(e) => {
                warn!(error = %e, "Dropbox health check failed");
                Ok(false)
            }
        }
    }

    async fn scan(&self, root: &str, cursor: Option<&str>) -> AppResult<ScanResult> {
        if let Some(cursor) = cursor {
            match self.list_folder_continue(cursor).await? {
                Ok(page) => {
                    let mut scan = ScanResult::default();
                    let next = self.drain(page, &mut scan).await?;
                    scan.cursor = Some(next);
                    debug!(
                        entries = scan.entries.len(),
                        deleted = scan.deleted_paths.len(),
                        "Dropbox incremental scan finished"
                    );
                    return Ok(scan);
                }
                Err(failure) if failure.is_cursor_reset() => {
                    warn!("Dropbox cursor was reset; falling back to a full scan");
                }
                Err(failure) => return Err(failure.into_error("files/list_folder/continue")),
            }
        }

        let first = self.list_folder(root).await?;
        let mut scan = ScanResult {
            is_full: true,
            ..ScanResult::default()
        };
        let next = self.drain(first, &mut scan).await?;
        scan.cursor = Some(next);
        info!(root = %root, entries = scan.entries.len(), "Dropbox full scan finished");
        Ok(scan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token_config() -> DropboxConfig {
        DropboxConfig {
            access_token: "sl.test".to_string(),
            ..DropboxConfig::default()
        }
    }

    #[test]
    fn test_new_requires_credentials() {
        let err = DropboxStorageProvider::new(&DropboxConfig::default()).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Configuration);
        assert!(DropboxStorageProvider::new(&token_config()).is_ok());
    }

    #[test]
    fn test_debug_hides_token() {
        let provider = DropboxStorageProvider::new(&token_config()).unwrap();
        let rendered = format!("{provider:?}");
        assert!(!rendered.contains("sl.test"));
    }

    #[test]
    fn test_api_path() {
        assert_eq!(api_path("/"), "");
        assert_eq!(api_path(""), "");
        assert_eq!(api_path("/05boxAPP/"), "/05boxAPP");
        assert_eq!(api_path("library"), "/library");
    }

    #[test]
    fn test_collect_page_splits_entries_by_tag() {
        let body = r#"{
            "entries": [
                {".tag": "folder", "name": "1과", "path_lower": "/lib/book/1과", "path_display": "/lib/Book/1과", "id": "id:a"},
                {".tag": "file", "name": "worksheet.pdf", "path_lower": "/lib/book/1과/worksheet.pdf",
                 "path_display": "/lib/Book/1과/worksheet.pdf", "id": "id:b", "size": 2048,
                 "server_modified": "2024-03-01T09:30:00Z", "client_modified": "2024-03-01T09:00:00Z", "rev": "015"},
                {".tag": "deleted", "name": "old.pdf", "path_lower": "/lib/book/old.pdf", "path_display": "/lib/Book/old.pdf"}
            ],
            "cursor": "AAE",
            "has_more": false
        }"#;
        let mut page: ListFolderPage = serde_json::from_str(body).unwrap();
        let mut scan = ScanResult::default();
        collect_page(&mut page.entries, &mut scan);

        assert_eq!(scan.entries.len(), 2);
        assert!(scan.entries[0].is_directory);
        let file = &scan.entries[1];
        assert_eq!(file.path, "/lib/Book/1과/worksheet.pdf");
        assert_eq!(file.size_bytes, 2048);
        assert!(file.last_modified.is_some());
        assert_eq!(scan.deleted_paths, vec!["/lib/Book/old.pdf".to_string()]);
        assert_eq!(page.cursor, "AAE");
    }

    #[test]
    fn test_cursor_reset_detection() {
        let reset = ApiFailure {
            status: 409,
            body: r#"{"error_summary": "reset/..", "error": {".tag": "reset"}}"#.to_string(),
        };
        assert!(reset.is_cursor_reset());
        let other = ApiFailure {
            status: 401,
            body: "expired_access_token".to_string(),
        };
        assert!(!other.is_cursor_reset());
        assert_eq!(other.into_error("files/list_folder").kind, ErrorKind::ExternalService);
    }

    #[test]
    fn test_token_request_is_form_encoded() {
        let config = DropboxConfig {
            refresh_token: "a b/c=".to_string(),
            app_key: "key".to_string(),
            app_secret: "secret".to_string(),
            ..DropboxConfig::default()
        };
        let provider = DropboxStorageProvider::new(&config).unwrap();
        let request = provider.token_request().build().unwrap();

        assert_eq!(
            request.headers()[reqwest::header::CONTENT_TYPE],
            "application/x-www-form-urlencoded"
        );
        let body = request.body().and_then(|b| b.as_bytes()).unwrap();
        assert_eq!(
            std::str::from_utf8(body).unwrap(),
            "grant_type=refresh_token&refresh_token=a+b%2Fc%3D&client_id=key&client_secret=secret"
        );
    }
}
