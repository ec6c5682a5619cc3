//! Remote file-storage configuration.

use serde::{Deserialize, Serialize};

/// Top-level storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Provider to scan: `"dropbox"` or `"local"`.
    #[serde(default = "default_provider")]
    pub provider: String,
    /// Library root within the provider; each child folder is a group.
    #[serde(default = "default_root_path")]
    pub root_path: String,
    /// File extensions (lowercase, without dot) imported as documents.
    #[serde(default = "default_allowed_extensions")]
    pub allowed_extensions: Vec<String>,
    /// Dropbox API settings.
    #[serde(default)]
    pub dropbox: DropboxConfig,
    /// Local filesystem settings.
    #[serde(default)]
    pub local: LocalStorageConfig,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            root_path: default_root_path(),
            allowed_extensions: default_allowed_extensions(),
            dropbox: DropboxConfig::default(),
            local: LocalStorageConfig::default(),
        }
    }
}

/// Dropbox API credentials and endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DropboxConfig {
    /// Long-lived access token (used when no refresh token is set).
    #[serde(default)]
    pub access_token: String,
    /// OAuth refresh token.
    #[serde(default)]
    pub refresh_token: String,
    /// App key for the refresh-token exchange.
    #[serde(default)]
    pub app_key: String,
    /// App secret for the refresh-token exchange.
    #[serde(default)]
    pub app_secret: String,
    /// RPC API base URL.
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// OAuth token endpoint.
    #[serde(default = "default_token_url")]
    pub token_url: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

impl Default for DropboxConfig {
    fn default() -> Self {
        Self {
            access_token: String::new(),
            refresh_token: String::new(),
            app_key: String::new(),
            app_secret: String::new(),
            api_url: default_api_url(),
            token_url: default_token_url(),
            timeout_seconds: default_timeout(),
        }
    }
}

/// Local filesystem storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocalStorageConfig {
    /// Directory that maps to the provider path `/`.
    #[serde(default = "default_local_root")]
    pub base_dir: String,
}

impl Default for LocalStorageConfig {
    fn default() -> Self {
        Self {
            base_dir: default_local_root(),
        }
    }
}

fn default_provider() -> String {
    "dropbox".to_string()
}

fn default_root_path() -> String {
    "/library".to_string()
}

fn default_allowed_extensions() -> Vec<String> {
    vec!["pdf".to_string()]
}

fn default_api_url() -> String {
    "https://api.dropboxapi.com/2".to_string()
}

fn default_token_url() -> String {
    "https://api.dropboxapi.com/oauth2/token".to_string()
}

fn default_timeout() -> u64 {
    60
}

fn default_local_root() -> String {
    "./data/library".to_string()
}
