//! Synchronization schedule configuration.

use serde::{Deserialize, Serialize};

/// Scheduled storage synchronization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncConfig {
    /// Whether the cron scheduler runs syncs automatically.
    #[serde(default)]
    pub schedule_enabled: bool,
    /// Cron expression (with seconds) for incremental syncs.
    #[serde(default = "default_incremental_cron")]
    pub incremental_cron: String,
    /// Cron expression (with seconds) for full syncs.
    #[serde(default = "default_full_cron")]
    pub full_cron: String,
    /// Number of sync logs returned by the log listing.
    #[serde(default = "default_log_limit")]
    pub log_limit: i64,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            schedule_enabled: false,
            incremental_cron: default_incremental_cron(),
            full_cron: default_full_cron(),
            log_limit: default_log_limit(),
        }
    }
}

fn default_incremental_cron() -> String {
    "0 */30 * * * *".to_string()
}

fn default_full_cron() -> String {
    "0 0 4 * * *".to_string()
}

fn default_log_limit() -> i64 {
    20
}
