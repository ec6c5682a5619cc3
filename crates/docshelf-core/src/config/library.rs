//! Library tree and title-request configuration.

use serde::{Deserialize, Serialize};

/// Settings for materializing the library tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LibraryConfig {
    /// Rows fetched per round trip when loading active documents.
    #[serde(default = "default_fetch_page_size")]
    pub fetch_page_size: u64,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            fetch_page_size: default_fetch_page_size(),
        }
    }
}

/// Settings for the missing-title request system.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestConfig {
    /// Minimum title length after trimming.
    #[serde(default = "default_min_title_length")]
    pub min_title_length: usize,
    /// Votes allowed per title and requester within the window.
    #[serde(default = "default_daily_limit")]
    pub daily_limit: i64,
    /// Rate-limit window in hours.
    #[serde(default = "default_window_hours")]
    pub window_hours: i64,
}

impl Default for RequestConfig {
    fn default() -> Self {
        Self {
            min_title_length: default_min_title_length(),
            daily_limit: default_daily_limit(),
            window_hours: default_window_hours(),
        }
    }
}

fn default_fetch_page_size() -> u64 {
    1000
}

fn default_min_title_length() -> usize {
    2
}

fn default_daily_limit() -> i64 {
    5
}

fn default_window_hours() -> i64 {
    24
}
