//! Sync log entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::status::{SyncKind, SyncRunStatus};

/// A record of one synchronization run.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SyncLog {
    /// Unique log identifier.
    pub id: Uuid,
    /// Full or incremental.
    pub kind: SyncKind,
    /// Run status.
    pub status: SyncRunStatus,
    /// When the run started.
    pub started_at: DateTime<Utc>,
    /// When the run finished (completed or failed).
    pub finished_at: Option<DateTime<Utc>>,
    /// Groups created during the run.
    pub groups_created: i32,
    /// Documents inserted.
    pub documents_added: i32,
    /// Documents whose metadata changed.
    pub documents_updated: i32,
    /// Inactive documents that reappeared.
    pub documents_reactivated: i32,
    /// Documents marked inactive.
    pub documents_deactivated: i32,
    /// Failure message, when the run failed.
    pub error_message: Option<String>,
    /// Provider cursor recorded at the end of the run.
    pub cursor: Option<String>,
}

impl SyncLog {
    /// Run duration in milliseconds, once finished.
    pub fn duration_ms(&self) -> Option<i64> {
        self.finished_at
            .map(|finished| (finished - self.started_at).num_milliseconds())
    }
}

/// Counters accumulated while applying a sync plan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncCounters {
    /// Groups created.
    pub groups_created: i32,
    /// Documents inserted.
    pub documents_added: i32,
    /// Documents updated in place.
    pub documents_updated: i32,
    /// Documents reactivated.
    pub documents_reactivated: i32,
    /// Documents deactivated.
    pub documents_deactivated: i32,
}
