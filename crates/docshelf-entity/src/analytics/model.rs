//! Analytics result models.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

use super::period::AnalyticsPeriod;
use crate::document::Document;
use crate::group::Group;

/// Clicks in one hour of the day (0-23, KST).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HourBucket {
    pub hour: u32,
    pub count: i64,
}

/// Clicks on one calendar day (KST).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayBucket {
    pub date: NaiveDate,
    pub count: i64,
}

/// Clicks on one weekday (KST).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekdayBucket {
    pub weekday: String,
    pub count: i64,
}

/// An active document with its group, as returned by ranking queries.
#[derive(Debug, Clone, FromRow)]
pub struct TopDocumentRow {
    pub id: Uuid,
    pub name: String,
    pub storage_path: String,
    pub click_count: i64,
    pub group_id: Uuid,
    pub group_name: String,
    pub group_path: String,
}

/// A ranked document with its group and top-level folder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopDocument {
    pub id: Uuid,
    pub name: String,
    pub storage_path: String,
    pub click_count: i64,
    pub group_id: Uuid,
    pub group_name: String,
    /// First folder below the group root, or the root bucket name.
    pub folder: String,
}

/// Click aggregate for one top-level folder of a group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FolderStats {
    pub folder_name: String,
    pub folder_path: String,
    pub total_clicks: i64,
    pub file_count: i64,
    /// Rounded mean clicks per document.
    pub average_clicks: i64,
}

/// A folder ranked across all groups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopFolder {
    pub group_id: Uuid,
    pub group_name: String,
    #[serde(flatten)]
    pub stats: FolderStats,
}

/// A group ranked by clicks.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct TopGroup {
    pub id: Uuid,
    pub name: String,
    pub storage_path: String,
    pub total_clicks: i64,
    pub file_count: i64,
}

/// Click overview for a reporting window.
#[derive(Debug, Clone, Serialize)]
pub struct ClickOverview {
    pub period: AnalyticsPeriod,
    pub since: DateTime<Utc>,
    pub total_clicks: i64,
    /// Number of days that saw at least one click.
    pub days_tracked: usize,
    /// Total divided by `days_tracked`, rounded.
    pub average_per_day: i64,
    pub hourly: Vec<HourBucket>,
    pub daily: Vec<DayBucket>,
    pub weekday: Vec<WeekdayBucket>,
    pub top_documents: Vec<TopDocument>,
}

/// Hour-by-hour clicks for one day.
#[derive(Debug, Clone, Serialize)]
pub struct HourlyReport {
    pub date: NaiveDate,
    pub hours: Vec<HourBucket>,
    pub total_clicks: i64,
    /// Every hour that reached `peak_count` (empty when there were no clicks).
    pub peak_hours: Vec<u32>,
    pub peak_count: i64,
}

/// Totals for a group detail view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GroupStatistics {
    pub total_documents: usize,
    pub total_clicks: i64,
    pub total_folders: usize,
}

/// Admin view of one group.
#[derive(Debug, Clone, Serialize)]
pub struct GroupDetail {
    pub group: Group,
    /// Active documents, most clicked first.
    pub documents: Vec<Document>,
    pub folder_stats: Vec<FolderStats>,
    /// The last 30 days (KST), oldest first, zero-filled.
    pub daily_clicks: Vec<DayBucket>,
    pub statistics: GroupStatistics,
}
