//! Analytics service.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{Duration, NaiveDate, Utc};
use uuid::Uuid;

use docshelf_core::result::AppResult;
use docshelf_database::repositories::{ClickRepository, DocumentRepository, GroupRepository};
use docshelf_entity::analytics::{
    AnalyticsPeriod, ClickOverview, HourlyReport, RankingPeriod, TopDocument, TopDocumentRow,
    TopFolder, TopGroup,
};

use super::buckets;
use super::folders::{folder_bucket, folder_stats};

/// Documents listed in the overview.
const OVERVIEW_TOP_DOCUMENTS: i64 = 20;

fn to_top_document(row: TopDocumentRow) -> TopDocument {
    let (folder, _) = folder_bucket(&row.storage_path, &row.group_path);
    TopDocument {
        id: row.id,
        name: row.name,
        storage_path: row.storage_path,
        click_count: row.click_count,
        group_id: row.group_id,
        group_name: row.group_name,
        folder,
    }
}

/// Aggregates click data for the admin dashboard.
#[derive(Debug, Clone)]
pub struct AnalyticsService {
    click_repo: Arc<ClickRepository>,
    document_repo: Arc<DocumentRepository>,
    group_repo: Arc<GroupRepository>,
}

impl AnalyticsService {
    /// Creates a new analytics service.
    pub fn new(
        click_repo: Arc<ClickRepository>,
        document_repo: Arc<DocumentRepository>,
        group_repo: Arc<GroupRepository>,
    ) -> Self {
        Self {
            click_repo,
            document_repo,
            group_repo,
        }
    }

    /// Click overview since the start of `period`.
    pub async fn overview(&self, period: AnalyticsPeriod) -> AppResult<ClickOverview> {
        let now = Utc::now();
        let since = buckets::period_start(period, now);
        let clicks = self.click_repo.timestamps_between(since, now).await?;

        let daily = buckets::daily(&clicks);
        let total_clicks = clicks.len() as i64;
        let days_tracked = daily.len();
        let average_per_day = if days_tracked == 0 {
            0
        } else {
            (total_clicks as f64 / days_tracked as f64).round() as i64
        };

        let top_documents = self
            .document_repo
            .top_by_clicks(OVERVIEW_TOP_DOCUMENTS)
            .await?
            .into_iter()
            .map(to_top_document)
            .collect();

        Ok(ClickOverview {
            period,
            since,
            total_clicks,
            days_tracked,
            average_per_day,
            hourly: buckets::hourly(&clicks),
            weekday: buckets::weekday(&clicks),
            daily,
            top_documents,
        })
    }

    /// Hour-by-hour clicks for a KST calendar day (today by default).
    pub async fn hourly(&self, date: Option<NaiveDate>) -> AppResult<HourlyReport> {
        let date = date.unwrap_or_else(|| buckets::kst_date(Utc::now()));
        let from = buckets::kst_day_start(date);
        let clicks = self
            .click_repo
            .timestamps_between(from, from + Duration::days(1))
            .await?;

        let hours = buckets::hourly(&clicks);
        let (peak_hours, peak_count) = buckets::peak_hours(&hours);
        Ok(HourlyReport {
            date,
            total_clicks: clicks.len() as i64,
            hours,
            peak_hours,
            peak_count,
        })
    }

    /// Most clicked active documents.
    pub async fn top_documents(&self, limit: i64) -> AppResult<Vec<TopDocument>> {
        let rows = self.document_repo.top_by_clicks(limit.clamp(1, 100)).await?;
        Ok(rows.into_iter().map(to_top_document).collect())
    }

    /// Most clicked top-level folders across all groups.
    pub async fn top_folders(&self, limit: usize) -> AppResult<Vec<TopFolder>> {
        let rows = self.document_repo.find_active_with_groups().await?;

        let mut by_group: HashMap<Uuid, (String, String, Vec<(String, i64)>)> = HashMap::new();
        for row in rows {
            by_group
                .entry(row.group_id)
                .or_insert_with(|| (row.group_name.clone(), row.group_path.clone(), Vec::new()))
                .2
                .push((row.storage_path, row.click_count));
        }

        let mut folders: Vec<TopFolder> = by_group
            .into_iter()
            .flat_map(|(group_id, (group_name, group_path, documents))| {
                folder_stats(
                    &group_path,
                    documents.iter().map(|(path, clicks)| (path.as_str(), *clicks)),
                )
                .into_iter()
                .map(move |stats| TopFolder {
                    group_id,
                    group_name: group_name.clone(),
                    stats,
                })
                .collect::<Vec<_>>()
            })
            .collect();

        folders.sort_by(|a, b| {
            b.stats
                .total_clicks
                .cmp(&a.stats.total_clicks)
                .then_with(|| a.group_name.cmp(&b.group_name))
                .then_with(|| a.stats.folder_name.cmp(&b.stats.folder_name))
        });
        folders.truncate(limit.clamp(1, 100));
        Ok(folders)
    }

    /// Groups ranked by clicks within `period`.
    pub async fn top_groups(&self, limit: i64, period: RankingPeriod) -> AppResult<Vec<TopGroup>> {
        let limit = limit.clamp(1, 100);
        match period.days() {
            None => self.group_repo.top_by_clicks(limit).await,
            Some(days) => {
                let since = Utc::now() - Duration::days(days);
                self.click_repo.top_groups_since(since, limit).await
            }
        }
    }
}
