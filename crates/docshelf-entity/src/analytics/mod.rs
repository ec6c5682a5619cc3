//! Click analytics views.

pub mod model;
pub mod period;

pub use model::{
    ClickOverview, DayBucket, FolderStats, GroupDetail, GroupStatistics, HourBucket,
    HourlyReport, TopDocument, TopDocumentRow, TopFolder, TopGroup, WeekdayBucket,
};
pub use period::{AnalyticsPeriod, RankingPeriod};
