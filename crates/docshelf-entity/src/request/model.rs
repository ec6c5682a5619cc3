//! Title request entity models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::status::RequestStatus;

/// A title users asked to be added, with its vote count.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TitleRequest {
    /// Unique request identifier.
    pub id: Uuid,
    /// The requested title (trimmed).
    pub title: String,
    /// Number of votes received.
    pub request_count: i32,
    /// Anonymized IP of the most recent voter.
    pub requester_ip: Option<String>,
    /// Current status.
    pub status: RequestStatus,
    /// When the title was first requested.
    pub created_at: DateTime<Utc>,
    /// When the request was last voted on or updated.
    pub updated_at: DateTime<Utc>,
}

/// One vote, kept for rate limiting.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TitleRequestLog {
    /// Unique log identifier.
    pub id: Uuid,
    /// The requested title.
    pub title: String,
    /// Anonymized voter IP.
    pub requester_ip: String,
    /// When the vote was cast.
    pub created_at: DateTime<Utc>,
}

/// The public view of a request (no requester IP).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TitleRequestSummary {
    pub id: Uuid,
    pub title: String,
    pub request_count: i32,
    pub status: RequestStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<TitleRequest> for TitleRequestSummary {
    fn from(request: TitleRequest) -> Self {
        Self {
            id: request.id,
            title: request.title,
            request_count: request.request_count,
            status: request.status,
            created_at: request.created_at,
            updated_at: request.updated_at,
        }
    }
}
