//! Document click events.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// One recorded click on a document.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DocumentClick {
    /// Unique click identifier.
    pub id: Uuid,
    /// The clicked document.
    pub document_id: Uuid,
    /// When the click happened.
    pub clicked_at: DateTime<Utc>,
}
