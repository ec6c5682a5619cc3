//! Title request repository implementation.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use docshelf_core::error::{AppError, ErrorKind};
use docshelf_core::result::AppResult;
use docshelf_entity::request::{RequestStatus, TitleRequest};

/// Outcome of [`TitleRequestRepository::vote`].
#[derive(Debug)]
pub enum VoteRecord {
    /// The vote was logged. `prior_votes` counts this IP's earlier votes in the window.
    Recorded {
        request: TitleRequest,
        is_new: bool,
        prior_votes: i64,
    },
    /// The IP already used its votes for the title; nothing was written.
    LimitReached,
}

/// Repository for title requests and their vote log.
#[derive(Debug, Clone)]
pub struct TitleRequestRepository {
    pool: PgPool,
}

impl TitleRequestRepository {
    /// Create a new title request repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a request by ID.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<TitleRequest>> {
        sqlx::query_as::<_, TitleRequest>("SELECT * FROM title_requests WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find request", e))
    }

    /// Log a vote, then bump the existing request or create a new one.
    ///
    /// The per-IP count and the insert run in one transaction holding an
    /// advisory lock on (title, ip), so concurrent votes cannot exceed `limit`.
    pub async fn vote(
        &self,
        title: &str,
        requester_ip: &str,
        since: DateTime<Utc>,
        limit: i64,
    ) -> AppResult<VoteRecord> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        sqlx::query("SELECT pg_advisory_xact_lock(hashtext($1), hashtext($2))")
            .bind(title)
            .bind(requester_ip)
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to lock votes", e))?;

        let prior_votes: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM title_request_logs \
             WHERE title = $1 AND requester_ip = $2 AND created_at >= $3",
        )
        .bind(title)
        .bind(requester_ip)
        .bind(since)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count votes", e))?;

        if prior_votes >= limit {
            return Ok(VoteRecord::LimitReached);
        }

        sqlx::query(
            "INSERT INTO title_request_logs (id, title, requester_ip, created_at) \
             VALUES ($1, $2, $3, NOW())",
        )
        .bind(Uuid::new_v4())
        .bind(title)
        .bind(requester_ip)
        .execute(&mut *tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to log vote", e))?;

        let existing = sqlx::query_as::<_, TitleRequest>(
            "UPDATE title_requests SET request_count = request_count + 1, requester_ip = $2, \
             updated_at = NOW() WHERE title = $1 RETURNING *",
        )
        .bind(title)
        .bind(requester_ip)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update request", e))?;

        let (request, is_new) = match existing {
            Some(request) => (request, false),
            None => {
                let created = sqlx::query_as::<_, TitleRequest>(
                    "INSERT INTO title_requests (id, title, request_count, requester_ip, status, \
                     created_at, updated_at) VALUES ($1, $2, 1, $3, $4, NOW(), NOW()) RETURNING *",
                )
                .bind(Uuid::new_v4())
                .bind(title)
                .bind(requester_ip)
                .bind(RequestStatus::Pending)
                .fetch_one(&mut *tx)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to create request", e)
                })?;
                (created, true)
            }
        };

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit vote", e)
        })?;
        Ok(VoteRecord::Recorded {
            request,
            is_new,
            prior_votes,
        })
    }

    /// Most-voted requests, optionally filtered by status.
    pub async fn list_top(
        &self,
        status: Option<RequestStatus>,
        limit: i64,
    ) -> AppResult<Vec<TitleRequest>> {
        sqlx::query_as::<_, TitleRequest>(
            "SELECT * FROM title_requests WHERE ($1::title_request_status IS NULL OR status = $1) \
             ORDER BY request_count DESC, updated_at DESC LIMIT $2",
        )
        .bind(status)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list requests", e))
    }

    /// Change a request's status.
    pub async fn update_status(&self, id: Uuid, status: RequestStatus) -> AppResult<TitleRequest> {
        sqlx::query_as::<_, TitleRequest>(
            "UPDATE title_requests SET status = $2, updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(status)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update request", e))?
        .ok_or_else(|| AppError::not_found(format!("Request {id} not found")))
    }
}
