//! # docshelf-api
//!
//! HTTP API layer for DocShelf built on Axum.
//!
//! Provides the library tree, click, title request, admin and sync
//! endpoints together with middleware (logging, CORS, compression),
//! extractors, DTOs, and error mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use error::ApiError;
pub use state::AppState;
