//! # docshelf-entity
//!
//! Domain entity models for DocShelf. Every struct in this crate
//! represents a database table row, a query projection, or a derived view
//! such as the library tree. Database entities derive `sqlx::FromRow`.

pub mod analytics;
pub mod category;
pub mod document;
pub mod group;
pub mod library;
pub mod request;
pub mod sync;
