//! # docshelf-database
//!
//! PostgreSQL connection management and repository implementations for the
//! DocShelf tables. The schema itself is managed outside this crate.

pub mod connection;
pub mod repositories;

pub use connection::{DatabasePool, DbTransaction};
