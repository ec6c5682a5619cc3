//! # docshelf-core
//!
//! Core crate for DocShelf. Contains configuration schemas, the storage
//! provider trait, pagination/sorting types, and the unified error system.
//!
//! This crate has **no** internal dependencies on other DocShelf crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
