//! Route handlers organized by domain.

pub mod admin;
pub mod files;
pub mod health;
pub mod requests;
pub mod sync;
