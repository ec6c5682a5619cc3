//! Document click tracking.

pub mod service;

pub use service::DocumentService;
