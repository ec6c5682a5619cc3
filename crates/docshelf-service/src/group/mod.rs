//! Group organization: ordering, categorization and detail views.

pub mod service;

pub use service::GroupService;
