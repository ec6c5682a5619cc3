//! Admin handlers. Authentication is enforced upstream of this service.

pub mod analytics;
pub mod requests;
pub mod textbooks;
