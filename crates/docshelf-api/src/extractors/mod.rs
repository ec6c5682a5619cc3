//! Custom Axum extractors.

pub mod client_ip;
pub mod json;
pub mod query;

pub use client_ip::ClientIp;
pub use json::ValidatedJson;
pub use query::parse_or_default;
