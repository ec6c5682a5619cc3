//! Title request voting.

pub mod ip;
pub mod service;

pub use ip::anonymize_ip;
pub use service::{RequestService, VoteOutcome, normalize_title};
