//! Title request (voting) entities.

pub mod model;
pub mod status;

pub use model::{TitleRequest, TitleRequestLog, TitleRequestSummary};
pub use status::RequestStatus;
