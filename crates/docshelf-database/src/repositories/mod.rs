//! Repository implementations for the DocShelf tables.

pub mod category;
pub mod click;
pub mod document;
pub mod group;
pub mod request;
pub mod sync_log;

pub use category::CategoryRepository;
pub use click::ClickRepository;
pub use document::DocumentRepository;
pub use group::GroupRepository;
pub use request::{TitleRequestRepository, VoteRecord};
pub use sync_log::SyncLogRepository;
