//! Storage provider implementations.

pub mod dropbox;
pub mod local;

pub use dropbox::DropboxStorageProvider;
pub use local::LocalStorageProvider;
