//! Core type definitions used across the DocShelf workspace.

pub mod pagination;
pub mod sorting;

pub use pagination::PageRequest;
pub use sorting::GroupSort;
