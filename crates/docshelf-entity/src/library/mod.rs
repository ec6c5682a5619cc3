//! Library tree entities: the derived view served by the tree endpoint.

pub mod listing;
pub mod tree;

pub use listing::{LibraryGroup, LibraryRow, LibraryStats, LibraryTree};
pub use tree::{FolderNode, TreeDocument, TreeNode};
