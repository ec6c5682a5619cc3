//! Library tree materialization.
//!
//! Flat document rows are grouped per group, path-normalized against the
//! group root, folded into a folder tree, pruned and ordered. Everything
//! except [`LibraryService`] is pure and synchronous.

pub mod builder;
pub mod natural;
pub mod path;
pub mod prune;
pub mod service;
pub mod source;

pub use builder::build_tree;
pub use natural::natural_cmp;
pub use path::{relative_segments, strip_group_root};
pub use prune::{has_documents, prune};
pub use service::{LibraryAssembly, LibraryService, assemble};
pub use source::LibrarySource;
