//! Document domain entities.

pub mod click;
pub mod model;

pub use click::DocumentClick;
pub use model::{Document, DocumentUpdate, NewDocument};
