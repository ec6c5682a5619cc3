//! Convenience result type alias for DocShelf.

use crate::error::AppError;

/// A specialized `Result` type for DocShelf operations.
pub type AppResult<T> = Result<T, AppError>;
