//! Result type aliases for Alexandria.

use crate::AlexandriaError;

/// A specialized `Result` type for Alexandria operations.
pub type AlexandriaResult<T> = Result<T, AlexandriaError>;
