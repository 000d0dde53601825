//! Author key value object.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Canonical prefix for author keys, as used by the upstream catalog.
pub const AUTHOR_KEY_PREFIX: &str = "/authors/";

/// Error type for author key validation.
#[derive(Debug, Error)]
#[error("author key must not be blank")]
pub struct AuthorKeyError;

/// Author key value object carrying the canonical identifier form.
///
/// Callers may pass identifiers in any of the accepted spellings
/// (`/authors/OL23919A`, `authors/OL23919A`, `OL23919A`); construction
/// rewrites them all to the canonical `/authors/...` form so the same
/// logical author always maps to the same key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AuthorKey(String);

impl AuthorKey {
    /// Creates a new key after normalizing the raw identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AuthorKeyError`] when the input is empty or whitespace-only.
    pub fn new(raw: impl Into<String>) -> Result<Self, AuthorKeyError> {
        let raw = raw.into();
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(AuthorKeyError);
        }

        let canonical = if trimmed.starts_with(AUTHOR_KEY_PREFIX) {
            trimmed.to_string()
        } else if trimmed.starts_with("authors/") {
            format!("/{}", trimmed)
        } else {
            format!("{}{}", AUTHOR_KEY_PREFIX, trimmed)
        };

        Ok(Self(canonical))
    }

    /// Creates a key without normalization (for trusted sources).
    ///
    /// This should only be used for data coming from trusted sources
    /// like the database where the key was already normalized.
    #[must_use]
    pub fn new_unchecked(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Returns the canonical key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the bare identifier without the `/authors/` prefix.
    #[must_use]
    pub fn bare_id(&self) -> &str {
        self.0.strip_prefix(AUTHOR_KEY_PREFIX).unwrap_or(&self.0)
    }
}

impl fmt::Display for AuthorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for AuthorKey {
    type Error = AuthorKeyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<AuthorKey> for String {
    fn from(key: AuthorKey) -> Self {
        key.0
    }
}

impl AsRef<str> for AuthorKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
