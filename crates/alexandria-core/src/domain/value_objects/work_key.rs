//! Work key value object.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Error type for work key validation.
#[derive(Debug, Error)]
#[error("work key must not be blank")]
pub struct WorkKeyError;

/// Work key value object, e.g. `/works/OL15331W`.
///
/// Work keys are stored exactly as the upstream catalog reports them;
/// unlike [`super::AuthorKey`] they carry no rewriting rules.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct WorkKey(String);

impl WorkKey {
    /// Creates a new key after trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`WorkKeyError`] when the input is empty or whitespace-only.
    pub fn new(raw: impl Into<String>) -> Result<Self, WorkKeyError> {
        let raw = raw.into();
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(WorkKeyError);
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Creates a key without validation (for trusted sources).
    ///
    /// This should only be used for data coming from trusted sources
    /// like the database where the key was already validated.
    #[must_use]
    pub fn new_unchecked(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Returns the key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WorkKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for WorkKey {
    type Error = WorkKeyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<WorkKey> for String {
    fn from(key: WorkKey) -> Self {
        key.0
    }
}

impl AsRef<str> for WorkKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
