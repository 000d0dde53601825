//! Work DTOs.

use crate::dto::AuthorSummary;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Work as returned by the REST surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WorkSummary {
    /// Canonical work identifier, e.g. `/works/OL15331W`.
    #[schema(example = "/works/OL15331W")]
    pub work_id: String,

    /// Title; `Unknown Title` when the catalog never supplied one.
    #[schema(example = "Harry Potter and the Philosopher's Stone")]
    pub title: String,

    /// Prose description, when available.
    pub description: Option<String>,

    /// Subject tags in catalog order.
    pub subjects: Vec<String>,

    /// Numeric cover identifiers in catalog order.
    pub covers: Vec<i64>,

    /// Every author linked to this work, in link order.
    pub authors: Vec<AuthorSummary>,
}
