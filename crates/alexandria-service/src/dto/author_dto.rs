//! Author DTOs.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Author as returned by the REST surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthorSummary {
    /// Canonical author identifier, e.g. `/authors/OL23919A`.
    #[schema(example = "/authors/OL23919A")]
    pub author_id: String,

    /// Display name, absent when the catalog never supplied one.
    #[schema(example = "J. K. Rowling")]
    pub author_name: Option<String>,
}
