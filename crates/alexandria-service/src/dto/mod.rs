//! Data transfer objects for the REST surface.

pub mod author_dto;
pub mod work_dto;

pub use author_dto::AuthorSummary;
pub use work_dto::WorkSummary;
