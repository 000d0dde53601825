//! # Alexandria Client
//!
//! HTTP access to the upstream OpenLibrary catalog API.
//!
//! The [`CatalogClient`] trait is the seam the service layer depends on;
//! [`OpenLibraryClient`] is its reqwest implementation. Upstream "nothing
//! there" responses (HTTP 404 or a JSON `null` body) surface as `Ok(None)`
//! so callers can treat them as cache misses with no upstream data, while
//! transport and decode failures surface as `ExternalService` errors.

pub mod catalog_client;
pub mod openlibrary;

pub use catalog_client::*;
pub use openlibrary::{OpenLibraryClient, OpenLibraryClientParameters};
