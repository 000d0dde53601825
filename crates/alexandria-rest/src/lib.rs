//! # Alexandria REST
//!
//! REST surface over the catalog lookup services. Provides the author
//! search and works-by-author endpoints, health checks and the Swagger UI.

pub mod controllers;
pub mod middleware;
pub mod openapi;
pub mod responses;
pub mod router;
pub mod state;

pub use router::*;
pub use state::*;
