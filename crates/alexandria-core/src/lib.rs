//! # Alexandria Core
//!
//! Core types, domain entities, and error definitions for Alexandria.
//! This crate provides the foundational abstractions used across all layers
//! of the catalog lookup service.

pub mod domain;
pub mod error;
pub mod result;

pub use domain::*;
pub use error::*;
pub use result::*;

// Re-export shaku for dependency injection
pub use shaku::Interface;
