//! # Alexandria Domain
//!
//! Domain entities and value objects for Alexandria.
//! This module contains the core catalog concepts of the application.

pub mod entities;
pub mod value_objects;

pub use entities::*;
pub use value_objects::*;
