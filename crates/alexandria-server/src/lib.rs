//! # Alexandria Server Library
//!
//! Dependency injection wiring and startup utilities for the
//! Alexandria server binary.

pub mod di;
pub mod startup;
