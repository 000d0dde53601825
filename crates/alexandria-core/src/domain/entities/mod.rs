//! Catalog entities.

pub mod author;
pub mod work;

pub use author::*;
pub use work::*;
