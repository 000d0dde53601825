//! Value objects for the catalog domain.

pub mod author_key;
pub mod work_key;

pub use author_key::*;
pub use work_key::*;
