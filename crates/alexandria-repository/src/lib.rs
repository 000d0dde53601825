//! # Alexandria Repository
//!
//! SQLite-backed persistence for the catalog store.
//!
//! ```text
//! Service
//!   ↓  Arc<dyn AuthorRepository> / Arc<dyn WorkRepository>   (traits.rs)
//! SqliteAuthorRepository / SqliteWorkRepository              (sqlite/)
//!   ↓  Arc<dyn DatabasePoolInterface>                        (pool.rs)
//! SQLite (authors, works, work_authors, work_subjects, work_covers)
//! ```
//!
//! The store is a materialized cache of upstream catalog lookups: rows are
//! written once on a miss and never expire. Saves are therefore upserts,
//! and work-to-author links only ever accumulate.

pub mod pool;
pub mod sqlite;
pub mod traits;

pub use pool::*;
pub use sqlite::*;
pub use traits::*;
