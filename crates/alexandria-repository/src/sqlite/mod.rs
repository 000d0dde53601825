//! SQLite repository implementations.

pub mod author_repository;
pub mod work_repository;

pub use author_repository::SqliteAuthorRepository;
pub use work_repository::SqliteWorkRepository;
