//! # Alexandria Service
//!
//! Cache-aside lookup services over the catalog store.
//!
//! Both resolvers follow the same shape, factored into
//! [`cache_aside::fetch_on_miss`]: consult the local store first, and only
//! on an empty result fetch from the upstream catalog, persist what came
//! back, and answer from the freshly stored rows. Stored rows never expire,
//! so every repeat lookup is local.

pub mod author_service;
pub mod cache_aside;
pub mod dto;
pub mod extract;
pub mod mappers;
pub mod work_service;

pub mod r#impl;

pub use author_service::AuthorService;
pub use cache_aside::fetch_on_miss;
pub use dto::*;
pub use r#impl::{AuthorServiceImpl, WorkServiceImpl};
pub use work_service::WorkService;
