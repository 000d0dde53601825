//! Service implementations.

pub mod author_service_impl;
pub mod work_service_impl;

pub use author_service_impl::AuthorServiceImpl;
pub use work_service_impl::WorkServiceImpl;

#[cfg(test)]
pub(crate) mod fakes;
