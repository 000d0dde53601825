//! REST API controllers.

pub mod author_controller;
pub mod health_controller;
pub mod work_controller;

pub use health_controller::*;
