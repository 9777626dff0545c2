//! Command Handlers 实现

mod catalog_handlers;

pub use catalog_handlers::*;
