//! 应用层 - 查询（读操作）
//!
//! CQRS 查询侧：从 Catalog 推导报表视图

mod catalog_queries;

pub mod handlers;

pub use catalog_queries::*;
