//! 应用层 - 命令（写操作）
//!
//! CQRS 命令侧：所有对 Catalog 的修改

mod catalog_commands;

pub mod handlers;

pub use catalog_commands::*;
