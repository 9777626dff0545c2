//! Author - 作者
//!
//! 职责:
//! - 作者身份与姓名
//! - 基于文章注册表推导的查询（文章、杂志、话题领域）

mod aggregate;
mod value_objects;

pub use aggregate::Author;
pub use value_objects::{AuthorId, AuthorName};
