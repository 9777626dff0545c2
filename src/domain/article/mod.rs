//! Article - 文章
//!
//! 职责:
//! - 不可变标题
//! - 可重新指派的作者 / 杂志引用

mod aggregate;
mod value_objects;

pub use aggregate::Article;
pub use value_objects::{ArticleId, ArticleTitle, ARTICLE_TITLE_LENGTH};
