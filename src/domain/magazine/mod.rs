//! Magazine - 杂志
//!
//! 职责:
//! - 杂志名称与分类（可修改，带校验）
//! - 本杂志的有序文章集合

mod aggregate;
mod value_objects;

pub use aggregate::Magazine;
pub use value_objects::{Category, MagazineId, MagazineName, MAGAZINE_NAME_LENGTH};
