//! Domain Layer - 领域层
//!
//! 三类实体组成一张关系图:
//! - Author: 作者，关系全部通过扫描文章注册表推导
//! - Magazine: 杂志，持有本刊的有序文章集合
//! - Article: 文章，连接一个作者和一本杂志
//!
//! Catalog 是显式传递的注册表，持有以上全部实体

pub mod article;
pub mod author;
pub mod catalog;
pub mod errors;
pub mod magazine;

pub use article::{Article, ArticleId, ArticleTitle};
pub use author::{Author, AuthorId, AuthorName};
pub use catalog::{Catalog, CatalogError};
pub use errors::{Field, ValidationError};
pub use magazine::{Category, Magazine, MagazineId, MagazineName};
