//! Pressroom - 作者 / 杂志 / 文章内存关系模型
//!
//! 架构设计: DDD + CQRS
//!
//! 领域层 (domain/):
//! - Author / Magazine / Article 实体与值对象
//! - Catalog: 显式传递的文章注册表
//!
//! 应用层 (application/):
//! - Commands: CQRS 命令处理器
//! - Queries: CQRS 查询处理器与报表 DTO
//! - Seed: 从 TOML 种子数据构建 Catalog
//!
//! 配置 (config/): 默认值 < 配置文件 < 环境变量

pub mod application;
pub mod config;
pub mod domain;

pub use config::{load_config, AppConfig};
pub use domain::{
    Article, ArticleId, Author, AuthorId, Catalog, CatalogError, Category, Field, Magazine,
    MagazineId, ValidationError,
};
