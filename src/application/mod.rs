//! 应用层 - 用例编排
//!
//! 包含：
//! - commands: CQRS 命令及处理器
//! - queries: CQRS 查询及处理器（报表 DTO）
//! - seed: 种子数据导入
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod queries;
pub mod seed;

// Re-exports
pub use commands::{
    AddArticle,
    ChangeCategory,
    CreateAuthor,
    CreateMagazine,
    ReassignAuthor,
    ReassignMagazine,
    RenameMagazine,
    TransferArticle,
    // Handlers
    handlers::{CatalogCommandHandler, CommandHandler},
};

pub use error::ApplicationError;

pub use queries::{
    BuildCatalogReport,
    GetAuthorProfile,
    GetMagazineIssue,
    // Handlers
    handlers::{
        ArticleSummary, AuthorProfile, CatalogQueryHandler, CatalogReport, MagazineIssue,
        MagazineSummary, QueryHandler,
    },
};

pub use seed::{import_seed, SeedArticle, SeedAuthor, SeedData, SeedMagazine, SeedSummary};
