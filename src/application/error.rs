//! 应用层错误定义
//!
//! 统一的命令/查询错误类型

use thiserror::Error;
use uuid::Uuid;

use crate::domain::{CatalogError, ValidationError};

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 资源未找到
    #[error("{resource_type} not found: {id}")]
    NotFound {
        resource_type: &'static str,
        id: Uuid,
    },

    /// 验证错误
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// 种子数据引用了未声明的作者/杂志
    #[error("Unknown {kind} referenced: {name}")]
    UnknownReference { kind: &'static str, name: String },

    /// 种子数据无法读取或解析
    #[error("Seed error: {0}")]
    Seed(String),
}

impl ApplicationError {
    /// 创建 NotFound 错误
    pub fn not_found(resource_type: &'static str, id: Uuid) -> Self {
        Self::NotFound { resource_type, id }
    }

    pub fn unknown_reference(kind: &'static str, name: impl Into<String>) -> Self {
        Self::UnknownReference {
            kind,
            name: name.into(),
        }
    }

    pub fn seed(message: impl Into<String>) -> Self {
        Self::Seed(message.into())
    }
}

impl From<CatalogError> for ApplicationError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::Validation(e) => Self::Validation(e),
            CatalogError::AuthorNotFound(id) => Self::not_found("Author", *id.as_uuid()),
            CatalogError::MagazineNotFound(id) => Self::not_found("Magazine", *id.as_uuid()),
            CatalogError::ArticleNotFound(id) => Self::not_found("Article", *id.as_uuid()),
        }
    }
}
