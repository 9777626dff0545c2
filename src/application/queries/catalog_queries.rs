//! Catalog Queries

use crate::domain::{AuthorId, MagazineId};

/// 获取作者档案（文章、杂志、话题领域）
#[derive(Debug, Clone)]
pub struct GetAuthorProfile {
    pub author_id: AuthorId,
}

/// 获取杂志及其文章集合
#[derive(Debug, Clone)]
pub struct GetMagazineIssue {
    pub magazine_id: MagazineId,
}

/// 生成整个 Catalog 的报表
#[derive(Debug, Clone)]
pub struct BuildCatalogReport;
