//! Catalog Commands

use crate::domain::{ArticleId, AuthorId, MagazineId};

/// 创建作者命令
#[derive(Debug, Clone)]
pub struct CreateAuthor {
    pub name: String,
}

/// 创建杂志命令
#[derive(Debug, Clone)]
pub struct CreateMagazine {
    pub name: String,
    pub category: String,
}

/// 作者发表文章命令
#[derive(Debug, Clone)]
pub struct AddArticle {
    pub author_id: AuthorId,
    pub magazine_id: MagazineId,
    pub title: String,
}

/// 重命名杂志命令
#[derive(Debug, Clone)]
pub struct RenameMagazine {
    pub magazine_id: MagazineId,
    pub name: String,
}

/// 修改杂志分类命令
#[derive(Debug, Clone)]
pub struct ChangeCategory {
    pub magazine_id: MagazineId,
    pub category: String,
}

/// 重新指派文章作者命令
#[derive(Debug, Clone)]
pub struct ReassignAuthor {
    pub article_id: ArticleId,
    pub author_id: AuthorId,
}

/// 重新指派文章杂志命令（不移动文章集合）
#[derive(Debug, Clone)]
pub struct ReassignMagazine {
    pub article_id: ArticleId,
    pub magazine_id: MagazineId,
}

/// 转移文章命令（同步更新文章集合）
#[derive(Debug, Clone)]
pub struct TransferArticle {
    pub article_id: ArticleId,
    pub magazine_id: MagazineId,
}
