//! Article - Aggregate Root

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ArticleId, ArticleTitle};
use crate::domain::author::{Author, AuthorId};
use crate::domain::magazine::{Magazine, MagazineId};

/// Article 聚合根 - 连接作者与杂志
///
/// 只能通过 `Catalog` 创建，创建时同时登记到注册表和目标杂志的文章集合。
///
/// 不变量:
/// - title 长度在 [5, 50] 之间，创建后不可修改
/// - author / magazine 始终指向同一 Catalog 中存在的实体
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    id: ArticleId,
    title: ArticleTitle,
    author: AuthorId,
    magazine: MagazineId,
    created_at: DateTime<Utc>,
}

impl Article {
    pub(crate) fn new(title: ArticleTitle, author: &Author, magazine: &Magazine) -> Self {
        Self {
            id: ArticleId::new(),
            title,
            author: author.id(),
            magazine: magazine.id(),
            created_at: Utc::now(),
        }
    }

    /// 仅替换作者引用
    pub(crate) fn set_author(&mut self, author: &Author) {
        self.author = author.id();
    }

    /// 仅替换杂志引用，不会在杂志之间移动文章集合
    pub(crate) fn set_magazine(&mut self, magazine: &Magazine) {
        self.magazine = magazine.id();
    }

    // Getters
    pub fn id(&self) -> ArticleId {
        self.id
    }

    pub fn title(&self) -> &ArticleTitle {
        &self.title
    }

    pub fn author_id(&self) -> AuthorId {
        self.author
    }

    pub fn magazine_id(&self) -> MagazineId {
        self.magazine
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
