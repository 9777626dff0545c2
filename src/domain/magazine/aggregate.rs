//! Magazine - Aggregate Root

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::{Category, MagazineId, MagazineName};
use crate::domain::article::ArticleId;
use crate::domain::author::{Author, AuthorId};
use crate::domain::catalog::Catalog;

/// Magazine 聚合根
///
/// 不变量:
/// - name 长度在 [2, 16] 之间
/// - category 非空
/// - articles 按创建顺序排列，同一篇文章最多出现一次
/// - articles 只在文章创建（或显式转移）时追加
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Magazine {
    id: MagazineId,
    name: MagazineName,
    category: Category,
    articles: Vec<ArticleId>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Magazine {
    /// 创建新杂志，文章列表为空
    pub fn new(name: MagazineName, category: Category) -> Self {
        let now = Utc::now();
        Self {
            id: MagazineId::new(),
            name,
            category,
            articles: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// 更新杂志名称
    ///
    /// 已有文章仍指向同一本杂志
    pub fn rename(&mut self, name: MagazineName) {
        self.name = name;
        self.updated_at = Utc::now();
    }

    /// 更新杂志分类
    pub fn set_category(&mut self, category: Category) {
        self.category = category;
        self.updated_at = Utc::now();
    }

    pub(crate) fn attach(&mut self, article: ArticleId) {
        if !self.articles.contains(&article) {
            self.articles.push(article);
        }
    }

    pub(crate) fn detach(&mut self, article: ArticleId) -> bool {
        let before = self.articles.len();
        self.articles.retain(|id| *id != article);
        before != self.articles.len()
    }

    // Getters
    pub fn id(&self) -> MagazineId {
        self.id
    }

    pub fn name(&self) -> &MagazineName {
        &self.name
    }

    pub fn category(&self) -> &Category {
        &self.category
    }

    /// 本杂志自己的文章集合（不扫描全局注册表）
    pub fn articles(&self) -> &[ArticleId] {
        &self.articles
    }

    pub fn lists(&self, article: ArticleId) -> bool {
        self.articles.contains(&article)
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// 在本杂志发表过文章的作者（去重，按首次出现顺序）
    pub fn contributors<'c>(&self, catalog: &'c Catalog) -> Vec<&'c Author> {
        let mut seen: HashSet<AuthorId> = HashSet::new();
        self.articles
            .iter()
            .filter_map(|id| catalog.article(*id))
            .filter(|article| seen.insert(article.author_id()))
            .filter_map(|article| catalog.author(article.author_id()))
            .collect()
    }
}
