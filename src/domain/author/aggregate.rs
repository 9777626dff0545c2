//! Author - Aggregate Root

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::{AuthorId, AuthorName};
use crate::domain::article::Article;
use crate::domain::catalog::Catalog;
use crate::domain::magazine::{Category, Magazine, MagazineId};

/// Author 聚合根
///
/// 作者本身不保存文章列表，所有关系都通过扫描 Catalog 中的文章注册表推导。
///
/// 不变量:
/// - name 非空，创建后不可修改
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    id: AuthorId,
    name: AuthorName,
    created_at: DateTime<Utc>,
}

impl Author {
    /// 创建新作者
    pub fn new(name: AuthorName) -> Self {
        Self {
            id: AuthorId::new(),
            name,
            created_at: Utc::now(),
        }
    }

    // Getters
    pub fn id(&self) -> AuthorId {
        self.id
    }

    pub fn name(&self) -> &AuthorName {
        &self.name
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// 该作者的所有文章，按注册顺序
    pub fn articles<'c>(&self, catalog: &'c Catalog) -> Vec<&'c Article> {
        catalog
            .articles()
            .iter()
            .filter(|article| article.author_id() == self.id)
            .collect()
    }

    /// 该作者投稿过的杂志（去重）
    ///
    /// 结果按首次出现的顺序返回，但顺序不属于契约
    pub fn magazines<'c>(&self, catalog: &'c Catalog) -> Vec<&'c Magazine> {
        let mut seen: HashSet<MagazineId> = HashSet::new();
        self.articles(catalog)
            .into_iter()
            .filter(|article| seen.insert(article.magazine_id()))
            .filter_map(|article| catalog.magazine(article.magazine_id()))
            .collect()
    }

    /// 该作者涉及的话题领域，即其杂志分类的去重集合
    pub fn topic_areas<'c>(&self, catalog: &'c Catalog) -> Vec<&'c Category> {
        let mut seen: HashSet<&Category> = HashSet::new();
        self.magazines(catalog)
            .into_iter()
            .map(Magazine::category)
            .filter(|category| seen.insert(*category))
            .collect()
    }
}
