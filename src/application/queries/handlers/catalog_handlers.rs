//! Catalog Query Handlers

use serde::Serialize;
use std::fmt::Write as _;
use uuid::Uuid;

use crate::application::error::ApplicationError;
use crate::application::queries::{BuildCatalogReport, GetAuthorProfile, GetMagazineIssue};
use crate::domain::{Article, Author, Catalog, Magazine};

// ============================================================================
// Response DTOs
// ============================================================================

/// 文章摘要
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArticleSummary {
    pub id: Uuid,
    pub title: String,
    pub author: String,
    pub magazine: String,
}

impl ArticleSummary {
    fn from_article(article: &Article, catalog: &Catalog) -> Self {
        let author = catalog
            .author(article.author_id())
            .map(|a| a.name().to_string())
            .unwrap_or_default();
        let magazine = catalog
            .magazine(article.magazine_id())
            .map(|m| m.name().to_string())
            .unwrap_or_default();
        Self {
            id: *article.id().as_uuid(),
            title: article.title().to_string(),
            author,
            magazine,
        }
    }
}

/// 杂志摘要
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MagazineSummary {
    pub id: Uuid,
    pub name: String,
    pub category: String,
}

impl From<&Magazine> for MagazineSummary {
    fn from(magazine: &Magazine) -> Self {
        Self {
            id: *magazine.id().as_uuid(),
            name: magazine.name().to_string(),
            category: magazine.category().to_string(),
        }
    }
}

/// 作者档案响应
///
/// magazines / topic_areas 是集合语义，顺序不属于契约
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorProfile {
    pub id: Uuid,
    pub name: String,
    pub articles: Vec<ArticleSummary>,
    pub magazines: Vec<MagazineSummary>,
    pub topic_areas: Vec<String>,
}

impl AuthorProfile {
    fn build(author: &Author, catalog: &Catalog) -> Self {
        Self {
            id: *author.id().as_uuid(),
            name: author.name().to_string(),
            articles: author
                .articles(catalog)
                .into_iter()
                .map(|a| ArticleSummary::from_article(a, catalog))
                .collect(),
            magazines: author
                .magazines(catalog)
                .into_iter()
                .map(MagazineSummary::from)
                .collect(),
            topic_areas: author
                .topic_areas(catalog)
                .into_iter()
                .map(|c| c.to_string())
                .collect(),
        }
    }
}

/// 杂志响应
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MagazineIssue {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub articles: Vec<ArticleSummary>,
    pub contributors: Vec<String>,
}

impl MagazineIssue {
    fn build(magazine: &Magazine, catalog: &Catalog) -> Self {
        Self {
            id: *magazine.id().as_uuid(),
            name: magazine.name().to_string(),
            category: magazine.category().to_string(),
            articles: magazine
                .articles()
                .iter()
                .filter_map(|id| catalog.article(*id))
                .map(|a| ArticleSummary::from_article(a, catalog))
                .collect(),
            contributors: magazine
                .contributors(catalog)
                .into_iter()
                .map(|a| a.name().to_string())
                .collect(),
        }
    }
}

/// 完整报表
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogReport {
    pub authors: Vec<AuthorProfile>,
    pub magazines: Vec<MagazineIssue>,
    pub total_articles: usize,
}

impl CatalogReport {
    /// 渲染为纯文本
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Authors ({})", self.authors.len());
        for author in &self.authors {
            let _ = writeln!(out, "  {}", author.name);
            for article in &author.articles {
                let _ = writeln!(out, "    - {} [{}]", article.title, article.magazine);
            }
            if !author.topic_areas.is_empty() {
                let _ = writeln!(out, "    topics: {}", author.topic_areas.join(", "));
            }
        }
        let _ = writeln!(out, "Magazines ({})", self.magazines.len());
        for magazine in &self.magazines {
            let _ = writeln!(
                out,
                "  {} ({}) - {} article(s)",
                magazine.name,
                magazine.category,
                magazine.articles.len()
            );
        }
        let _ = writeln!(out, "Total articles: {}", self.total_articles);
        out
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// 查询处理器
pub trait QueryHandler<Q> {
    type Response;

    fn handle(&self, query: Q) -> Result<Self::Response, ApplicationError>;
}

/// 在一个 Catalog 上执行所有读查询
pub struct CatalogQueryHandler<'a> {
    catalog: &'a Catalog,
}

impl<'a> CatalogQueryHandler<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }
}

impl QueryHandler<GetAuthorProfile> for CatalogQueryHandler<'_> {
    type Response = AuthorProfile;

    fn handle(&self, query: GetAuthorProfile) -> Result<AuthorProfile, ApplicationError> {
        let author = self
            .catalog
            .author(query.author_id)
            .ok_or_else(|| ApplicationError::not_found("Author", *query.author_id.as_uuid()))?;
        Ok(AuthorProfile::build(author, self.catalog))
    }
}

impl QueryHandler<GetMagazineIssue> for CatalogQueryHandler<'_> {
    type Response = MagazineIssue;

    fn handle(&self, query: GetMagazineIssue) -> Result<MagazineIssue, ApplicationError> {
        let magazine = self.catalog.magazine(query.magazine_id).ok_or_else(|| {
            ApplicationError::not_found("Magazine", *query.magazine_id.as_uuid())
        })?;
        Ok(MagazineIssue::build(magazine, self.catalog))
    }
}

impl QueryHandler<BuildCatalogReport> for CatalogQueryHandler<'_> {
    type Response = CatalogReport;

    fn handle(&self, _query: BuildCatalogReport) -> Result<CatalogReport, ApplicationError> {
        Ok(CatalogReport {
            authors: self
                .catalog
                .authors()
                .iter()
                .map(|a| AuthorProfile::build(a, self.catalog))
                .collect(),
            magazines: self
                .catalog
                .magazines()
                .iter()
                .map(|m| MagazineIssue::build(m, self.catalog))
                .collect(),
            total_articles: self.catalog.article_count(),
        })
    }
}
