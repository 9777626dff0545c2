//! Seed Import
//!
//! 从 TOML 文档构建 Catalog。文章通过名称引用同一文档中声明的作者和杂志。
//!
//! ```toml
//! [[authors]]
//! name = "Sue"
//!
//! [[magazines]]
//! name = "Vogue"
//! category = "Fashion"
//!
//! [[articles]]
//! author = "Sue"
//! magazine = "Vogue"
//! title = "Autumn Styles 2024"
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use crate::application::commands::handlers::{CatalogCommandHandler, CommandHandler};
use crate::application::commands::{AddArticle, CreateAuthor, CreateMagazine};
use crate::application::error::ApplicationError;
use crate::domain::{AuthorId, Catalog, MagazineId};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub authors: Vec<SeedAuthor>,
    #[serde(default)]
    pub magazines: Vec<SeedMagazine>,
    #[serde(default)]
    pub articles: Vec<SeedArticle>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedAuthor {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedMagazine {
    pub name: String,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedArticle {
    pub author: String,
    pub magazine: String,
    pub title: String,
}

impl SeedData {
    pub fn from_toml_str(content: &str) -> Result<Self, ApplicationError> {
        toml::from_str(content)
            .map_err(|e| ApplicationError::seed(format!("Failed to parse seed: {}", e)))
    }

    pub fn from_path(path: &Path) -> Result<Self, ApplicationError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ApplicationError::seed(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&content)
    }
}

/// 导入结果统计
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SeedSummary {
    pub authors: usize,
    pub magazines: usize,
    pub articles: usize,
}

/// 将种子数据导入 Catalog
///
/// 按 authors → magazines → articles 的顺序执行，遇到第一个错误即停止；
/// 出错前已创建的实体保留在 Catalog 中。重名时以最先声明的为准。
pub fn import_seed(catalog: &mut Catalog, seed: &SeedData) -> Result<SeedSummary, ApplicationError> {
    let mut handler = CatalogCommandHandler::new(catalog);
    let mut authors: HashMap<&str, AuthorId> = HashMap::new();
    let mut magazines: HashMap<&str, MagazineId> = HashMap::new();
    let mut summary = SeedSummary::default();

    for author in &seed.authors {
        let id = handler.handle(CreateAuthor {
            name: author.name.clone(),
        })?;
        authors.entry(author.name.as_str()).or_insert(id);
        summary.authors += 1;
    }

    for magazine in &seed.magazines {
        let id = handler.handle(CreateMagazine {
            name: magazine.name.clone(),
            category: magazine.category.clone(),
        })?;
        magazines.entry(magazine.name.as_str()).or_insert(id);
        summary.magazines += 1;
    }

    for article in &seed.articles {
        let author_id = *authors
            .get(article.author.as_str())
            .ok_or_else(|| ApplicationError::unknown_reference("author", &article.author))?;
        let magazine_id = *magazines
            .get(article.magazine.as_str())
            .ok_or_else(|| ApplicationError::unknown_reference("magazine", &article.magazine))?;
        handler.handle(AddArticle {
            author_id,
            magazine_id,
            title: article.title.clone(),
        })?;
        summary.articles += 1;
    }

    tracing::info!(
        authors = summary.authors,
        magazines = summary.magazines,
        articles = summary.articles,
        "Seed imported"
    );

    Ok(summary)
}
