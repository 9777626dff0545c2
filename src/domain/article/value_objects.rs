//! Article - Value Objects

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::errors::{require_length, Field, ValidationError};

/// 文章标题长度范围（字符数，闭区间）
pub const ARTICLE_TITLE_LENGTH: std::ops::RangeInclusive<usize> = 5..=50;

/// 文章唯一标识
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ArticleId(Uuid);

impl ArticleId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ArticleId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ArticleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 文章标题
///
/// 不变量: 长度在 5 到 50 个字符之间，创建后不可修改
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ArticleTitle(String);

impl ArticleTitle {
    pub fn new(title: impl Into<String>) -> Result<Self, ValidationError> {
        let title = title.into();
        require_length(Field::ArticleTitle, &title, ARTICLE_TITLE_LENGTH)?;
        Ok(Self(title))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ArticleTitle {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ArticleTitle> for String {
    fn from(title: ArticleTitle) -> Self {
        title.0
    }
}

impl std::fmt::Display for ArticleTitle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
