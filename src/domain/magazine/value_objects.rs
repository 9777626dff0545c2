//! Magazine - Value Objects

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::errors::{require_length, require_non_empty, Field, ValidationError};

/// 杂志名称长度范围（字符数，闭区间）
pub const MAGAZINE_NAME_LENGTH: std::ops::RangeInclusive<usize> = 2..=16;

/// 杂志唯一标识
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MagazineId(Uuid);

impl MagazineId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for MagazineId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for MagazineId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 杂志名称
///
/// 不变量: 长度在 2 到 16 个字符之间
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MagazineName(String);

impl MagazineName {
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        require_length(Field::MagazineName, &name, MAGAZINE_NAME_LENGTH)?;
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for MagazineName {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<MagazineName> for String {
    fn from(name: MagazineName) -> Self {
        name.0
    }
}

impl std::fmt::Display for MagazineName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 杂志分类（即作者的"话题领域"）
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Category(String);

impl Category {
    pub fn new(category: impl Into<String>) -> Result<Self, ValidationError> {
        let category = category.into();
        require_non_empty(Field::MagazineCategory, &category)?;
        Ok(Self(category))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Category {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.0
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
