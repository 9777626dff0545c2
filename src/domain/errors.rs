//! Domain - Validation Errors
//!
//! 所有构造与修改操作共享的唯一错误类型

use std::ops::RangeInclusive;
use thiserror::Error;

/// 被校验的字段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    AuthorName,
    MagazineName,
    MagazineCategory,
    ArticleTitle,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::AuthorName => "author.name",
            Field::MagazineName => "magazine.name",
            Field::MagazineCategory => "magazine.category",
            Field::ArticleTitle => "article.title",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 校验错误
///
/// 携带失败的字段和约束，调用方可据此修正输入
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} 不能为空")]
    Empty { field: Field },

    #[error("{field} 长度必须在 {min} 到 {max} 个字符之间，实际为 {actual}")]
    Length {
        field: Field,
        min: usize,
        max: usize,
        actual: usize,
    },
}

impl ValidationError {
    pub fn field(&self) -> Field {
        match self {
            ValidationError::Empty { field } => *field,
            ValidationError::Length { field, .. } => *field,
        }
    }
}

/// 要求字符串非空
pub(crate) fn require_non_empty(field: Field, value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::Empty { field });
    }
    Ok(())
}

/// 要求字符数落在闭区间内
pub(crate) fn require_length(
    field: Field,
    value: &str,
    range: RangeInclusive<usize>,
) -> Result<(), ValidationError> {
    let actual = value.chars().count();
    if !range.contains(&actual) {
        return Err(ValidationError::Length {
            field,
            min: *range.start(),
            max: *range.end(),
            actual,
        });
    }
    Ok(())
}
