//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;
use std::path::PathBuf;

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,

    /// 种子数据配置
    #[serde(default)]
    pub seed: SeedConfig,

    /// 报表输出配置
    #[serde(default)]
    pub report: ReportConfig,
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 是否启用 JSON 格式
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

/// 种子数据配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeedConfig {
    /// 种子 TOML 文件路径，未设置时从空 Catalog 开始
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// 报表格式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Json,
    Text,
}

/// 报表输出配置
#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    /// 输出格式: json | text
    #[serde(default)]
    pub format: ReportFormat,

    /// JSON 是否美化输出
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

fn default_pretty() -> bool {
    true
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            format: ReportFormat::default(),
            pretty: default_pretty(),
        }
    }
}
