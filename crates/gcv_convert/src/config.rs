// crates/gcv_convert/src/config.rs

//! 批量转换配置
//!
//! JSON 文件格式，缺省字段使用默认值：
//!
//! ```json
//! {
//!   "parallel": true,
//!   "parallel_threshold": 1024,
//!   "max_rows": 1000000,
//!   "error_marker": "ERROR",
//!   "csv": { "delimiter": ",", "has_header": true }
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ConfigError;

/// 默认的失败标记
pub const DEFAULT_ERROR_MARKER: &str = "ERROR";

/// 批量转换配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchConfig {
    /// 是否允许并行处理
    #[serde(default = "default_parallel")]
    pub parallel: bool,

    /// 行数达到该值才并行
    #[serde(default = "default_parallel_threshold")]
    pub parallel_threshold: usize,

    /// 最大行数，`None` 表示不限制
    #[serde(default = "default_max_rows")]
    pub max_rows: Option<usize>,

    /// 失败行写入的标记
    #[serde(default = "default_error_marker")]
    pub error_marker: String,

    /// CSV 读写选项
    #[serde(default)]
    pub csv: CsvOptions,
}

fn default_parallel() -> bool { true }
fn default_parallel_threshold() -> usize { 1024 }
fn default_max_rows() -> Option<usize> { Some(1_000_000) }
fn default_error_marker() -> String { DEFAULT_ERROR_MARKER.to_string() }

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            parallel: default_parallel(),
            parallel_threshold: default_parallel_threshold(),
            max_rows: default_max_rows(),
            error_marker: default_error_marker(),
            csv: CsvOptions::default(),
        }
    }
}

impl BatchConfig {
    /// 串行配置
    pub fn sequential() -> Self {
        Self {
            parallel: false,
            ..Default::default()
        }
    }

    /// 设置最大行数
    pub fn with_max_rows(mut self, max_rows: Option<usize>) -> Self {
        self.max_rows = max_rows;
        self
    }

    /// 设置并行阈值
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// 给定行数时是否走并行路径
    pub fn use_parallel(&self, rows: usize) -> bool {
        self.parallel && rows >= self.parallel_threshold
    }

    /// 从文件加载配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(ConfigError::Io)?;

        let config: BatchConfig =
            serde_json::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    /// 验证配置有效性
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.error_marker.is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "error_marker".to_string(),
                value: String::new(),
                reason: "失败标记不能为空".to_string(),
            });
        }

        if self.max_rows == Some(0) {
            return Err(ConfigError::InvalidValue {
                key: "max_rows".to_string(),
                value: "0".to_string(),
                reason: "最大行数必须为正，不限制请使用 null".to_string(),
            });
        }

        self.csv.validate()
    }

    /// 保存配置到文件
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content =
            serde_json::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))?;
        std::fs::write(path, content).map_err(ConfigError::Io)?;
        Ok(())
    }
}

/// CSV 读写选项
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CsvOptions {
    /// 分隔符（单个 ASCII 字符）
    #[serde(default = "default_delimiter")]
    pub delimiter: char,

    /// 是否有表头行（读取时必须为 true，列名来自表头）
    #[serde(default = "default_has_header")]
    pub has_header: bool,
}

fn default_delimiter() -> char { ',' }
fn default_has_header() -> bool { true }

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
            has_header: default_has_header(),
        }
    }
}

impl CsvOptions {
    /// 分号分隔
    pub fn semicolon_separated() -> Self {
        Self {
            delimiter: ';',
            ..Default::default()
        }
    }

    /// 制表符分隔
    pub fn tab_separated() -> Self {
        Self {
            delimiter: '\t',
            ..Default::default()
        }
    }

    /// 分隔符字节
    ///
    /// # Errors
    /// 非 ASCII 分隔符返回 [`ConfigError::InvalidValue`]
    pub fn delimiter_byte(&self) -> Result<u8, ConfigError> {
        u8::try_from(self.delimiter)
            .ok()
            .filter(u8::is_ascii)
            .ok_or_else(|| ConfigError::InvalidValue {
                key: "csv.delimiter".to_string(),
                value: self.delimiter.to_string(),
                reason: "分隔符必须是单个 ASCII 字符".to_string(),
            })
    }

    /// 验证选项
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.delimiter_byte()?;
        if !self.has_header {
            return Err(ConfigError::InvalidValue {
                key: "csv.has_header".to_string(),
                value: "false".to_string(),
                reason: "批量转换依赖表头列名".to_string(),
            });
        }
        Ok(())
    }
}
