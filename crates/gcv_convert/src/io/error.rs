// crates/gcv_convert/src/io/error.rs
//! 数据集读写错误

use thiserror::Error;

use crate::error::{ConfigError, ConvertError};

/// IO 模块结果类型别名
pub type IoResult<T> = Result<T, IoError>;

/// IO 错误枚举
#[derive(Error, Debug)]
pub enum IoError {
    /// 文件读写失败
    #[error("文件读写失败: {0}")]
    Io(#[from] std::io::Error),

    /// CSV 读写失败
    #[error("CSV 错误: {0}")]
    Csv(#[from] csv::Error),

    /// JSON 读写失败
    #[error("JSON 错误: {0}")]
    Json(#[from] serde_json::Error),

    /// 文件格式识别失败
    #[error("无法识别文件格式: {path} (支持 .csv / .json)")]
    UnknownFormat {
        /// 文件路径
        path: String,
    },

    /// 解析错误
    #[error("文件解析错误: {file}:{line} - {message}")]
    ParseError {
        /// 文件名
        file: String,
        /// 行号（JSON 为记录序号），从 1 开始
        line: usize,
        /// 描述
        message: String,
    },

    /// 读写选项无效
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// 数据集构造失败
    #[error(transparent)]
    Dataset(#[from] ConvertError),
}

impl IoError {
    pub(crate) fn parse(file: impl Into<String>, line: usize, message: impl Into<String>) -> Self {
        Self::ParseError {
            file: file.into(),
            line,
            message: message.into(),
        }
    }
}
