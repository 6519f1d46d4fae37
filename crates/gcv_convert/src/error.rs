// crates/gcv_convert/src/error.rs

//! 转换层错误类型
//!
//! # 错误分类
//!
//! - **范围错误**：纬度/经度超出定义域（来自 `gcv_geo`）
//! - **半球/带号错误**：逆向转换的半球标识或带号无效（来自 `gcv_geo`）
//! - **类型转换错误**：批量数据单元格无法解析为期望类型
//! - **结构错误**：批量数据缺少必需列，整批失败
//! - **行数超限**：批量数据行数超过配置上限，整批失败
//!
//! 单点与单行错误作为数据返回（见 [`ConversionOutcome`](crate::ConversionOutcome)），
//! 只有结构错误和行数超限会中止整批处理。

use gcv_geo::GeoError;
use thiserror::Error;

/// 转换层结果类型
pub type ConvertResult<T> = Result<T, ConvertError>;

/// 转换错误
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConvertError {
    /// 坐标/带号/半球校验或投影失败
    #[error(transparent)]
    Geo(#[from] GeoError),

    /// 单元格无法解析为期望类型
    #[error("字段 '{field}' 的值 '{value}' 无法解析为{expected}")]
    Coercion {
        /// 字段名
        field: String,
        /// 原始值（空单元格为空字符串）
        value: String,
        /// 期望类型说明（如"数值"、"整数"）
        expected: &'static str,
    },

    /// 缺少必需列
    #[error("数据缺少必需的列: {}", .missing.join(", "))]
    Structural {
        /// 缺少的列名
        missing: Vec<String>,
    },

    /// 行数超过上限
    #[error("数据行数 {rows} 超过上限 {limit}")]
    RowLimitExceeded {
        /// 实际行数
        rows: usize,
        /// 配置的上限
        limit: usize,
    },

    /// 长度不匹配
    #[error("{what} 长度不匹配: 期望 {expected}, 实际 {actual}")]
    LengthMismatch {
        /// 数据名称
        what: &'static str,
        /// 期望长度
        expected: usize,
        /// 实际长度
        actual: usize,
    },
}

/// 错误类别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConvertErrorKind {
    /// 坐标超出范围
    Range,
    /// 半球标识无效
    InvalidHemisphere,
    /// 带号无效
    InvalidZone,
    /// 投影结果非有限值
    Projection,
    /// 单元格类型转换失败
    Coercion,
    /// 缺少必需列
    Structural,
    /// 行数超过上限
    RowLimit,
    /// 行/列长度不一致
    LengthMismatch,
}

impl ConvertError {
    /// 创建类型转换错误
    pub fn coercion(field: impl Into<String>, value: impl Into<String>, expected: &'static str) -> Self {
        Self::Coercion {
            field: field.into(),
            value: value.into(),
            expected,
        }
    }

    /// 创建结构错误
    pub fn structural<I, S>(missing: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Structural {
            missing: missing.into_iter().map(Into::into).collect(),
        }
    }

    /// 错误类别
    pub fn kind(&self) -> ConvertErrorKind {
        match self {
            Self::Geo(GeoError::CoordinateOutOfRange { .. }) => ConvertErrorKind::Range,
            Self::Geo(GeoError::InvalidHemisphere { .. }) => ConvertErrorKind::InvalidHemisphere,
            Self::Geo(GeoError::InvalidUtmZone { .. }) => ConvertErrorKind::InvalidZone,
            Self::Geo(GeoError::ProjectionFailed { .. }) => ConvertErrorKind::Projection,
            Self::Coercion { .. } => ConvertErrorKind::Coercion,
            Self::Structural { .. } => ConvertErrorKind::Structural,
            Self::RowLimitExceeded { .. } => ConvertErrorKind::RowLimit,
            Self::LengthMismatch { .. } => ConvertErrorKind::LengthMismatch,
        }
    }

    /// 是否会中止整批处理
    pub fn is_batch_fatal(&self) -> bool {
        matches!(
            self.kind(),
            ConvertErrorKind::Structural | ConvertErrorKind::RowLimit | ConvertErrorKind::LengthMismatch
        )
    }
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// IO 错误
    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),

    /// 解析错误
    #[error("解析错误: {0}")]
    Parse(String),

    /// 无效值
    #[error("无效值 '{key}': {value} - {reason}")]
    InvalidValue {
        /// 配置键
        key: String,
        /// 配置值
        value: String,
        /// 原因
        reason: String,
    },
}
