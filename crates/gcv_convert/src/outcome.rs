// crates/gcv_convert/src/outcome.rs

//! 转换结果
//!
//! [`ConversionOutcome`] 把失败当作数据而不是异常：单点接口和批量管道的每一行
//! 都返回它，调用方据此决定如何展示错误。

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::error::{ConvertError, ConvertResult};

/// 单点或单行的转换结果
#[derive(Debug, Clone, PartialEq)]
pub enum ConversionOutcome<T> {
    /// 转换成功
    Success(T),
    /// 转换失败，错误的 `Display` 即面向用户的原因
    Failure(ConvertError),
}

impl<T> ConversionOutcome<T> {
    /// 是否成功
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// 是否失败
    #[inline]
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// 成功值
    pub fn success(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// 失败错误
    pub fn failure(&self) -> Option<&ConvertError> {
        match self {
            Self::Success(_) => None,
            Self::Failure(err) => Some(err),
        }
    }

    /// 失败原因（面向用户的文本）
    pub fn reason(&self) -> Option<String> {
        self.failure().map(ToString::to_string)
    }

    /// 映射成功值
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> ConversionOutcome<U> {
        match self {
            Self::Success(value) => ConversionOutcome::Success(f(value)),
            Self::Failure(err) => ConversionOutcome::Failure(err),
        }
    }

    /// 转换为 `Result`
    pub fn into_result(self) -> ConvertResult<T> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(err) => Err(err),
        }
    }
}

impl<T> From<ConvertResult<T>> for ConversionOutcome<T> {
    fn from(result: ConvertResult<T>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(err) => Self::Failure(err),
        }
    }
}

/// 成功时序列化为值本身，失败时序列化为 `{"error": "<原因>"}`
impl<T: Serialize> Serialize for ConversionOutcome<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Success(value) => value.serialize(serializer),
            Self::Failure(err) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("error", &err.to_string())?;
                map.end()
            }
        }
    }
}
