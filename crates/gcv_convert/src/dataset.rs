// crates/gcv_convert/src/dataset.rs

//! 表格数据集
//!
//! 批量转换的输入输出：有序的列名 + 有序的行，每个单元格是一个
//! [`CellValue`]。行之间相互独立，列顺序和无关列在转换后保持不变。

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ConvertError, ConvertResult};

/// 单元格值
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    /// 空单元格
    Empty,
    /// 整数
    Integer(i64),
    /// 浮点数
    Number(f64),
    /// 文本
    Text(String),
}

impl CellValue {
    /// 按内容推断类型
    ///
    /// 空白 -> `Empty`，整数 -> `Integer`，有限浮点数 -> `Number`，其余 -> `Text`。
    /// 文本保留原样（不去除首尾空白）。
    pub fn parse_inferred(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Self::Empty;
        }
        if let Ok(v) = trimmed.parse::<i64>() {
            return Self::Integer(v);
        }
        match trimmed.parse::<f64>() {
            Ok(v) if v.is_finite() => Self::Number(v),
            _ => Self::Text(raw.to_string()),
        }
    }

    /// 是否为空
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// 输出到 CSV 时的文本
    pub fn to_field_string(&self) -> String {
        match self {
            Self::Empty => String::new(),
            other => other.to_string(),
        }
    }

    /// 解析为有限浮点数
    ///
    /// # Errors
    /// 空单元格、非数字文本或非有限值返回 [`ConvertError::Coercion`]
    pub fn as_f64(&self, field: &str) -> ConvertResult<f64> {
        let value = match self {
            Self::Integer(v) => Some(*v as f64),
            Self::Number(v) => Some(*v),
            Self::Text(s) => s.trim().parse::<f64>().ok(),
            Self::Empty => None,
        };
        value
            .filter(|v| v.is_finite())
            .ok_or_else(|| ConvertError::coercion(field, self.to_field_string(), "数值"))
    }

    /// 解析为带号整数
    ///
    /// 只接受整数值：`30`、`30.0` 可以，`30.5` 不行。范围由投影层校验。
    ///
    /// # Errors
    /// 不是整数时返回 [`ConvertError::Coercion`]
    pub fn as_zone(&self, field: &str) -> ConvertResult<i64> {
        let value = match self {
            Self::Integer(v) => Some(*v),
            Self::Number(v) => integral(*v),
            Self::Text(s) => {
                let s = s.trim();
                s.parse::<i64>()
                    .ok()
                    .or_else(|| s.parse::<f64>().ok().and_then(integral))
            }
            Self::Empty => None,
        };
        value.ok_or_else(|| ConvertError::coercion(field, self.to_field_string(), "整数"))
    }

    /// 取文本内容（半球标识）
    ///
    /// 不去除空白，`" N"` 会在半球校验时被拒绝。
    ///
    /// # Errors
    /// 非文本单元格返回 [`ConvertError::Coercion`]
    pub fn as_text(&self, field: &str) -> ConvertResult<&str> {
        match self {
            Self::Text(s) => Ok(s.as_str()),
            other => Err(ConvertError::coercion(field, other.to_field_string(), "文本")),
        }
    }
}

fn integral(v: f64) -> Option<i64> {
    if v.is_finite() && v.fract() == 0.0 && v.abs() < i64::MAX as f64 {
        Some(v as i64)
    } else {
        None
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => Ok(()),
            Self::Integer(v) => write!(f, "{v}"),
            Self::Number(v) => write!(f, "{v}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for CellValue {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<i64> for CellValue {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

/// 表格数据集
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TabularDataset {
    columns: Vec<String>,
    rows: Vec<Vec<CellValue>>,
}

impl TabularDataset {
    /// 创建只有列名的空数据集
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// 由列名和行构造
    ///
    /// # Errors
    /// 任一行宽度与列数不一致时返回 [`ConvertError::LengthMismatch`]
    pub fn from_rows<I, S>(columns: I, rows: Vec<Vec<CellValue>>) -> ConvertResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut dataset = Self::new(columns);
        dataset.rows.reserve(rows.len());
        for row in rows {
            dataset.push_row(row)?;
        }
        Ok(dataset)
    }

    /// 列名
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// 行数
    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// 是否没有数据行
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// 列索引
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// 是否包含列
    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// 缺少的列（按 `required` 的顺序）
    pub fn missing_columns<'a>(&self, required: &[&'a str]) -> Vec<&'a str> {
        required
            .iter()
            .copied()
            .filter(|name| !self.has_column(name))
            .collect()
    }

    /// 追加一行
    ///
    /// # Errors
    /// 行宽度与列数不一致时返回 [`ConvertError::LengthMismatch`]
    pub fn push_row(&mut self, row: Vec<CellValue>) -> ConvertResult<()> {
        if row.len() != self.columns.len() {
            return Err(ConvertError::LengthMismatch {
                what: "数据行",
                expected: self.columns.len(),
                actual: row.len(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    /// 行数据
    pub fn row(&self, index: usize) -> Option<&[CellValue]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    /// 所有行
    pub fn rows(&self) -> &[Vec<CellValue>] {
        &self.rows
    }

    /// 按行号和列名取单元格
    pub fn get(&self, row: usize, column: &str) -> Option<&CellValue> {
        let col = self.column_index(column)?;
        self.rows.get(row).and_then(|r| r.get(col))
    }

    /// 写入整列：已存在则覆盖，否则追加到末尾
    ///
    /// # Errors
    /// `values` 长度与行数不一致时返回 [`ConvertError::LengthMismatch`]
    pub fn set_column(&mut self, name: &str, values: Vec<CellValue>) -> ConvertResult<()> {
        if values.len() != self.rows.len() {
            return Err(ConvertError::LengthMismatch {
                what: "列数据",
                expected: self.rows.len(),
                actual: values.len(),
            });
        }
        match self.column_index(name) {
            Some(col) => {
                for (row, value) in self.rows.iter_mut().zip(values) {
                    row[col] = value;
                }
            }
            None => {
                self.columns.push(name.to_string());
                for (row, value) in self.rows.iter_mut().zip(values) {
                    row.push(value);
                }
            }
        }
        Ok(())
    }
}
