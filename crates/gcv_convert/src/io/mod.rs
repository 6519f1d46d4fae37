// crates/gcv_convert/src/io/mod.rs

//! 数据集读写
//!
//! - [`table_csv`]: CSV 文件（带表头）
//! - [`table_json`]: JSON 对象数组
//!
//! [`read_dataset`] / [`write_dataset`] 按扩展名选择格式。

pub mod error;
pub mod table_csv;
pub mod table_json;

use std::path::{Path, PathBuf};

pub use error::{IoError, IoResult};

use crate::batch::ConversionDirection;
use crate::config::CsvOptions;
use crate::dataset::TabularDataset;

/// 数据集文件格式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetFormat {
    /// CSV
    Csv,
    /// JSON 对象数组
    Json,
}

impl DatasetFormat {
    /// 按扩展名识别格式（大小写不敏感）
    pub fn from_path(path: &Path) -> IoResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("csv") => Ok(Self::Csv),
            Some("json") => Ok(Self::Json),
            _ => Err(IoError::UnknownFormat {
                path: path.display().to_string(),
            }),
        }
    }
}

/// 读取数据集
pub fn read_dataset(path: &Path, options: &CsvOptions) -> IoResult<TabularDataset> {
    match DatasetFormat::from_path(path)? {
        DatasetFormat::Csv => table_csv::read_csv(path, options),
        DatasetFormat::Json => table_json::read_json(path),
    }
}

/// 写出数据集
pub fn write_dataset(path: &Path, dataset: &TabularDataset, options: &CsvOptions) -> IoResult<()> {
    match DatasetFormat::from_path(path)? {
        DatasetFormat::Csv => table_csv::write_csv(path, dataset, options),
        DatasetFormat::Json => table_json::write_json(path, dataset),
    }
}

/// 默认输出路径：与输入同目录，文件名加方向前缀
///
/// `datos/puntos.csv` -> `datos/utm_puntos.csv`（正向）或 `datos/transformadas_puntos.csv`（逆向）
pub fn default_output_path(input: &Path, direction: ConversionDirection) -> PathBuf {
    let name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    input.with_file_name(direction.output_file_name(&name))
}
