// crates/gcv_convert/src/lib.rs
//! GeoCoDev 坐标转换服务
//!
//! 在 `gcv_geo` 投影内核之上提供单点与批量转换：
//!
//! - `service`: 单点转换，失败作为 [`ConversionOutcome::Failure`] 返回
//! - `batch`: 表格批量转换，单行失败写入失败标记，不中断整批
//! - `dataset`: 表格数据集与单元格类型转换
//! - `config`: 批量转换配置 (JSON)
//! - `io`: CSV / JSON 数据集读写
//!
//! # 示例
//!
//! ```
//! use gcv_convert::{batch_to_utm, CellValue, TabularDataset};
//!
//! let input = TabularDataset::from_rows(
//!     ["latitud", "longitud"],
//!     vec![
//!         vec![CellValue::Number(40.4168), CellValue::Number(-3.7038)],
//!         vec![CellValue::from("abc"), CellValue::Number(-3.7038)],
//!     ],
//! )?;
//!
//! let output = batch_to_utm(input)?;
//! assert_eq!(output.len(), 2);
//! assert_eq!(output.get(0, "huso"), Some(&CellValue::Integer(30)));
//! assert_eq!(output.get(1, "este"), Some(&CellValue::from("ERROR")));
//! # Ok::<(), gcv_convert::ConvertError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod batch;
pub mod config;
pub mod dataset;
pub mod error;
pub mod io;
pub mod outcome;
pub mod service;

pub use batch::{
    batch_to_geographic, batch_to_utm, BatchConversionPipeline, BatchOutput, BatchReport,
    ConversionDirection,
};
pub use config::{BatchConfig, CsvOptions};
pub use dataset::{CellValue, TabularDataset};
pub use error::{ConfigError, ConvertError, ConvertErrorKind, ConvertResult};
pub use outcome::ConversionOutcome;
pub use service::{
    point_to_geographic, point_to_utm, GeographicRecord, PointConversionService, UtmRecord,
};
