// crates/gcv_convert/src/batch.rs

//! 批量转换管道
//!
//! 对 [`TabularDataset`] 的每一行独立做单点转换，再把结果合并回表格：
//!
//! - 正向：读 `latitud`/`longitud`，写 `este`/`norte`/`huso`/`hemisferio`
//! - 逆向：读 `este`/`norte`/`huso`/`hemisferio`，写 `latitud`/`longitud`（覆盖已有列）
//!
//! 单行失败不会中断整批，失败行在合并时写入失败标记，原因写在第二个输出列。
//! 缺少必需列或行数超限时整批拒绝，不产生任何输出。

use std::fmt;

use gcv_geo::UtmPoint;
use serde::Serialize;

use crate::config::BatchConfig;
use crate::dataset::{CellValue, TabularDataset};
use crate::error::{ConvertError, ConvertResult};
use crate::outcome::ConversionOutcome;
use crate::service::{GeographicRecord, PointConversionService};

/// 正向转换必需的输入列
pub const FORWARD_INPUT_COLUMNS: [&str; 2] = ["latitud", "longitud"];

/// 正向转换写入的列
pub const FORWARD_OUTPUT_COLUMNS: [&str; 4] = ["este", "norte", "huso", "hemisferio"];

/// 逆向转换必需的输入列
pub const INVERSE_INPUT_COLUMNS: [&str; 4] = ["este", "norte", "huso", "hemisferio"];

/// 逆向转换写入的列
pub const INVERSE_OUTPUT_COLUMNS: [&str; 2] = ["latitud", "longitud"];

/// 转换方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConversionDirection {
    /// 地理坐标 -> UTM
    ToUtm,
    /// UTM -> 地理坐标
    ToGeographic,
}

impl ConversionDirection {
    /// 必需的输入列
    pub fn required_columns(self) -> &'static [&'static str] {
        match self {
            Self::ToUtm => &FORWARD_INPUT_COLUMNS,
            Self::ToGeographic => &INVERSE_INPUT_COLUMNS,
        }
    }

    /// 写入的输出列
    pub fn output_columns(self) -> &'static [&'static str] {
        match self {
            Self::ToUtm => &FORWARD_OUTPUT_COLUMNS,
            Self::ToGeographic => &INVERSE_OUTPUT_COLUMNS,
        }
    }

    /// 默认输出文件名前缀
    pub fn output_prefix(self) -> &'static str {
        match self {
            Self::ToUtm => "utm_",
            Self::ToGeographic => "transformadas_",
        }
    }

    /// 由输入文件名得到默认输出文件名
    pub fn output_file_name(self, input_name: &str) -> String {
        format!("{}{}", self.output_prefix(), input_name)
    }

    /// 名称
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ToUtm => "to-utm",
            Self::ToGeographic => "to-geo",
        }
    }
}

impl fmt::Display for ConversionDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 批量转换统计
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BatchReport {
    /// 总行数
    pub total: usize,
    /// 成功行数
    pub succeeded: usize,
    /// 失败行数
    pub failed: usize,
}

impl BatchReport {
    fn from_outcomes<T>(outcomes: &[ConversionOutcome<T>]) -> Self {
        let succeeded = outcomes.iter().filter(|o| o.is_success()).count();
        Self {
            total: outcomes.len(),
            succeeded,
            failed: outcomes.len() - succeeded,
        }
    }
}

/// 批量转换结果
#[derive(Debug, Clone, PartialEq)]
pub struct BatchOutput {
    /// 合并了结果列的数据集
    pub dataset: TabularDataset,
    /// 统计
    pub report: BatchReport,
}

/// 批量转换管道
#[derive(Debug, Clone, Default)]
pub struct BatchConversionPipeline {
    config: BatchConfig,
    service: PointConversionService,
}

impl BatchConversionPipeline {
    /// 创建管道
    pub fn new(config: BatchConfig) -> Self {
        Self {
            config,
            service: PointConversionService::new(),
        }
    }

    /// 配置
    pub fn config(&self) -> &BatchConfig {
        &self.config
    }

    /// 按方向执行
    pub fn run(
        &self,
        direction: ConversionDirection,
        dataset: TabularDataset,
    ) -> ConvertResult<BatchOutput> {
        match direction {
            ConversionDirection::ToUtm => self.run_forward(dataset),
            ConversionDirection::ToGeographic => self.run_inverse(dataset),
        }
    }

    /// 正向批量转换
    ///
    /// # Errors
    /// 缺少 `latitud`/`longitud` 列或行数超限时返回整批错误
    pub fn run_forward(&self, mut dataset: TabularDataset) -> ConvertResult<BatchOutput> {
        let direction = ConversionDirection::ToUtm;
        let cols = self.check_shape(direction, &dataset)?;
        let (lat_col, lon_col) = (cols[0], cols[1]);

        let outcomes = self.map_rows(&dataset, |row| {
            let latitude = row[lat_col].as_f64(FORWARD_INPUT_COLUMNS[0]);
            let longitude = row[lon_col].as_f64(FORWARD_INPUT_COLUMNS[1]);
            match (latitude, longitude) {
                (Ok(lat), Ok(lon)) => self.service.to_utm(lat, lon),
                (Err(e), _) | (_, Err(e)) => ConversionOutcome::Failure(e),
            }
        });

        let report = BatchReport::from_outcomes(&outcomes);
        self.log_failures(direction, &outcomes);
        self.merge_forward(&mut dataset, outcomes)?;
        self.log_report(direction, &report);

        Ok(BatchOutput { dataset, report })
    }

    /// 逆向批量转换
    ///
    /// # Errors
    /// 缺少 `este`/`norte`/`huso`/`hemisferio` 列或行数超限时返回整批错误
    pub fn run_inverse(&self, mut dataset: TabularDataset) -> ConvertResult<BatchOutput> {
        let direction = ConversionDirection::ToGeographic;
        let cols = self.check_shape(direction, &dataset)?;

        let outcomes = self.map_rows(&dataset, |row| {
            match inverse_fields(row, &cols) {
                Ok((easting, northing, zone, hemisphere)) => {
                    self.service.to_geographic(easting, northing, zone, hemisphere)
                }
                Err(e) => ConversionOutcome::Failure(e),
            }
        });

        let report = BatchReport::from_outcomes(&outcomes);
        self.log_failures(direction, &outcomes);
        self.merge_inverse(&mut dataset, outcomes)?;
        self.log_report(direction, &report);

        Ok(BatchOutput { dataset, report })
    }

    /// 必需列与行数检查，返回必需列的索引
    fn check_shape(
        &self,
        direction: ConversionDirection,
        dataset: &TabularDataset,
    ) -> ConvertResult<Vec<usize>> {
        let required = direction.required_columns();
        let missing = dataset.missing_columns(required);
        if !missing.is_empty() {
            let err = ConvertError::structural(missing);
            tracing::warn!("Batch {} rejected: {}", direction, err);
            return Err(err);
        }

        if let Some(limit) = self.config.max_rows {
            if dataset.len() > limit {
                let err = ConvertError::RowLimitExceeded {
                    rows: dataset.len(),
                    limit,
                };
                tracing::warn!("Batch {} rejected: {}", direction, err);
                return Err(err);
            }
        }

        Ok(required
            .iter()
            .filter_map(|name| dataset.column_index(name))
            .collect())
    }

    /// 逐行转换，保持输入顺序
    fn map_rows<T, F>(&self, dataset: &TabularDataset, f: F) -> Vec<ConversionOutcome<T>>
    where
        T: Send,
        F: Fn(&[CellValue]) -> ConversionOutcome<T> + Sync,
    {
        let rows = dataset.rows();
        if self.config.use_parallel(rows.len()) {
            use rayon::prelude::*;
            rows.par_iter().map(|row| f(row.as_slice())).collect()
        } else {
            rows.iter().map(|row| f(row.as_slice())).collect()
        }
    }

    fn merge_forward(
        &self,
        dataset: &mut TabularDataset,
        outcomes: Vec<ConversionOutcome<UtmPoint>>,
    ) -> ConvertResult<()> {
        let marker = CellValue::Text(self.config.error_marker.clone());
        let n = outcomes.len();
        let mut este = Vec::with_capacity(n);
        let mut norte = Vec::with_capacity(n);
        let mut huso = Vec::with_capacity(n);
        let mut hemisferio = Vec::with_capacity(n);

        for outcome in outcomes {
            match outcome {
                ConversionOutcome::Success(p) => {
                    este.push(CellValue::Number(p.easting()));
                    norte.push(CellValue::Number(p.northing()));
                    huso.push(CellValue::Integer(i64::from(p.zone())));
                    hemisferio.push(CellValue::from(p.hemisphere().as_str()));
                }
                ConversionOutcome::Failure(err) => {
                    este.push(marker.clone());
                    norte.push(CellValue::Text(err.to_string()));
                    huso.push(marker.clone());
                    hemisferio.push(marker.clone());
                }
            }
        }

        let [c_este, c_norte, c_huso, c_hemisferio] = FORWARD_OUTPUT_COLUMNS;
        dataset.set_column(c_este, este)?;
        dataset.set_column(c_norte, norte)?;
        dataset.set_column(c_huso, huso)?;
        dataset.set_column(c_hemisferio, hemisferio)
    }

    fn merge_inverse(
        &self,
        dataset: &mut TabularDataset,
        outcomes: Vec<ConversionOutcome<GeographicRecord>>,
    ) -> ConvertResult<()> {
        let marker = CellValue::Text(self.config.error_marker.clone());
        let (latitud, longitud): (Vec<_>, Vec<_>) = outcomes
            .into_iter()
            .map(|outcome| match outcome {
                ConversionOutcome::Success(g) => {
                    (CellValue::Number(g.latitud), CellValue::Number(g.longitud))
                }
                ConversionOutcome::Failure(err) => {
                    (marker.clone(), CellValue::Text(err.to_string()))
                }
            })
            .unzip();

        let [c_lat, c_lon] = INVERSE_OUTPUT_COLUMNS;
        dataset.set_column(c_lat, latitud)?;
        dataset.set_column(c_lon, longitud)
    }

    fn log_failures<T>(&self, direction: ConversionDirection, outcomes: &[ConversionOutcome<T>]) {
        for (index, outcome) in outcomes.iter().enumerate() {
            if let Some(err) = outcome.failure() {
                tracing::debug!("Batch {} row {} failed: {}", direction, index, err);
            }
        }
    }

    fn log_report(&self, direction: ConversionDirection, report: &BatchReport) {
        tracing::info!(
            "Batch {} finished: {} rows, {} succeeded, {} failed",
            direction,
            report.total,
            report.succeeded,
            report.failed
        );
    }
}

/// 取逆向转换的四个输入字段，`cols` 按 [`INVERSE_INPUT_COLUMNS`] 排列
fn inverse_fields<'a>(row: &'a [CellValue], cols: &[usize]) -> ConvertResult<(f64, f64, i64, &'a str)> {
    Ok((
        row[cols[0]].as_f64(INVERSE_INPUT_COLUMNS[0])?,
        row[cols[1]].as_f64(INVERSE_INPUT_COLUMNS[1])?,
        row[cols[2]].as_zone(INVERSE_INPUT_COLUMNS[2])?,
        row[cols[3]].as_text(INVERSE_INPUT_COLUMNS[3])?,
    ))
}

/// 正向批量转换（默认配置）
pub fn batch_to_utm(dataset: TabularDataset) -> ConvertResult<TabularDataset> {
    BatchConversionPipeline::default()
        .run_forward(dataset)
        .map(|out| out.dataset)
}

/// 逆向批量转换（默认配置）
pub fn batch_to_geographic(dataset: TabularDataset) -> ConvertResult<TabularDataset> {
    BatchConversionPipeline::default()
        .run_inverse(dataset)
        .map(|out| out.dataset)
}

// ============================================================================
// 测试
// ============================================================================
