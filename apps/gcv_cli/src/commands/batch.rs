// apps/gcv_cli/src/commands/batch.rs

//! 批量转换命令
//!
//! 按扩展名读取 CSV / JSON 数据集，转换后写到输出文件。
//! 未指定输出路径时写到输入文件旁边，文件名加 `utm_` 或 `transformadas_` 前缀。

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use gcv_convert::io::{default_output_path, read_dataset, write_dataset};
use gcv_convert::{BatchConfig, BatchConversionPipeline, ConversionDirection};
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;

/// 批量转换方向
#[derive(Clone, Copy, ValueEnum)]
pub enum Direction {
    /// 经纬度 -> UTM（需要 latitud, longitud 列）
    ToUtm,
    /// UTM -> 经纬度（需要 este, norte, huso, hemisferio 列）
    ToGeo,
}

impl From<Direction> for ConversionDirection {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::ToUtm => ConversionDirection::ToUtm,
            Direction::ToGeo => ConversionDirection::ToGeographic,
        }
    }
}

/// 批量转换参数
#[derive(Args)]
pub struct BatchArgs {
    /// 转换方向
    #[arg(value_enum)]
    pub direction: Direction,

    /// 输入文件 (.csv / .json)
    pub input: PathBuf,

    /// 输出文件路径
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// 配置文件路径
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// 以 JSON 输出统计
    #[arg(long)]
    pub json: bool,
}

/// 执行批量转换
pub fn execute(args: BatchArgs) -> Result<()> {
    let direction = ConversionDirection::from(args.direction);

    let config = match &args.config {
        Some(path) => BatchConfig::from_file(path)
            .with_context(|| format!("无法加载配置文件: {}", path.display()))?,
        None => BatchConfig::default(),
    };

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&args.input, direction));

    info!("=== 批量转换 {} ===", direction);
    info!("输入: {}", args.input.display());

    let dataset = read_dataset(&args.input, &config.csv)
        .with_context(|| format!("无法读取数据: {}", args.input.display()))?;

    let start = Instant::now();
    let pipeline = BatchConversionPipeline::new(config);
    let result = pipeline.run(direction, dataset)?;
    let elapsed = start.elapsed();

    write_dataset(&output, &result.dataset, &pipeline.config().csv)
        .with_context(|| format!("无法写出结果: {}", output.display()))?;

    info!("输出: {}", output.display());
    info!("耗时: {:.3}s", elapsed.as_secs_f64());

    let report = result.report;
    if args.json {
        let summary = serde_json::json!({
            "direction": direction,
            "output": output.display().to_string(),
            "report": report,
        });
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("总行数: {}", report.total);
        println!("成功: {}", report.succeeded);
        println!("失败: {}", report.failed);
        println!("输出文件: {}", output.display());
    }

    Ok(())
}
