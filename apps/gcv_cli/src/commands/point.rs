// apps/gcv_cli/src/commands/point.rs

//! 单点转换命令
//!
//! 成功时把结果记录以 JSON 写到标准输出；失败时输出 `{"error": ...}`
//! 并以错误退出。

use anyhow::{bail, Result};
use clap::{Args, Subcommand};
use gcv_convert::{point_to_geographic, point_to_utm, ConversionOutcome};
use serde::Serialize;
use tracing::debug;

/// 单点转换参数
#[derive(Args)]
pub struct PointArgs {
    #[command(subcommand)]
    pub command: PointCommand,
}

/// 单点转换方向
#[derive(Subcommand)]
pub enum PointCommand {
    /// 经纬度 -> UTM
    ToUtm {
        /// 纬度 (度)
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,

        /// 经度 (度)
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,
    },
    /// UTM -> 经纬度
    ToGeo {
        /// 东向坐标 (米)
        #[arg(long, allow_hyphen_values = true)]
        este: f64,

        /// 北向坐标 (米)
        #[arg(long, allow_hyphen_values = true)]
        norte: f64,

        /// 带号 (1-60)
        #[arg(long, allow_hyphen_values = true)]
        huso: i64,

        /// 半球 (N / S)
        #[arg(long)]
        hemisferio: String,
    },
}

/// 执行单点转换
pub fn execute(args: PointArgs) -> Result<()> {
    match args.command {
        PointCommand::ToUtm { lat, lon } => {
            debug!("point to-utm: lat={}, lon={}", lat, lon);
            emit(point_to_utm(lat, lon))
        }
        PointCommand::ToGeo {
            este,
            norte,
            huso,
            hemisferio,
        } => {
            debug!(
                "point to-geo: este={}, norte={}, huso={}, hemisferio={}",
                este, norte, huso, hemisferio
            );
            emit(point_to_geographic(este, norte, huso, &hemisferio))
        }
    }
}

fn emit<T: Serialize>(outcome: ConversionOutcome<T>) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&outcome)?);
    match outcome.into_result() {
        Ok(_) => Ok(()),
        Err(err) => bail!("转换失败: {err}"),
    }
}
