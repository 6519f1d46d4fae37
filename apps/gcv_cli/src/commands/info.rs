// apps/gcv_cli/src/commands/info.rs

//! 信息显示命令
//!
//! 显示投影参数和默认批量配置。

use anyhow::Result;
use clap::Args;
use gcv_convert::batch::{FORWARD_INPUT_COLUMNS, INVERSE_INPUT_COLUMNS};
use gcv_convert::BatchConfig;
use gcv_geo::ellipsoid::Ellipsoid;
use gcv_geo::projection::transverse_mercator::MAX_ORDER;
use gcv_geo::projection::{UTM_FALSE_EASTING, UTM_K0};
use gcv_geo::zone::{MAX_ZONE, MIN_ZONE, SOUTH_FALSE_NORTHING};
use std::path::PathBuf;
use tracing::info;

/// 信息显示参数
#[derive(Args)]
pub struct InfoArgs {
    /// 配置文件路径（显示该文件解析后的配置）
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// 只显示投影参数
    #[arg(long)]
    pub projection: bool,

    /// 只显示默认配置
    #[arg(long)]
    pub defaults: bool,
}

/// 执行信息命令
pub fn execute(args: InfoArgs) -> Result<()> {
    info!("=== GeoCoDev 信息 ===");

    if args.projection {
        print_projection_info();
    }

    if args.defaults {
        print_config(&BatchConfig::default())?;
    }

    if let Some(path) = &args.config {
        let config = BatchConfig::from_file(path)?;
        println!("配置文件: {}", path.display());
        print_config(&config)?;
    }

    if args.config.is_none() && !args.projection && !args.defaults {
        // 默认显示所有信息
        print_projection_info();
        println!();
        print_config(&BatchConfig::default())?;
    }

    Ok(())
}

fn print_projection_info() {
    let wgs84 = Ellipsoid::WGS84;
    println!("=== 投影参数 ===");
    println!("GeoCoDev CLI 版本: {}", env!("CARGO_PKG_VERSION"));
    println!("椭球: WGS84");
    println!("  长半轴 a: {} m", wgs84.a);
    println!("  扁率 f: 1/{}", 1.0 / wgs84.f);
    println!("  短半轴 b: {:.4} m", wgs84.b());
    println!("投影: 横轴墨卡托 (Krüger 级数, {} 阶)", MAX_ORDER);
    println!("  比例因子 k0: {}", UTM_K0);
    println!("  假东: {} m", UTM_FALSE_EASTING);
    println!("  假北: 0 m (N) / {} m (S)", SOUTH_FALSE_NORTHING);
    println!("  带号范围: {}-{}", MIN_ZONE, MAX_ZONE);

    println!("\n批量转换所需列:");
    println!("  to-utm: {}", FORWARD_INPUT_COLUMNS.join(", "));
    println!("  to-geo: {}", INVERSE_INPUT_COLUMNS.join(", "));
}

fn print_config(config: &BatchConfig) -> Result<()> {
    println!("=== 批量配置 ===");
    println!("{}", serde_json::to_string_pretty(config)?);
    Ok(())
}
