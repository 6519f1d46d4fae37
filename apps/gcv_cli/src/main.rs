// apps/gcv_cli/src/main.rs

//! GeoCoDev 命令行界面
//!
//! WGS84 经纬度与 UTM 坐标互相转换：
//! - `point`: 单点转换，结果以 JSON 输出
//! - `batch`: CSV / JSON 文件批量转换
//! - `info`: 显示投影参数和默认配置

mod commands;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// GeoCoDev 坐标转换命令行工具
#[derive(Parser)]
#[command(name = "gcv")]
#[command(author = "GeoCoDev Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "WGS84 geographic <-> UTM coordinate converter", long_about = None)]
struct Cli {
    /// 日志级别 (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 单点转换
    Point(commands::point::PointArgs),
    /// 批量转换
    Batch(commands::batch::BatchArgs),
    /// 显示信息
    Info(commands::info::InfoArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // 初始化日志
    let level = match cli.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Point(args) => commands::point::execute(args),
        Commands::Batch(args) => commands::batch::execute(args),
        Commands::Info(args) => commands::info::execute(args),
    }
}
