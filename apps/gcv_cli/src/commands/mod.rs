// apps/gcv_cli/src/commands/mod.rs

//! CLI 命令

pub mod batch;
pub mod info;
pub mod point;
