//! 纯 Rust 实现的 WGS84 / UTM 投影
//!
//! - [`transverse_mercator`]: Karney (2011) 横轴墨卡托正/逆向算法
//! - [`geographic_to_utm`] / [`utm_to_geographic`]: UTM 约定封装（带号、假东、假北）
//!
//! 不依赖外部大地测量库。

mod math_utils;
mod params;
pub mod transverse_mercator;
mod utm;

pub use params::{TransverseMercatorParams, UTM_FALSE_EASTING, UTM_K0};
pub use transverse_mercator::TransverseMercator;
pub use utm::{geographic_to_utm, utm_to_geographic};
