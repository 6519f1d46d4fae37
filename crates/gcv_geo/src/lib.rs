// crates/gcv_geo/src/lib.rs
//! GeoCoDev 地理坐标投影模块
//!
//! WGS84 经纬度与 UTM 坐标之间的转换内核。
//!
//! # 模块
//!
//! - `zone`: UTM 带号/半球推导与校验
//! - `projection`: 横轴墨卡托正/逆向投影 (Karney 2011)
//! - `point`: 带校验的点类型
//! - `ellipsoid`: WGS84 椭球参数
//! - `error`: 错误类型
//!
//! # 示例
//!
//! ```
//! use gcv_geo::prelude::*;
//!
//! let p = GeographicPoint::new(40.4168, -3.7038).unwrap();
//! let utm = p.to_utm().unwrap();
//! assert_eq!(utm.zone(), 30);
//! assert_eq!(utm.hemisphere(), Hemisphere::North);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod ellipsoid;
pub mod error;
pub mod point;
pub mod projection;
pub mod zone;

/// 预导入模块
pub mod prelude {
    pub use crate::error::{GeoError, GeoResult};
    pub use crate::point::{GeographicPoint, UtmPoint};
    pub use crate::projection::{geographic_to_utm, utm_to_geographic, TransverseMercator};
    pub use crate::zone::{resolve_hemisphere, resolve_zone, validate_hemisphere, validate_zone, Hemisphere};
}

// 重导出常用类型
pub use error::{GeoError, GeoResult};
pub use point::{GeographicPoint, UtmPoint};
pub use zone::Hemisphere;
