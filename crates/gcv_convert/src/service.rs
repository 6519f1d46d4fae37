// crates/gcv_convert/src/service.rs

//! 单点转换服务
//!
//! 负责输入校验、带号/半球推导和投影调用，所有失败都以
//! [`ConversionOutcome::Failure`] 返回，不会 panic 或向上抛出。
//!
//! # 示例
//!
//! ```
//! use gcv_convert::service::{point_to_geographic, point_to_utm};
//!
//! let utm = point_to_utm(40.4168, -3.7038).into_result().unwrap();
//! assert_eq!(utm.huso, 30);
//! assert_eq!(utm.hemisferio.as_str(), "N");
//!
//! let geo = point_to_geographic(utm.este, utm.norte, 30, "n").into_result().unwrap();
//! assert!((geo.latitud - 40.4168).abs() < 1e-6);
//!
//! assert!(point_to_geographic(500000.0, 0.0, 31, "X").is_failure());
//! ```

use gcv_geo::zone::Hemisphere;
use gcv_geo::{GeographicPoint, UtmPoint};
use serde::{Deserialize, Serialize};

use crate::error::ConvertResult;
use crate::outcome::ConversionOutcome;

/// UTM 结果记录（对外接口字段名）
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UtmRecord {
    /// 东向坐标 (米)
    pub este: f64,
    /// 北向坐标 (米)
    pub norte: f64,
    /// 带号
    pub huso: u8,
    /// 半球
    pub hemisferio: Hemisphere,
}

impl From<UtmPoint> for UtmRecord {
    fn from(p: UtmPoint) -> Self {
        Self {
            este: p.easting(),
            norte: p.northing(),
            huso: p.zone(),
            hemisferio: p.hemisphere(),
        }
    }
}

/// 地理坐标结果记录（对外接口字段名）
///
/// 逆向结果不做范围校验，因此不使用 [`GeographicPoint`]。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeographicRecord {
    /// 纬度 (度)
    pub latitud: f64,
    /// 经度 (度)
    pub longitud: f64,
}

/// 单点转换服务
///
/// 无状态，可在线程间自由复制共享。
#[derive(Debug, Clone, Copy, Default)]
pub struct PointConversionService;

impl PointConversionService {
    /// 创建服务
    pub fn new() -> Self {
        Self
    }

    /// 地理坐标 -> UTM（带号和半球由坐标推导）
    pub fn to_utm(&self, latitude: f64, longitude: f64) -> ConversionOutcome<UtmPoint> {
        Self::try_to_utm(latitude, longitude).into()
    }

    /// UTM -> 地理坐标
    ///
    /// 先校验半球标识（大小写不敏感），再校验带号。
    pub fn to_geographic(
        &self,
        easting: f64,
        northing: f64,
        zone: i64,
        hemisphere: &str,
    ) -> ConversionOutcome<GeographicRecord> {
        Self::try_to_geographic(easting, northing, zone, hemisphere).into()
    }

    fn try_to_utm(latitude: f64, longitude: f64) -> ConvertResult<UtmPoint> {
        let point = GeographicPoint::new(latitude, longitude)?;
        Ok(point.to_utm()?)
    }

    fn try_to_geographic(
        easting: f64,
        northing: f64,
        zone: i64,
        hemisphere: &str,
    ) -> ConvertResult<GeographicRecord> {
        let hemisphere = Hemisphere::parse(hemisphere)?;
        let point = UtmPoint::new(easting, northing, zone, hemisphere)?;
        let (latitud, longitud) = point.to_lat_lon()?;
        Ok(GeographicRecord { latitud, longitud })
    }
}

/// 单点正向转换接口
pub fn point_to_utm(latitud: f64, longitud: f64) -> ConversionOutcome<UtmRecord> {
    PointConversionService.to_utm(latitud, longitud).map(UtmRecord::from)
}

/// 单点逆向转换接口
pub fn point_to_geographic(
    este: f64,
    norte: f64,
    huso: i64,
    hemisferio: &str,
) -> ConversionOutcome<GeographicRecord> {
    PointConversionService.to_geographic(este, norte, huso, hemisferio)
}

// ============================================================================
// 测试
// ============================================================================
