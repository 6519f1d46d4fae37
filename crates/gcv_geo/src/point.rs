// crates/gcv_geo/src/point.rs
//! 点类型
//!
//! - [`GeographicPoint`]: WGS84 经纬度，构造时校验范围
//! - [`UtmPoint`]: UTM 东/北坐标 + 带号 + 半球，构造时校验带号
//!
//! 两者都不可变，只能通过校验过的构造函数得到。

use serde::Serialize;

use crate::error::{GeoError, GeoResult};
use crate::projection::{geographic_to_utm, utm_to_geographic};
use crate::zone::{checked_zone, epsg_code, resolve_hemisphere, resolve_zone, Hemisphere};

/// 纬度范围 (度)
pub const LATITUDE_RANGE: (f64, f64) = (-90.0, 90.0);

/// 经度范围 (度)
pub const LONGITUDE_RANGE: (f64, f64) = (-180.0, 180.0);

/// WGS84 地理坐标点
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeographicPoint {
    latitude: f64,
    longitude: f64,
}

impl GeographicPoint {
    /// 创建地理坐标点
    ///
    /// # Errors
    /// 纬度不在 [-90, 90] 或经度不在 [-180, 180]（含 NaN）时返回
    /// [`GeoError::CoordinateOutOfRange`]
    pub fn new(latitude: f64, longitude: f64) -> GeoResult<Self> {
        GeoError::check_coordinate("纬度", latitude, LATITUDE_RANGE.0, LATITUDE_RANGE.1)?;
        GeoError::check_coordinate("经度", longitude, LONGITUDE_RANGE.0, LONGITUDE_RANGE.1)?;
        Ok(Self { latitude, longitude })
    }

    /// 纬度 (度)
    #[inline]
    #[must_use]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// 经度 (度)
    #[inline]
    #[must_use]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// 该点所在的 UTM 带号
    #[must_use]
    pub fn utm_zone(&self) -> u8 {
        resolve_zone(self.longitude)
    }

    /// 该点所在的半球
    #[must_use]
    pub fn hemisphere(&self) -> Hemisphere {
        resolve_hemisphere(self.latitude)
    }

    /// 投影到自身所在的 UTM 带
    ///
    /// # Errors
    /// 投影结果非有限值时返回 [`GeoError::ProjectionFailed`]
    pub fn to_utm(&self) -> GeoResult<UtmPoint> {
        self.to_utm_in(self.utm_zone(), self.hemisphere())
    }

    /// 投影到指定的 UTM 带（可以不是点自身所在的带）
    ///
    /// # Errors
    /// 带号无效或投影结果非有限值时返回错误
    pub fn to_utm_in(&self, zone: u8, hemisphere: Hemisphere) -> GeoResult<UtmPoint> {
        let (easting, northing) =
            geographic_to_utm(self.latitude, self.longitude, zone, hemisphere)?;
        GeoError::check_finite("正向投影", easting, northing)?;
        Ok(UtmPoint {
            easting,
            northing,
            zone,
            hemisphere,
        })
    }
}

/// UTM 坐标点
///
/// 北向坐标不强制非负：南半球坐标按假北约定由投影内部处理。
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct UtmPoint {
    easting: f64,
    northing: f64,
    zone: u8,
    hemisphere: Hemisphere,
}

impl UtmPoint {
    /// 创建 UTM 坐标点
    ///
    /// # Errors
    /// 带号不在 1-60 时返回 [`GeoError::InvalidUtmZone`]
    pub fn new(easting: f64, northing: f64, zone: i64, hemisphere: Hemisphere) -> GeoResult<Self> {
        let zone = checked_zone(zone)?;
        Ok(Self {
            easting,
            northing,
            zone,
            hemisphere,
        })
    }

    /// 东向坐标 (米)
    #[inline]
    #[must_use]
    pub fn easting(&self) -> f64 {
        self.easting
    }

    /// 北向坐标 (米)
    #[inline]
    #[must_use]
    pub fn northing(&self) -> f64 {
        self.northing
    }

    /// 带号 (1-60)
    #[inline]
    #[must_use]
    pub fn zone(&self) -> u8 {
        self.zone
    }

    /// 半球
    #[inline]
    #[must_use]
    pub fn hemisphere(&self) -> Hemisphere {
        self.hemisphere
    }

    /// EPSG 代码 (326zz / 327zz)
    #[must_use]
    pub fn epsg_code(&self) -> u32 {
        epsg_code(self.zone, self.hemisphere)
    }

    /// 逆向投影为 (纬度, 经度)
    ///
    /// 结果不做范围校验，无意义的输入会得到超范围的经纬度。
    ///
    /// # Errors
    /// 结果非有限值时返回 [`GeoError::ProjectionFailed`]
    pub fn to_lat_lon(&self) -> GeoResult<(f64, f64)> {
        let (lat, lon) = utm_to_geographic(self.easting, self.northing, self.zone, self.hemisphere)?;
        GeoError::check_finite("逆向投影", lat, lon)?;
        Ok((lat, lon))
    }
}
