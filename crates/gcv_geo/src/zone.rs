// crates/gcv_geo/src/zone.rs
//! UTM 带号与半球
//!
//! 从经纬度推导 UTM 带号和半球，并校验外部传入的带号/半球标识（逆向转换时使用）。
//!
//! # 示例
//!
//! ```
//! use gcv_geo::zone::{resolve_hemisphere, resolve_zone, Hemisphere};
//!
//! assert_eq!(resolve_zone(-3.7038), 30);
//! assert_eq!(resolve_hemisphere(40.4168), Hemisphere::North);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{GeoError, GeoResult};

/// 最小 UTM 带号
pub const MIN_ZONE: u8 = 1;

/// 最大 UTM 带号
pub const MAX_ZONE: u8 = 60;

/// 带宽 (度)
pub const ZONE_WIDTH_DEG: f64 = 6.0;

/// 南半球假北 (米)
pub const SOUTH_FALSE_NORTHING: f64 = 10_000_000.0;

/// 半球
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Hemisphere {
    /// 北半球
    #[serde(rename = "N")]
    North,
    /// 南半球
    #[serde(rename = "S")]
    South,
}

impl Hemisphere {
    /// 解析半球标识（大小写不敏感，只接受 `N`/`S`）
    ///
    /// # Errors
    /// 其他任何标识都返回 [`GeoError::InvalidHemisphere`]
    pub fn parse(token: &str) -> GeoResult<Self> {
        if token.eq_ignore_ascii_case("N") {
            Ok(Self::North)
        } else if token.eq_ignore_ascii_case("S") {
            Ok(Self::South)
        } else {
            Err(GeoError::invalid_hemisphere(token))
        }
    }

    /// 是否为北半球
    #[inline]
    #[must_use]
    pub fn is_north(self) -> bool {
        matches!(self, Self::North)
    }

    /// 单字母标识
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::North => "N",
            Self::South => "S",
        }
    }

    /// 该半球的 UTM 假北 (米)
    #[must_use]
    pub fn false_northing(self) -> f64 {
        match self {
            Self::North => 0.0,
            Self::South => SOUTH_FALSE_NORTHING,
        }
    }
}

impl fmt::Display for Hemisphere {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Hemisphere {
    type Err = GeoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// 从经度计算 UTM 带号
///
/// `floor((lon + 180) / 6) + 1`，结果截断到 [1, 60]。
/// 经度恰为 180° 时公式给出 61，这里归入 60 带。
#[must_use]
pub fn resolve_zone(lon: f64) -> u8 {
    let zone = ((lon + 180.0) / ZONE_WIDTH_DEG).floor() as i64 + 1;
    zone.clamp(i64::from(MIN_ZONE), i64::from(MAX_ZONE)) as u8
}

/// 从纬度判断半球（赤道归北半球）
#[must_use]
pub fn resolve_hemisphere(lat: f64) -> Hemisphere {
    if lat >= 0.0 {
        Hemisphere::North
    } else {
        Hemisphere::South
    }
}

/// 带号是否有效 (1-60)
#[must_use]
pub fn validate_zone(zone: i64) -> bool {
    (i64::from(MIN_ZONE)..=i64::from(MAX_ZONE)).contains(&zone)
}

/// 校验外部传入的带号并收窄为 `u8`
///
/// # Errors
/// 带号不在 1-60 内时返回 [`GeoError::InvalidUtmZone`]
pub fn checked_zone(zone: i64) -> GeoResult<u8> {
    GeoError::check_utm_zone(zone)?;
    Ok(zone as u8)
}

/// 校验半球标识
///
/// # Errors
/// 见 [`Hemisphere::parse`]
pub fn validate_hemisphere(token: &str) -> GeoResult<Hemisphere> {
    Hemisphere::parse(token)
}

/// UTM 带的中央子午线 (度)
#[must_use]
pub fn central_meridian(zone: u8) -> f64 {
    f64::from(zone) * ZONE_WIDTH_DEG - 183.0
}

/// WGS84 / UTM 的 EPSG 代码（北 326zz，南 327zz）
#[must_use]
pub fn epsg_code(zone: u8, hemisphere: Hemisphere) -> u32 {
    match hemisphere {
        Hemisphere::North => 32600 + u32::from(zone),
        Hemisphere::South => 32700 + u32::from(zone),
    }
}

// ============================================================================
// 测试
// ============================================================================
