//! UTM 正向/逆向投影
//!
//! 在 [`TransverseMercator`] 之上封装 UTM 约定：中央子午线 `6·zone - 183`、
//! k0 = 0.9996、假东 500000 m、南半球假北 10000000 m。
//!
//! # 示例
//!
//! ```
//! use gcv_geo::projection::{geographic_to_utm, utm_to_geographic};
//! use gcv_geo::zone::Hemisphere;
//!
//! // 马德里 (40.4168°N, 3.7038°W) -> UTM 30N
//! let (e, n) = geographic_to_utm(40.4168, -3.7038, 30, Hemisphere::North).unwrap();
//!
//! // 逆向转换
//! let (lat, lon) = utm_to_geographic(e, n, 30, Hemisphere::North).unwrap();
//! assert!((lat - 40.4168).abs() < 1e-9 && (lon + 3.7038).abs() < 1e-9);
//! ```

use super::transverse_mercator::TransverseMercator;
use crate::error::{GeoError, GeoResult};
use crate::zone::Hemisphere;

/// 地理坐标 -> UTM
///
/// 纬度与带号需在调用方校验过范围；点不在该带内时照常投影。
///
/// # Arguments
/// - `lat`: 纬度 (度)
/// - `lon`: 经度 (度)
/// - `zone`: UTM 带号 (1-60)
/// - `hemisphere`: 半球，决定假北
///
/// # Returns
/// (easting, northing) 东向坐标和北向坐标 (米)
///
/// # Errors
/// 带号不在 1-60 或纬度超出 [-90, 90] 时返回错误
pub fn geographic_to_utm(
    lat: f64,
    lon: f64,
    zone: u8,
    hemisphere: Hemisphere,
) -> GeoResult<(f64, f64)> {
    GeoError::check_utm_zone(i64::from(zone))?;
    TransverseMercator::utm(zone, hemisphere).forward(lon, lat)
}

/// UTM -> 地理坐标
///
/// 结果不做经纬度范围校验，无意义的东/北坐标会原样得到超范围或非有限的结果。
///
/// # Returns
/// (latitude, longitude) 纬度和经度 (度)
///
/// # Errors
/// 带号不在 1-60 时返回 [`GeoError::InvalidUtmZone`]
pub fn utm_to_geographic(
    easting: f64,
    northing: f64,
    zone: u8,
    hemisphere: Hemisphere,
) -> GeoResult<(f64, f64)> {
    GeoError::check_utm_zone(i64::from(zone))?;
    let (lon, lat) = TransverseMercator::utm(zone, hemisphere).inverse(easting, northing);
    Ok((lat, lon))
}

// ============================================================================
// 测试
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zone::{resolve_hemisphere, resolve_zone};

    #[test]
    fn test_utm_madrid() {
        let (e, n) = geographic_to_utm(40.4168, -3.7038, 30, Hemisphere::North).expect("to UTM");
        assert!((e - 440_290.458).abs() < 1e-3, "e = {e}");
        assert!((n - 4_474_257.382).abs() < 1e-3, "n = {n}");
    }

    #[test]
    fn test_utm_south_hemisphere() {
        // 悉尼 151°E, 33.9°S
        let (e, n) = geographic_to_utm(-33.9, 151.0, 56, Hemisphere::South).expect("to UTM");
        assert!(n > 6_000_000.0, "northing should include false northing: {n}");
        assert!((e - 315_073.884).abs() < 1e-3, "e = {e}");

        let (lat, lon) = utm_to_geographic(e, n, 56, Hemisphere::South).expect("from UTM");
        assert!((lat + 33.9).abs() < 1e-9);
        assert!((lon - 151.0).abs() < 1e-9);
    }

    #[test]
    fn test_utm_zone_rejected() {
        assert_eq!(
            geographic_to_utm(0.0, 0.0, 0, Hemisphere::North),
            Err(GeoError::invalid_utm_zone(0))
        );
        assert_eq!(
            utm_to_geographic(500_000.0, 0.0, 61, Hemisphere::North),
            Err(GeoError::invalid_utm_zone(61))
        );
    }

    #[test]
    fn test_no_utm_latitude_band_limit() {
        // 超出 UTM 常用纬度带 (-80, 84) 仍可计算
        for lat in [85.0, -81.0, 89.0] {
            let zone = resolve_zone(10.0);
            let hemisphere = resolve_hemisphere(lat);
            let (e, n) = geographic_to_utm(lat, 10.0, zone, hemisphere).expect("forward");
            let (lat2, lon2) = utm_to_geographic(e, n, zone, hemisphere).expect("inverse");
            assert!((lat2 - lat).abs() < 1e-9, "lat {lat} -> {lat2}");
            assert!((lon2 - 10.0).abs() < 1e-9, "lon -> {lon2}");
        }
    }

    #[test]
    fn test_inverse_origin() {
        let (lat, lon) = utm_to_geographic(500_000.0, 0.0, 31, Hemisphere::North).expect("inverse");
        assert!(lat.abs() < 1e-12, "lat = {lat}");
        assert!((lon - 3.0).abs() < 1e-12, "lon = {lon}");
    }

    #[test]
    fn test_inverse_nonsense_input_not_rejected() {
        // 南半球带假北的 0 北向坐标落在南极附近，结果原样返回
        let (lat, _lon) = utm_to_geographic(500_000.0, 0.0, 31, Hemisphere::South).expect("inverse");
        assert!(lat < -89.0, "lat = {lat}");

        let (lat, lon) = utm_to_geographic(f64::NAN, 0.0, 31, Hemisphere::North).expect("inverse");
        assert!(lat.is_nan() || lon.is_nan());
    }

    #[test]
    fn test_utm_roundtrip_grid() {
        let mut lat = -80.0;
        while lat <= 84.0 {
            let mut lon = -179.5;
            while lon < 180.0 {
                let zone = resolve_zone(lon);
                let hemisphere = resolve_hemisphere(lat);
                let (e, n) = geographic_to_utm(lat, lon, zone, hemisphere).expect("forward");
                let (lat2, lon2) = utm_to_geographic(e, n, zone, hemisphere).expect("inverse");
                assert!(
                    (lat2 - lat).abs() < 1e-9 && (lon2 - lon).abs() < 1e-9,
                    "({lat}, {lon}) -> ({lat2}, {lon2})"
                );
                lon += 7.25;
            }
            lat += 8.5;
        }
    }
}
