//! 横轴墨卡托投影参数

use serde::{Deserialize, Serialize};

use crate::ellipsoid::Ellipsoid;
use crate::zone::{central_meridian, Hemisphere};

/// UTM 比例因子
pub const UTM_K0: f64 = 0.9996;

/// UTM 假东 (米)
pub const UTM_FALSE_EASTING: f64 = 500_000.0;

/// 横轴墨卡托投影参数
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransverseMercatorParams {
    /// 椭球体
    pub ellipsoid: Ellipsoid,
    /// 中央子午线 (度)
    pub central_meridian: f64,
    /// 比例因子
    pub scale_factor: f64,
    /// 假东 (米)
    pub false_easting: f64,
    /// 假北 (米)
    pub false_northing: f64,
}

impl TransverseMercatorParams {
    /// 创建 WGS84 UTM 参数
    ///
    /// 带号需事先校验，这里不再检查。
    #[must_use]
    pub fn utm(zone: u8, hemisphere: Hemisphere) -> Self {
        Self {
            ellipsoid: Ellipsoid::WGS84,
            central_meridian: central_meridian(zone),
            scale_factor: UTM_K0,
            false_easting: UTM_FALSE_EASTING,
            false_northing: hemisphere.false_northing(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utm_params() {
        let params = TransverseMercatorParams::utm(50, Hemisphere::North);
        assert!((params.central_meridian - 117.0).abs() < 1e-10);
        assert!((params.scale_factor - 0.9996).abs() < 1e-10);
        assert!((params.false_easting - 500_000.0).abs() < 1e-10);
        assert!(params.false_northing.abs() < 1e-10);
        assert_eq!(params.ellipsoid, Ellipsoid::WGS84);
    }

    #[test]
    fn test_utm_south() {
        let params = TransverseMercatorParams::utm(19, Hemisphere::South);
        assert!((params.central_meridian - (-69.0)).abs() < 1e-10);
        assert!((params.false_northing - 10_000_000.0).abs() < 1e-10);
    }
}
