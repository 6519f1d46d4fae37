// crates/gcv_geo/src/ellipsoid.rs
//! 椭球体定义
//!
//! 所有投影都基于 WGS84 椭球体。
//!
//! # 示例
//!
//! ```
//! use gcv_geo::ellipsoid::Ellipsoid;
//!
//! let wgs84 = Ellipsoid::WGS84;
//! assert!((wgs84.a - 6_378_137.0).abs() < 1e-9);
//! assert!(wgs84.e2() > 0.0066);
//! ```

use serde::{Deserialize, Serialize};

/// 地球椭球体
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ellipsoid {
    /// 长半轴 (m)
    pub a: f64,
    /// 扁率 (flattening)
    pub f: f64,
}

impl Ellipsoid {
    /// WGS84 椭球体 (GPS 标准)
    ///
    /// - EPSG: 7030
    /// - 长半轴: 6378137.0 m
    /// - 扁率: 1/298.257223563
    pub const WGS84: Self = Self {
        a: 6_378_137.0,
        f: 1.0 / 298.257_223_563,
    };

    /// 短半轴 b = a(1-f)
    #[inline]
    #[must_use]
    pub fn b(&self) -> f64 {
        self.a * (1.0 - self.f)
    }

    /// 第一偏心率的平方 e² = 2f - f²
    #[inline]
    #[must_use]
    pub fn e2(&self) -> f64 {
        self.f * (2.0 - self.f)
    }

    /// 带符号的第一偏心率（扁率为负时取负）
    #[inline]
    #[must_use]
    pub fn signed_e(&self) -> f64 {
        self.f.signum() * self.e2().abs().sqrt()
    }

    /// 第三扁率 n = f / (2 - f)
    #[inline]
    #[must_use]
    pub fn third_flattening(&self) -> f64 {
        self.f / (2.0 - self.f)
    }
}

impl Default for Ellipsoid {
    fn default() -> Self {
        Self::WGS84
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wgs84_derived() {
        let e = Ellipsoid::WGS84;
        assert!((e.b() - 6_356_752.314_245).abs() < 1e-3, "b = {}", e.b());
        assert!((e.e2() - 0.006_694_379_990_14).abs() < 1e-12);
        assert!((e.signed_e() - 0.081_819_190_842_6).abs() < 1e-12);
        assert!((e.third_flattening() - 0.001_679_220_386_38).abs() < 1e-12);
    }

    #[test]
    fn test_default_is_wgs84() {
        assert_eq!(Ellipsoid::default(), Ellipsoid::WGS84);
    }
}
