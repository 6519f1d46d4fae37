// crates/gcv_geo/src/error.rs

//! 地理坐标转换错误类型
//!
//! 包含坐标越界、UTM 带号/半球无效以及投影计算失败等错误。
//!
//! # 错误分类
//!
//! - **范围错误**：纬度/经度超出定义域
//! - **带号错误**：UTM 带号不在 1-60 内
//! - **半球错误**：半球标识不是 `N`/`S`
//! - **计算错误**：投影结果非有限值

use thiserror::Error;

/// Geo 模块结果类型
pub type GeoResult<T> = Result<T, GeoError>;

/// 地理坐标转换错误
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeoError {
    /// 坐标超出有效范围
    #[error("{coord_type} 超出范围: {value} (允许范围: {min} 到 {max})")]
    CoordinateOutOfRange {
        /// 坐标类型（如"纬度"、"经度"）
        coord_type: &'static str,
        /// 实际值
        value: f64,
        /// 最小允许值
        min: f64,
        /// 最大允许值
        max: f64,
    },

    /// UTM 带号无效
    #[error("无效的 UTM 带号: {zone} (允许范围: 1-60)")]
    InvalidUtmZone {
        /// 无效的带号
        zone: i64,
    },

    /// 半球标识无效
    #[error("无效的半球标识: '{token}' (只接受 'N' 或 'S')")]
    InvalidHemisphere {
        /// 原始标识
        token: String,
    },

    /// 投影转换失败
    #[error("投影转换失败 [{operation}]: {message}")]
    ProjectionFailed {
        /// 操作类型（如"正向投影"、"逆向投影"）
        operation: &'static str,
        /// 错误详情
        message: String,
    },
}

// ============================================================================
// 便捷构造函数
// ============================================================================

impl GeoError {
    /// 创建坐标越界错误
    #[inline]
    pub fn coordinate_out_of_range(
        coord_type: &'static str,
        value: f64,
        min: f64,
        max: f64,
    ) -> Self {
        Self::CoordinateOutOfRange {
            coord_type,
            value,
            min,
            max,
        }
    }

    /// 创建无效的 UTM 带号错误
    #[inline]
    pub fn invalid_utm_zone(zone: i64) -> Self {
        Self::InvalidUtmZone { zone }
    }

    /// 创建无效的半球标识错误
    #[inline]
    pub fn invalid_hemisphere(token: impl Into<String>) -> Self {
        Self::InvalidHemisphere {
            token: token.into(),
        }
    }

    /// 创建投影转换失败错误
    #[inline]
    pub fn projection_failed(operation: &'static str, message: impl Into<String>) -> Self {
        Self::ProjectionFailed {
            operation,
            message: message.into(),
        }
    }

    /// 验证 UTM 带号
    #[inline]
    pub fn check_utm_zone(zone: i64) -> Result<(), Self> {
        if (1..=60).contains(&zone) {
            Ok(())
        } else {
            Err(Self::invalid_utm_zone(zone))
        }
    }

    /// 验证坐标范围（NaN 视为越界）
    #[inline]
    pub fn check_coordinate(
        coord_type: &'static str,
        value: f64,
        min: f64,
        max: f64,
    ) -> Result<(), Self> {
        if (min..=max).contains(&value) {
            Ok(())
        } else {
            Err(Self::coordinate_out_of_range(coord_type, value, min, max))
        }
    }

    /// 验证投影输出为有限值
    #[inline]
    pub fn check_finite(operation: &'static str, a: f64, b: f64) -> Result<(), Self> {
        if a.is_finite() && b.is_finite() {
            Ok(())
        } else {
            Err(Self::projection_failed(
                operation,
                format!("结果不是有限值 ({a}, {b})"),
            ))
        }
    }
}

// ============================================================================
// 测试
// ============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_message_is_user_facing() {
        // 南纬越界
        let err = GeoError::coordinate_out_of_range("纬度", -91.25, -90.0, 90.0);
        assert!(
            matches!(err, GeoError::CoordinateOutOfRange { coord_type: "纬度", value, .. } if value == -91.25)
        );
        let msg = err.to_string();
        for needle in ["纬度", "-91.25", "-90", "90"] {
            assert!(msg.contains(needle), "'{needle}' not in '{msg}'");
        }
    }

    #[test]
    fn test_zone_and_hemisphere_messages() {
        let zone = GeoError::invalid_utm_zone(0).to_string();
        assert!(zone.contains('0') && zone.contains("1-60"), "{zone}");

        let hemi = GeoError::invalid_hemisphere(" n");
        assert_eq!(hemi, GeoError::InvalidHemisphere { token: " n".to_string() });
        assert!(hemi.to_string().contains("' n'"));

        let proj = GeoError::projection_failed("正向投影", "NaN").to_string();
        assert!(proj.contains("[正向投影]") && proj.ends_with("NaN"), "{proj}");
    }

    #[test]
    fn test_zone_guard() {
        let accepted: Vec<i64> = (-2..=63).filter(|z| GeoError::check_utm_zone(*z).is_ok()).collect();
        assert_eq!(accepted.len(), 60);
        assert_eq!(accepted.first(), Some(&1));
        assert_eq!(accepted.last(), Some(&60));
    }

    #[test]
    fn test_coordinate_guard_edges() {
        let lon = |v| GeoError::check_coordinate("经度", v, -180.0, 180.0);
        assert!(lon(-180.0).is_ok());
        assert!(lon(180.0).is_ok());
        assert!(lon(180.000_001).is_err());
        assert!(lon(f64::NAN).is_err());
        assert!(lon(f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_check_finite() {
        assert!(GeoError::check_finite("正向投影", 1.0, 2.0).is_ok());
        assert!(GeoError::check_finite("正向投影", f64::NAN, 2.0).is_err());
        assert!(GeoError::check_finite("正向投影", 1.0, f64::INFINITY).is_err());
    }
}
