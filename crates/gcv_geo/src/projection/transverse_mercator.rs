//! 高精度横轴墨卡托投影（Karney 2011 算法）
//!
//! 实现基于 Krüger 级数的横轴墨卡托投影，精度可达亚毫米级。
//!
//! # 参考文献
//!
//! Karney, C. F. F. (2011). "Transverse Mercator with an accuracy of a few nanometers".
//! Journal of Geodesy, 85(8), 475-485.
//!
//! # 算法特点
//!
//! - 默认 6 阶 Krüger 级数（`order-8` 特性启用 8 阶）
//! - 带内精度达纳米级，远离中央子午线时仍可计算（含背面半球）
//! - 极点附近不做保护，数值自然退化

use std::f64::consts::FRAC_PI_2;
use std::f64::consts::PI;

use num_complex::Complex64;

use super::math_utils::{ang_diff, ang_normalize, polyval, sincosd, tauf, taupf};
use super::params::TransverseMercatorParams;
use crate::error::{GeoError, GeoResult};
use crate::zone::Hemisphere;

// ============================================================================
// 系数表 (来自 GeographicLib)
// ============================================================================

/// 6阶 alpha 系数 (正向投影)
#[cfg(not(feature = "order-8"))]
const ALPHA_COEFFS: &[&[f64]] = &[
    // alp[1]/n^1
    &[31564.0, -66675.0, 34440.0, 47250.0, -100800.0, 75600.0, 151200.0],
    // alp[2]/n^2
    &[-1983433.0, 863232.0, 748608.0, -1161216.0, 524160.0, 1935360.0],
    // alp[3]/n^3
    &[670412.0, 406647.0, -533952.0, 184464.0, 725760.0],
    // alp[4]/n^4
    &[6601661.0, -7732800.0, 2230245.0, 7257600.0],
    // alp[5]/n^5
    &[-13675556.0, 3438171.0, 7983360.0],
    // alp[6]/n^6
    &[212378941.0, 319334400.0],
];

/// 6阶 beta 系数 (逆向投影)
#[cfg(not(feature = "order-8"))]
const BETA_COEFFS: &[&[f64]] = &[
    // bet[1]/n^1
    &[384796.0, -382725.0, -6720.0, 932400.0, -1612800.0, 1209600.0, 2419200.0],
    // bet[2]/n^2
    &[-1118711.0, 1695744.0, -1174656.0, 258048.0, 80640.0, 3870720.0],
    // bet[3]/n^3
    &[22276.0, -16929.0, -15984.0, 12852.0, 362880.0],
    // bet[4]/n^4
    &[-830251.0, -158400.0, 197865.0, 7257600.0],
    // bet[5]/n^5
    &[-435388.0, 453717.0, 15966720.0],
    // bet[6]/n^6
    &[20648693.0, 638668800.0],
];

/// 8阶 alpha 系数 (正向投影)
#[cfg(feature = "order-8")]
const ALPHA_COEFFS: &[&[f64]] = &[
    &[-75900428.0, 37884525.0, 42422016.0, -89611200.0, 46287360.0,
      63504000.0, -135475200.0, 101606400.0, 203212800.0],
    &[148003883.0, 83274912.0, -178508970.0, 77690880.0, 67374720.0,
      -104509440.0, 47174400.0, 174182400.0],
    &[318729724.0, -738126169.0, 294981280.0, 178924680.0, -234938880.0,
      81164160.0, 319334400.0],
    &[-40176129013.0, 14967552000.0, 6971354016.0, -8165836800.0,
      2355138720.0, 7664025600.0],
    &[10421654396.0, 3997835751.0, -4266773472.0, 1072709352.0, 2490808320.0],
    &[175214326799.0, -171950693600.0, 38652967262.0, 58118860800.0],
    &[-67039739596.0, 13700311101.0, 12454041600.0],
    &[1424729850961.0, 743921418240.0],
];

/// 8阶 beta 系数 (逆向投影)
#[cfg(feature = "order-8")]
const BETA_COEFFS: &[&[f64]] = &[
    &[31777436.0, -37845269.0, 43097152.0, -42865200.0, -752640.0,
      104428800.0, -180633600.0, 135475200.0, 270950400.0],
    &[24749483.0, 14930208.0, -100683990.0, 152616960.0, -105719040.0,
      23224320.0, 7257600.0, 348364800.0],
    &[-232468668.0, 101880889.0, 39205760.0, -29795040.0, -28131840.0,
      22619520.0, 638668800.0],
    &[324154477.0, 1433121792.0, -876745056.0, -167270400.0, 208945440.0,
      7664025600.0],
    &[457888660.0, -312227409.0, -67920528.0, 70779852.0, 2490808320.0],
    &[-19841813847.0, -3665348512.0, 3758062126.0, 116237721600.0],
    &[-1989295244.0, 1979471673.0, 49816166400.0],
    &[191773887257.0, 3719607091200.0],
];

/// b1 系数 (rectifying radius / a)
const B1_COEFFS: &[f64] = &[1.0, 4.0, 64.0, 256.0, 256.0];

/// Krüger 级数阶数
#[cfg(not(feature = "order-8"))]
pub const MAX_ORDER: usize = 6;

/// Krüger 级数阶数
#[cfg(feature = "order-8")]
pub const MAX_ORDER: usize = 8;

// ============================================================================
// 投影器
// ============================================================================

/// 横轴墨卡托投影器
///
/// 构造时预计算椭球相关的级数系数，之后的正/逆向计算都是纯函数。
#[derive(Debug, Clone)]
pub struct TransverseMercator {
    params: TransverseMercatorParams,
    /// signed eccentricity
    es: f64,
    /// a1 = a * b1
    a1: f64,
    alp: [f64; MAX_ORDER],
    bet: [f64; MAX_ORDER],
}

impl TransverseMercator {
    /// 从参数创建投影器
    #[must_use]
    pub fn new(params: TransverseMercatorParams) -> Self {
        let ellipsoid = params.ellipsoid;
        let n = ellipsoid.third_flattening();
        let n2 = n * n;

        let last = B1_COEFFS.len() - 1;
        let b1 = polyval(&B1_COEFFS[..last], n2) / (B1_COEFFS[last] * (1.0 + n));

        let mut alp = [0.0; MAX_ORDER];
        let mut bet = [0.0; MAX_ORDER];
        let mut d = n;
        for l in 0..MAX_ORDER {
            let coeffs_a = ALPHA_COEFFS[l];
            let coeffs_b = BETA_COEFFS[l];
            let m = coeffs_a.len() - 1;

            alp[l] = d * polyval(&coeffs_a[..m], n) / coeffs_a[m];
            bet[l] = d * polyval(&coeffs_b[..m], n) / coeffs_b[m];
            d *= n;
        }

        Self {
            params,
            es: ellipsoid.signed_e(),
            a1: b1 * ellipsoid.a,
            alp,
            bet,
        }
    }

    /// WGS84 UTM 投影器（带号需已校验）
    #[must_use]
    pub fn utm(zone: u8, hemisphere: Hemisphere) -> Self {
        Self::new(TransverseMercatorParams::utm(zone, hemisphere))
    }

    /// 投影参数
    #[must_use]
    pub fn params(&self) -> &TransverseMercatorParams {
        &self.params
    }

    /// 正向投影：(经度, 纬度) -> (东向, 北向)
    ///
    /// 经度不限于本带，离带较远的点照常计算。
    ///
    /// # Errors
    /// 纬度超出 [-90, 90]（含 NaN）时返回 [`GeoError::CoordinateOutOfRange`]
    pub fn forward(&self, lon: f64, lat: f64) -> GeoResult<(f64, f64)> {
        GeoError::check_coordinate("纬度", lat, -90.0, 90.0)?;

        let k0 = self.params.scale_factor;
        let lon_diff = ang_diff(self.params.central_meridian, lon);

        let mut latsign = if lat.is_sign_negative() { -1.0 } else { 1.0 };
        let lonsign = if lon_diff.is_sign_negative() { -1.0 } else { 1.0 };
        let lat = lat.abs();
        let mut lon_diff = lon_diff.abs();

        // 距中央子午线超过 90° 时在背面半球计算
        let backside = lon_diff > 90.0;
        if backside {
            if lat == 0.0 {
                latsign = -1.0;
            }
            lon_diff = 180.0 - lon_diff;
        }

        let (sphi, cphi) = sincosd(lat);
        let (slam, clam) = sincosd(lon_diff);

        let (xip, etap) = if lat == 90.0 {
            (FRAC_PI_2, 0.0)
        } else {
            let tau = sphi / cphi;
            let taup = taupf(tau, self.es);
            (taup.atan2(clam), (slam / taup.hypot(clam)).asinh())
        };

        let zeta = clenshaw(xip, etap, &self.alp, 1.0);

        let xi = if backside { PI - zeta.re } else { zeta.re };
        let y = self.a1 * k0 * xi * latsign;
        let x = self.a1 * k0 * zeta.im * lonsign;

        Ok((x + self.params.false_easting, y + self.params.false_northing))
    }

    /// 逆向投影：(东向, 北向) -> (经度, 纬度)
    ///
    /// 不对结果做经纬度范围校验。
    #[must_use]
    pub fn inverse(&self, x: f64, y: f64) -> (f64, f64) {
        let k0 = self.params.scale_factor;
        let xi = (y - self.params.false_northing) / (self.a1 * k0);
        let eta = (x - self.params.false_easting) / (self.a1 * k0);

        let xisign = if xi.is_sign_negative() { -1.0 } else { 1.0 };
        let etasign = if eta.is_sign_negative() { -1.0 } else { 1.0 };
        let mut xi = xi.abs();
        let eta = eta.abs();

        let backside = xi > FRAC_PI_2;
        if backside {
            xi = PI - xi;
        }

        let zetap = clenshaw(xi, eta, &self.bet, -1.0);
        let (xip, etap) = (zetap.re, zetap.im);

        // 从 ξ', η' 恢复经纬度
        let s = etap.sinh();
        let c = xip.cos().max(0.0);
        let r = s.hypot(c);

        let (mut lon, lat) = if r == 0.0 {
            (0.0, 90.0)
        } else {
            let tau = tauf(xip.sin() / r, self.es);
            (s.atan2(c).to_degrees(), tau.atan().to_degrees())
        };

        if backside {
            lon = 180.0 - lon;
        }
        lon *= etasign;

        let lon = ang_normalize(lon + self.params.central_meridian);
        (lon, lat * xisign)
    }
}

/// Clenshaw 求和：ζ + sign · Σ c_j sin(2jζ)，ζ = ξ + iη
fn clenshaw(xi: f64, eta: f64, coeffs: &[f64; MAX_ORDER], sign: f64) -> Complex64 {
    let c0 = (2.0 * xi).cos();
    let ch0 = (2.0 * eta).cosh();
    let s0 = (2.0 * xi).sin();
    let sh0 = (2.0 * eta).sinh();

    // 2 cos(2ζ)
    let a = Complex64::new(2.0 * c0 * ch0, -2.0 * s0 * sh0);

    let mut y0 = Complex64::new(0.0, 0.0);
    let mut y1 = Complex64::new(0.0, 0.0);
    for &c in coeffs.iter().rev() {
        let tmp = y0;
        y0 = a * y0 - y1 + sign * c;
        y1 = tmp;
    }

    // sin(2ζ)
    let sin_zeta = Complex64::new(s0 * ch0, c0 * sh0);
    Complex64::new(xi, eta) + sin_zeta * y0
}

// ============================================================================
// 测试
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn utm_51n() -> TransverseMercator {
        TransverseMercator::utm(51, Hemisphere::North)
    }

    #[test]
    fn test_forward_central_meridian() {
        let tm = utm_51n();
        let (x, _y) = tm.forward(123.0, 40.0).expect("forward failed");
        assert!((x - 500_000.0).abs() < 1e-6, "x = {x}");
    }

    #[test]
    fn test_forward_equator_origin() {
        let tm = utm_51n();
        let (x, y) = tm.forward(123.0, 0.0).expect("forward failed");
        assert!((x - 500_000.0).abs() < 1e-6, "x = {x}");
        assert!(y.abs() < 1e-6, "y = {y}");
    }

    #[test]
    fn test_forward_rejects_bad_latitude() {
        let tm = utm_51n();
        assert!(tm.forward(123.0, 90.5).is_err());
        assert!(tm.forward(123.0, f64::NAN).is_err());
    }

    #[test]
    fn test_roundtrip_high_precision() {
        let tm = utm_51n();

        let test_cases = [
            (121.0, 30.0),
            (123.0, 40.0),
            (125.0, 50.0),
            (120.0, 0.0),
            (126.0, 84.0),
            (121.5, -35.0),
        ];

        for (lon, lat) in test_cases {
            let (x, y) = tm.forward(lon, lat).expect("forward");
            let (lon2, lat2) = tm.inverse(x, y);

            let err_lon = (lon - lon2).abs();
            let err_lat = (lat - lat2).abs();

            assert!(
                err_lon < 1e-11 && err_lat < 1e-11,
                "({lon}, {lat}): err_lon={err_lon:.2e}, err_lat={err_lat:.2e}"
            );
        }
    }

    /// EPSG 标准验证（目标精度：0.1mm）
    #[test]
    fn test_epsg_validation_submillimeter() {
        let tm = utm_51n();

        const TEST_CASES: &[(f64, f64, f64, f64)] = &[
            // PROJ 9 (EPSG:32651) 参考值
            (121.880356, 29.887703, 391_888.063_726_413, 3_306_868.456_385_104),
            (121.430427, 28.637151, 346_582.410_843_301_1, 3_168_793.409_367_069),
            (121.880772, 31.491324, 393_700.365_020_183_5, 3_484_597.440_826_551),
            (122.625275, 30.246954, 463_948.333_307_260_7, 3_346_209.757_229_396),
        ];

        const TOLERANCE: f64 = 1e-4;

        for (lon, lat, exp_x, exp_y) in TEST_CASES {
            let (x, y) = tm.forward(*lon, *lat).expect("forward");
            let err_x = (x - exp_x).abs();
            let err_y = (y - exp_y).abs();
            assert!(
                err_x < TOLERANCE && err_y < TOLERANCE,
                "({lon}, {lat}): err_x={:.6}mm, err_y={:.6}mm",
                err_x * 1000.0,
                err_y * 1000.0
            );
        }
    }

    #[test]
    fn test_far_off_zone_is_computable() {
        // 距中央子午线 60° 与背面半球 (150°) 都应给出有限值并可逆
        let tm = TransverseMercator::utm(31, Hemisphere::North);
        for (lon, lat) in [(63.0, 20.0), (153.0, 20.0), (-147.0, 45.0)] {
            let (x, y) = tm.forward(lon, lat).expect("forward");
            assert!(x.is_finite() && y.is_finite(), "({lon}, {lat}) -> ({x}, {y})");
            let (lon2, lat2) = tm.inverse(x, y);
            assert!((lat2 - lat).abs() < 1e-9, "lat {lat} -> {lat2}");
            assert!((ang_diff(lon, lon2)).abs() < 1e-9, "lon {lon} -> {lon2}");
        }
    }

    #[test]
    fn test_north_pole() {
        let tm = utm_51n();
        let (x, y) = tm.forward(10.0, 90.0).expect("forward");
        assert!((x - 500_000.0).abs() < 1e-6, "x = {x}");
        assert!((y - 9_997_964.943).abs() < 1e-3, "y = {y}");

        let (_lon, lat) = tm.inverse(x, y);
        assert!((lat - 90.0).abs() < 1e-9, "lat = {lat}");
    }

    #[test]
    fn test_south_false_northing() {
        let north = TransverseMercator::utm(56, Hemisphere::North);
        let south = TransverseMercator::utm(56, Hemisphere::South);
        let (xn, yn) = north.forward(151.0, -33.9).expect("forward");
        let (xs, ys) = south.forward(151.0, -33.9).expect("forward");
        assert!((xn - xs).abs() < 1e-9);
        assert!((ys - yn - 10_000_000.0).abs() < 1e-6);
        assert!(yn < 0.0 && ys > 6_000_000.0);
    }
}
