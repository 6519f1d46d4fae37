//! 高精度数值工具（移植自 `GeographicLib` 的 Math 模块）

/// 误差补偿求和，返回 (和, 舍入误差)
#[inline]
pub fn sum_exact(u: f64, v: f64) -> (f64, f64) {
    let s = u + v;
    let up = s - v;
    let vpp = s - up;
    let up = up - u;
    let vpp = vpp - v;
    let t = -(up + vpp);
    (s, t)
}

/// e * atanh(e * x) 的稳定计算
#[inline]
pub fn eatanhe(x: f64, es: f64) -> f64 {
    if es > 0.0 {
        es * (es * x).atanh()
    } else if es < 0.0 {
        -es * (-es * x).atan()
    } else {
        0.0
    }
}

/// tan(φ) → tan(φ') 共形纬度正向转换 (Karney Eq. 7-9)
#[inline]
pub fn taupf(tau: f64, es: f64) -> f64 {
    let tau1 = tau.hypot(1.0);
    let sig = eatanhe(tau / tau1, es).sinh();
    sig.hypot(1.0) * tau - sig * tau1
}

/// tan(φ') → tan(φ) 共形纬度逆向转换 (Karney Eq. 19-21)
///
/// Newton 迭代，通常 2-3 次收敛
pub fn tauf(taup: f64, es: f64) -> f64 {
    const MAX_ITER: usize = 8;
    // sqrt(f64::EPSILON) / 10
    const TOL: f64 = 1.490_116_119_384_765_6e-9;

    let e2m = 1.0 - es * es;
    // 接近极点时用渐近式作为初值
    let mut tau = if taup.abs() > 70.0 {
        taup * eatanhe(1.0, es).exp()
    } else {
        taup / e2m
    };
    let stol = TOL * taup.abs().max(1.0);

    for _ in 0..MAX_ITER {
        let taupa = taupf(tau, es);
        let dtau = (taup - taupa) * (1.0 + e2m * tau * tau)
            / (e2m * tau.hypot(1.0) * taupa.hypot(1.0));
        tau += dtau;
        if !(dtau.abs() >= stol) {
            break;
        }
    }
    tau
}

/// 角度归一化到 [-180, 180)
#[inline]
pub fn ang_normalize(x: f64) -> f64 {
    let mut x = x % 360.0;
    if x < -180.0 {
        x += 360.0;
    }
    if x >= 180.0 {
        x -= 360.0;
    }
    x
}

/// 角度差 y - x，结果在 [-180, 180) 内
pub fn ang_diff(x: f64, y: f64) -> f64 {
    let (d, t) = sum_exact(ang_normalize(-x), ang_normalize(y));
    ang_normalize(d) + t
}

/// 度数版本的 (sin, cos)，对 90° 整数倍给出精确值
pub fn sincosd(x: f64) -> (f64, f64) {
    let mut r = x % 360.0;
    if r < 0.0 {
        r += 360.0;
    }
    let q = (r / 90.0 + 0.5).floor() as i32;
    r -= 90.0 * f64::from(q);
    let (s, c) = r.to_radians().sin_cos();

    match q & 3 {
        0 => (s, c),
        1 => (c, -s),
        2 => (-s, -c),
        _ => (-c, s),
    }
}

/// 多项式求值 (Horner)，系数从高次到低次
#[inline]
pub fn polyval(coeffs: &[f64], x: f64) -> f64 {
    coeffs.iter().fold(0.0, |acc, &c| acc * x + c)
}
