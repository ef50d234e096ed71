//! Common helpers for projection math (guarded trig, Newton solves, azimuthal geometry).

/// Threshold below which a radius or denominator is treated as zero.
pub const EPS: f64 = 1e-10;

/// Iteration count for the fixed-cost Newton–Raphson inverses.
pub const NEWTON_ITERATIONS: usize = 5;

/// `asin` with its argument clamped to [-1, 1].
pub fn asin_clamped(v: f64) -> f64 {
    v.clamp(-1.0, 1.0).asin()
}

/// `acos` with its argument clamped to [-1, 1].
pub fn acos_clamped(v: f64) -> f64 {
    v.clamp(-1.0, 1.0).acos()
}

/// Fixed-count Newton–Raphson. `f` returns (residual, derivative).
///
/// No convergence check: every call costs exactly `iterations` steps.
pub fn newton_fixed<F>(initial: f64, iterations: usize, f: F) -> f64
where
    F: Fn(f64) -> (f64, f64),
{
    let mut x = initial;
    for _ in 0..iterations {
        let (fx, dfx) = f(x);
        if dfx.abs() < EPS {
            break;
        }
        x -= fx / dfx;
    }
    x
}

/// Newton–Raphson that stops once a step is smaller than `tolerance`,
/// bounded at `max_iterations`.
pub fn newton_tolerance<F>(initial: f64, max_iterations: usize, tolerance: f64, f: F) -> f64
where
    F: Fn(f64) -> (f64, f64),
{
    let mut x = initial;
    for _ in 0..max_iterations {
        let (fx, dfx) = f(x);
        if dfx.abs() < EPS {
            break;
        }
        let step = fx / dfx;
        x -= step;
        if step.abs() < tolerance {
            break;
        }
    }
    x
}

/// Cosine of the angular distance from the projection center (0°, 0°).
pub fn cos_center_distance(lon: f64, lat: f64) -> f64 {
    lat.cos() * lon.cos()
}

/// Recover (lon, lat) for an equatorial-aspect azimuthal projection from a
/// plane vector (px, py) of length `rho` and its angular distance `c`.
pub fn azimuthal_inverse(px: f64, py: f64, rho: f64, c: f64) -> (f64, f64) {
    if rho < EPS {
        return (0.0, 0.0);
    }
    let (sin_c, cos_c) = c.sin_cos();
    let lat = asin_clamped(py * sin_c / rho);
    let lon = (px * sin_c).atan2(rho * cos_c);
    (lon, lat)
}
