//! Equal Earth projection (Šavrič, Patterson & Jenny 2018), spherical form.
//!
//!   θ = asin(√3/2 · sinφ)
//!   forward: X = 2√3·λ·cosθ / (3·(9A₄θ⁸ + 7A₃θ⁶ + 3A₂θ² + A₁))
//!            Y = A₄θ⁹ + A₃θ⁷ + A₂θ³ + A₁θ
//!   inverse: Newton–Raphson on θ for Y, then φ = asin(2sinθ/√3)
//!
//! The outline's full width and height are stretched onto [0,1].

use std::f64::consts::{FRAC_PI_3, PI};

use crate::proj::common::{asin_clamped, newton_fixed, EPS, NEWTON_ITERATIONS};
use crate::proj::Projection;

const A1: f64 = 1.340_264;
const A2: f64 = -0.081_106;
const A3: f64 = 0.000_893;
const A4: f64 = 0.003_796;

/// √3 / 2
const M: f64 = 0.866_025_403_784_438_6;

/// Y(θ) and its derivative dY/dθ.
fn y_of_theta(theta: f64) -> (f64, f64) {
    let t2 = theta * theta;
    let t6 = t2 * t2 * t2;
    let y = theta * (A1 + A2 * t2 + t6 * (A3 + A4 * t2));
    let dy = A1 + 3.0 * A2 * t2 + t6 * (7.0 * A3 + 9.0 * A4 * t2);
    (y, dy)
}

/// Half-width of the outline (λ = π on the equator).
fn half_width() -> f64 {
    PI / (M * A1)
}

/// Half-height of the outline (the pole, θ = π/3).
fn half_height() -> f64 {
    y_of_theta(FRAC_PI_3).0
}

#[derive(Clone, Copy, Debug, Default)]
pub struct EqualEarth;

impl Projection for EqualEarth {
    fn forward(&self, lon: f64, lat: f64) -> Option<(f64, f64)> {
        let theta = asin_clamped(M * lat.sin());
        let (y, dy) = y_of_theta(theta);
        let x = lon * theta.cos() / (M * dy);
        Some((0.5 + x / (2.0 * half_width()), 0.5 + y / (2.0 * half_height())))
    }

    fn inverse(&self, x: f64, y: f64) -> Option<(f64, f64)> {
        let px = (x - 0.5) * 2.0 * half_width();
        let py = (y - 0.5) * 2.0 * half_height();
        if py.abs() > half_height() + EPS {
            return None;
        }

        let theta = newton_fixed(py, NEWTON_ITERATIONS, |t| {
            let (yt, dy) = y_of_theta(t);
            (yt - py, dy)
        });

        let (_, dy) = y_of_theta(theta);
        let cos_theta = theta.cos();
        let lon = if cos_theta.abs() < EPS {
            0.0
        } else {
            M * px * dy / cos_theta
        };
        if lon.abs() > PI + EPS {
            return None;
        }
        let lat = asin_clamped(theta.sin() / M);
        Some((lon, lat))
    }
}
