//! Mollweide projection (spherical, equal-area, pseudocylindrical).
//!
//!   auxiliary angle: 2θ + sin 2θ = π·sinφ
//!   forward: X = (2√2/π)·λ·cosθ, Y = √2·sinθ
//!   inverse: θ = asin(Y/√2), φ = asin((2θ + sin 2θ)/π), λ = πX / (2√2·cosθ)
//!
//! The auxiliary-angle solve converges slowly near the poles, so it runs to
//! a tolerance instead of a fixed step count.

use std::f64::consts::{FRAC_PI_2, PI, SQRT_2};

use crate::proj::common::{asin_clamped, newton_tolerance, EPS};
use crate::proj::Projection;

const THETA_MAX_ITERATIONS: usize = 20;
const THETA_TOLERANCE: f64 = 1e-10;

const HALF_WIDTH: f64 = 2.0 * SQRT_2;
const HALF_HEIGHT: f64 = SQRT_2;

/// Solve 2θ + sin 2θ = π·sinφ for θ.
pub fn auxiliary_angle(lat: f64) -> f64 {
    if (lat.abs() - FRAC_PI_2).abs() < EPS {
        return FRAC_PI_2.copysign(lat);
    }
    let k = PI * lat.sin();
    newton_tolerance(lat, THETA_MAX_ITERATIONS, THETA_TOLERANCE, |t| {
        (2.0 * t + (2.0 * t).sin() - k, 2.0 + 2.0 * (2.0 * t).cos())
    })
}

#[derive(Clone, Copy, Debug, Default)]
pub struct Mollweide;

impl Projection for Mollweide {
    fn forward(&self, lon: f64, lat: f64) -> Option<(f64, f64)> {
        let theta = auxiliary_angle(lat);
        let x = 2.0 * SQRT_2 / PI * lon * theta.cos();
        let y = SQRT_2 * theta.sin();
        Some((0.5 + x / (2.0 * HALF_WIDTH), 0.5 + y / (2.0 * HALF_HEIGHT)))
    }

    fn inverse(&self, x: f64, y: f64) -> Option<(f64, f64)> {
        let px = (x - 0.5) * 2.0 * HALF_WIDTH;
        let py = (y - 0.5) * 2.0 * HALF_HEIGHT;
        if py.abs() > HALF_HEIGHT + EPS {
            return None;
        }

        let theta = asin_clamped(py / SQRT_2);
        let lat = asin_clamped((2.0 * theta + (2.0 * theta).sin()) / PI);
        let cos_theta = theta.cos();
        let lon = if cos_theta < EPS {
            0.0
        } else {
            PI * px / (2.0 * SQRT_2 * cos_theta)
        };
        // Outside the ellipse
        if lon.abs() > PI + EPS {
            return None;
        }
        Some((lon, lat))
    }
}
