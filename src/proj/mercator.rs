//! Mercator projection (spherical, conformal, cylindrical).
//!
//!   forward: x = ½ + λ/2π, y = ½ + ln(tan(π/4 + φ/2))/2π
//!   inverse: λ = 2π(x - ½), φ = 2·atan(exp(2π(y - ½))) - π/2
//!
//! The plane spans λ ∈ [-π, π] horizontally and φ ∈ ±85.0511° vertically,
//! where the map becomes square.

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, TAU};

use crate::proj::Projection;

/// Maximum latitude (≈85.0511°) at which the map is bounded to a square.
pub const MAX_LAT: f64 = 1.484_422_229_745_332_4; // atan(sinh(π)) in radians

/// Spherical Mercator.
#[derive(Clone, Copy, Debug, Default)]
pub struct Mercator;

impl Projection for Mercator {
    fn forward(&self, lon: f64, lat: f64) -> Option<(f64, f64)> {
        // Clamp latitude so the poles map to the top/bottom edge instead of infinity
        let lat = lat.clamp(-MAX_LAT, MAX_LAT);
        let x = 0.5 + lon / TAU;
        let y = 0.5 + (FRAC_PI_4 + lat / 2.0).tan().ln() / TAU;
        Some((x, y))
    }

    fn inverse(&self, x: f64, y: f64) -> Option<(f64, f64)> {
        let lon = (x - 0.5) * TAU;
        let lat = 2.0 * ((y - 0.5) * TAU).exp().atan() - FRAC_PI_2;
        Some((lon, lat))
    }
}
