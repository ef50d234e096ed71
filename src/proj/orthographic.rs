//! Orthographic projection (spherical, perspective from infinity).
//!
//!   forward: X = cosφ·sinλ, Y = sinφ, visible only where cosφ·cosλ ≥ 0
//!   inverse: c = asin(ρ), defined for ρ ≤ 1

use crate::proj::common::{asin_clamped, azimuthal_inverse, cos_center_distance};
use crate::proj::Projection;

/// Slack on the limb so points exactly on the horizon survive a round trip.
const LIMB_TOLERANCE: f64 = 1e-9;

#[derive(Clone, Copy, Debug, Default)]
pub struct Orthographic;

impl Projection for Orthographic {
    fn forward(&self, lon: f64, lat: f64) -> Option<(f64, f64)> {
        if cos_center_distance(lon, lat) < 0.0 {
            return None;
        }
        let x = 0.5 + lat.cos() * lon.sin() / 2.0;
        let y = 0.5 + lat.sin() / 2.0;
        Some((x, y))
    }

    fn inverse(&self, x: f64, y: f64) -> Option<(f64, f64)> {
        let px = (x - 0.5) * 2.0;
        let py = (y - 0.5) * 2.0;
        let rho = px.hypot(py);
        if rho > 1.0 + LIMB_TOLERANCE {
            return None;
        }
        Some(azimuthal_inverse(px, py, rho, asin_clamped(rho)))
    }
}
