//! Azimuthal equidistant projection (spherical, equatorial aspect).
//!
//!   forward: c = acos(cosφ·cosλ), k = c/sin c, X = k·cosφ·sinλ, Y = k·sinφ
//!   inverse: c = ρ
//!
//! Distances from the center are true to scale; the whole sphere fits in a
//! disc of radius π, mapped onto the unit square's inscribed circle.

use std::f64::consts::{PI, TAU};

use crate::proj::common::{acos_clamped, azimuthal_inverse, cos_center_distance, EPS};
use crate::proj::Projection;

#[derive(Clone, Copy, Debug, Default)]
pub struct AzimuthalEquidistant;

impl Projection for AzimuthalEquidistant {
    fn forward(&self, lon: f64, lat: f64) -> Option<(f64, f64)> {
        let c = acos_clamped(cos_center_distance(lon, lat));
        if c < EPS {
            return Some((0.5, 0.5));
        }
        let sin_c = c.sin();
        // The antipode is a circle on the plane, not a point
        if sin_c < EPS {
            return None;
        }
        let k = c / sin_c;
        let x = 0.5 + k * lat.cos() * lon.sin() / TAU;
        let y = 0.5 + k * lat.sin() / TAU;
        Some((x, y))
    }

    fn inverse(&self, x: f64, y: f64) -> Option<(f64, f64)> {
        let px = (x - 0.5) * TAU;
        let py = (y - 0.5) * TAU;
        let rho = px.hypot(py);
        if rho > PI {
            return None;
        }
        Some(azimuthal_inverse(px, py, rho, rho))
    }
}
