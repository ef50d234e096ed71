//! Gnomonic projection (spherical, perspective from the sphere's center).
//!
//!   forward: X = cosφ·sinλ / cos c, Y = sinφ / cos c, visible where cos c > 0
//!   inverse: c = atan(ρ)
//!
//! Great circles map to straight lines. The plane is unbounded; ½ ± X/4
//! shows roughly 63° around the center on each axis.

use crate::proj::common::{azimuthal_inverse, cos_center_distance, EPS};
use crate::proj::Projection;

const EXTENT: f64 = 4.0;

#[derive(Clone, Copy, Debug, Default)]
pub struct Gnomonic;

impl Projection for Gnomonic {
    fn forward(&self, lon: f64, lat: f64) -> Option<(f64, f64)> {
        let cos_c = cos_center_distance(lon, lat);
        if cos_c <= EPS {
            return None;
        }
        let x = 0.5 + lat.cos() * lon.sin() / cos_c / EXTENT;
        let y = 0.5 + lat.sin() / cos_c / EXTENT;
        Some((x, y))
    }

    fn inverse(&self, x: f64, y: f64) -> Option<(f64, f64)> {
        let px = (x - 0.5) * EXTENT;
        let py = (y - 0.5) * EXTENT;
        let rho = px.hypot(py);
        Some(azimuthal_inverse(px, py, rho, rho.atan()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_horizon_excluded() {
        assert!(Gnomonic.forward(FRAC_PI_2, 0.0).is_none());
        assert!(Gnomonic.forward(2.0, 0.3).is_none());
    }

    #[test]
    fn test_equator_is_straight() {
        for lon_deg in [-60.0_f64, -20.0, 0.0, 35.0, 70.0] {
            let (_, y) = Gnomonic.forward(lon_deg.to_radians(), 0.0).unwrap();
            assert_relative_eq!(y, 0.5, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_every_plane_point_defined() {
        for &(x, y) in &[(0.0, 0.0), (1.0, 1.0), (-3.0, 7.0), (0.5, 0.5)] {
            assert!(Gnomonic.inverse(x, y).is_some());
        }
    }

    #[test]
    fn test_roundtrip() {
        let cases: &[(f64, f64)] = &[(0.0, 0.0), (45.0, 30.0), (-60.0, -40.0), (10.0, 75.0)];
        for &(lon_deg, lat_deg) in cases {
            let lon = lon_deg.to_radians();
            let lat = lat_deg.to_radians();
            let (x, y) = Gnomonic.forward(lon, lat).unwrap();
            let (lon2, lat2) = Gnomonic.inverse(x, y).unwrap();
            assert_relative_eq!(lon2, lon, epsilon = 1e-9);
            assert_relative_eq!(lat2, lat, epsilon = 1e-9);
        }
    }
}
