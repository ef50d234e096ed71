//! Stereographic projection (spherical, conformal, equatorial aspect).
//!
//!   forward: k = 2/(1 + cos c), X = k·cosφ·sinλ, Y = k·sinφ
//!   inverse: c = 2·atan(ρ/2)
//!
//! where cos c = cosφ·cosλ is the angular distance from the center.
//! The plane shows the hemisphere around (0°, 0°): ½ ± X/4 keeps the
//! 90° horizon on the unit square's inscribed circle.

use crate::proj::common::{azimuthal_inverse, cos_center_distance, EPS};
use crate::proj::Projection;

/// Plane units per normalized unit.
const EXTENT: f64 = 4.0;

#[derive(Clone, Copy, Debug, Default)]
pub struct Stereographic;

impl Projection for Stereographic {
    fn forward(&self, lon: f64, lat: f64) -> Option<(f64, f64)> {
        let denom = 1.0 + cos_center_distance(lon, lat);
        // Antipode of the center projects to infinity
        if denom < EPS {
            return None;
        }
        let k = 2.0 / denom;
        let x = 0.5 + k * lat.cos() * lon.sin() / EXTENT;
        let y = 0.5 + k * lat.sin() / EXTENT;
        Some((x, y))
    }

    fn inverse(&self, x: f64, y: f64) -> Option<(f64, f64)> {
        let px = (x - 0.5) * EXTENT;
        let py = (y - 0.5) * EXTENT;
        let rho = px.hypot(py);
        let c = 2.0 * (rho / 2.0).atan();
        Some(azimuthal_inverse(px, py, rho, c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_center() {
        let (x, y) = Stereographic.forward(0.0, 0.0).unwrap();
        assert_relative_eq!(x, 0.5);
        assert_relative_eq!(y, 0.5);
        let (lon, lat) = Stereographic.inverse(0.5, 0.5).unwrap();
        assert_eq!((lon, lat), (0.0, 0.0));
    }

    #[test]
    fn test_horizon_on_unit_circle() {
        let (x, y) = Stereographic.forward(FRAC_PI_2, 0.0).unwrap();
        assert_relative_eq!(x, 1.0, epsilon = 1e-12);
        assert_relative_eq!(y, 0.5, epsilon = 1e-12);
        let (_, y) = Stereographic.forward(0.0, FRAC_PI_2).unwrap();
        assert_relative_eq!(y, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_antipode_undefined() {
        assert!(Stereographic.forward(PI, 0.0).is_none());
    }

    #[test]
    fn test_roundtrip_beyond_hemisphere() {
        let cases: &[(f64, f64)] = &[(30.0, 20.0), (-120.0, 45.0), (150.0, -60.0), (0.0, -89.0)];
        for &(lon_deg, lat_deg) in cases {
            let lon = lon_deg.to_radians();
            let lat = lat_deg.to_radians();
            let (x, y) = Stereographic.forward(lon, lat).unwrap();
            let (lon2, lat2) = Stereographic.inverse(x, y).unwrap();
            assert_relative_eq!(lon2, lon, epsilon = 1e-9);
            assert_relative_eq!(lat2, lat, epsilon = 1e-9);
        }
    }
}
