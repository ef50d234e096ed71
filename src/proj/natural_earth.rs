//! Natural Earth projection (Šavrič, Jenny, Patterson, Petrovič & Hurni 2011).
//!
//!   forward: X = λ·l(φ), Y = d(φ)
//!     l(φ) = 0.8707 - 0.131979φ² - 0.013791φ⁴ + 0.003971φ¹⁰ - 0.001529φ¹²
//!     d(φ) = φ(1.007226 + 0.015085φ² - 0.044475φ⁶ + 0.028874φ⁸ - 0.005916φ¹⁰)
//!   inverse: Newton–Raphson on φ for Y, then λ = X / l(φ)

use std::f64::consts::{FRAC_PI_2, PI};

use crate::proj::common::{newton_fixed, EPS, NEWTON_ITERATIONS};
use crate::proj::Projection;

const L0: f64 = 0.8707;
const L1: f64 = -0.131_979;
const L2: f64 = -0.013_791;
const L3: f64 = 0.003_971;
const L4: f64 = -0.001_529;

const D0: f64 = 1.007_226;
const D1: f64 = 0.015_085;
const D2: f64 = -0.044_475;
const D3: f64 = 0.028_874;
const D4: f64 = -0.005_916;

/// Parallel length factor l(φ).
fn length(phi: f64) -> f64 {
    let p2 = phi * phi;
    let p4 = p2 * p2;
    L0 + p2 * (L1 + p2 * (L2 + p4 * p2 * (L3 + L4 * p2)))
}

/// Parallel distance d(φ) and its derivative.
fn distance(phi: f64) -> (f64, f64) {
    let p2 = phi * phi;
    let p4 = p2 * p2;
    let d = phi * (D0 + p2 * (D1 + p4 * (D2 + D3 * p2 + D4 * p4)));
    let dd = D0 + p2 * (3.0 * D1 + p4 * (7.0 * D2 + 9.0 * D3 * p2 + 11.0 * D4 * p4));
    (d, dd)
}

fn half_width() -> f64 {
    PI * L0
}

fn half_height() -> f64 {
    distance(FRAC_PI_2).0
}

#[derive(Clone, Copy, Debug, Default)]
pub struct NaturalEarth;

impl Projection for NaturalEarth {
    fn forward(&self, lon: f64, lat: f64) -> Option<(f64, f64)> {
        let x = lon * length(lat);
        let (y, _) = distance(lat);
        Some((0.5 + x / (2.0 * half_width()), 0.5 + y / (2.0 * half_height())))
    }

    fn inverse(&self, x: f64, y: f64) -> Option<(f64, f64)> {
        let px = (x - 0.5) * 2.0 * half_width();
        let py = (y - 0.5) * 2.0 * half_height();
        if py.abs() > half_height() + EPS {
            return None;
        }

        let lat = newton_fixed(py, NEWTON_ITERATIONS, |phi| {
            let (d, dd) = distance(phi);
            (d - py, dd)
        })
        .clamp(-FRAC_PI_2, FRAC_PI_2);

        let lon = px / length(lat);
        if lon.abs() > PI + EPS {
            return None;
        }
        Some((lon, lat))
    }
}
