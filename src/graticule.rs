//! Graticule tracing: meridian and parallel polylines on the projected plane.
//!
//! Lines are sampled through the forward mapping. A sample outside the
//! projection's visible domain ends the current subpath, so lines never
//! jump across hidden regions.

use serde::{Deserialize, Serialize};

use crate::params::{ViewParameters, DEFAULT_SCALE};
use crate::proj::{PlaneCoord, Projection};

/// Finest spacing accepted for lines and samples, in degrees.
pub const MIN_STEP_DEG: f64 = 0.1;

/// Spacing of graticule lines and of the samples along them, in degrees.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraticuleConfig {
    pub meridian_step: f64,
    pub parallel_step: f64,
    pub sample_step: f64,
}

impl GraticuleConfig {
    /// Raise positive steps finer than [`MIN_STEP_DEG`] to that bound.
    /// Zero, negative and non-finite steps are left alone and trace nothing.
    pub fn clamped(self) -> Self {
        let clamp = |step: f64| {
            if step.is_finite() && step > 0.0 {
                step.max(MIN_STEP_DEG)
            } else {
                step
            }
        };
        Self {
            meridian_step: clamp(self.meridian_step),
            parallel_step: clamp(self.parallel_step),
            sample_step: clamp(self.sample_step),
        }
    }
}

impl Default for GraticuleConfig {
    fn default() -> Self {
        Self {
            meridian_step: 30.0,
            parallel_step: 15.0,
            sample_step: 2.0,
        }
    }
}

/// One meridian (constant longitude) or parallel (constant latitude).
#[derive(Clone, Debug, PartialEq)]
pub struct GraticuleLine {
    /// Longitude of a meridian or latitude of a parallel, in degrees.
    pub value: f64,
    pub subpaths: Vec<Vec<PlaneCoord>>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Graticule {
    pub meridians: Vec<GraticuleLine>,
    pub parallels: Vec<GraticuleLine>,
}

impl Graticule {
    pub fn lines(&self) -> impl Iterator<Item = &GraticuleLine> {
        self.meridians.iter().chain(self.parallels.iter())
    }

    /// Convert to raster coordinates for a `width` x `height` target.
    /// Row 0 is the top edge, so y is flipped.
    pub fn to_pixels(&self, width: usize, height: usize) -> Vec<Vec<(f64, f64)>> {
        let (w, h) = (width as f64, height as f64);
        self.lines()
            .flat_map(|line| line.subpaths.iter())
            .map(|path| path.iter().map(|p| (p.x * w, (1.0 - p.y) * h)).collect())
            .collect()
    }
}

/// Values from `start` to `end` inclusive in increments of `step`.
fn axis_values(start: f64, end: f64, step: f64) -> Vec<f64> {
    if !(step.is_finite() && step >= MIN_STEP_DEG) {
        return Vec::new();
    }
    let n = ((end - start) / step + 1e-9).floor() as usize;
    (0..=n).map(|i| start + i as f64 * step).collect()
}

#[derive(Clone, Copy, Debug)]
pub struct GraticuleTracer {
    config: GraticuleConfig,
    reference_scale: f64,
}

impl GraticuleTracer {
    /// Steps finer than [`MIN_STEP_DEG`] are raised to it.
    pub fn new(config: GraticuleConfig, reference_scale: f64) -> Self {
        Self {
            config: config.clamped(),
            reference_scale,
        }
    }

    pub fn config(&self) -> &GraticuleConfig {
        &self.config
    }

    pub fn trace(&self, projection: &dyn Projection, params: &ViewParameters) -> Graticule {
        let zoom = params.zoom(self.reference_scale);
        let (rot_lon, rot_lat) = (params.rotation_lon(), params.rotation_lat());
        let samples_lat = axis_values(-90.0, 90.0, self.config.sample_step);
        let samples_lon = axis_values(-180.0, 180.0, self.config.sample_step);

        let project = |lon: f64, lat: f64| -> Option<PlaneCoord> {
            let (x, y) = projection.forward(
                (lon - rot_lon).to_radians(),
                (lat - rot_lat).to_radians(),
            )?;
            Some(PlaneCoord::new(
                0.5 + (x - 0.5) * zoom,
                0.5 + (y - 0.5) * zoom,
            ))
        };

        let meridians = axis_values(-180.0, 180.0, self.config.meridian_step)
            .into_iter()
            .map(|lon| GraticuleLine {
                value: lon,
                subpaths: split_visible(samples_lat.iter().map(|&lat| project(lon, lat))),
            })
            .collect();

        let parallels = axis_values(-90.0, 90.0, self.config.parallel_step)
            .into_iter()
            .map(|lat| GraticuleLine {
                value: lat,
                subpaths: split_visible(samples_lon.iter().map(|&lon| project(lon, lat))),
            })
            .collect();

        let graticule = Graticule {
            meridians,
            parallels,
        };
        log::trace!(
            "Traced graticule: {} subpaths",
            graticule.lines().map(|l| l.subpaths.len()).sum::<usize>()
        );
        graticule
    }
}

impl Default for GraticuleTracer {
    fn default() -> Self {
        Self::new(GraticuleConfig::default(), DEFAULT_SCALE)
    }
}

/// Break a sample sequence at `None`s, dropping runs shorter than two points.
fn split_visible(samples: impl Iterator<Item = Option<PlaneCoord>>) -> Vec<Vec<PlaneCoord>> {
    let mut paths = Vec::new();
    let mut current = Vec::new();
    for sample in samples {
        match sample {
            Some(p) => current.push(p),
            None => {
                if current.len() >= 2 {
                    paths.push(std::mem::take(&mut current));
                } else {
                    current.clear();
                }
            }
        }
    }
    if current.len() >= 2 {
        paths.push(current);
    }
    paths
}
