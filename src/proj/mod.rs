pub mod azimuthal_equidistant;
pub mod catalog;
pub mod common;
pub mod equal_earth;
pub mod gnomonic;
pub mod mercator;
pub mod mollweide;
pub mod natural_earth;
pub mod orthographic;
pub mod stereographic;

pub use catalog::{ProjectionCatalog, ProjectionDescriptor, ProjectionId};

/// A point on the sphere, in degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GeoCoord {
    pub lon: f64,
    pub lat: f64,
}

impl GeoCoord {
    pub const fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    /// Component-wise linear interpolation in degree space.
    pub fn lerp(self, other: GeoCoord, t: f64) -> GeoCoord {
        GeoCoord {
            lon: self.lon + (other.lon - self.lon) * t,
            lat: self.lat + (other.lat - self.lat) * t,
        }
    }
}

/// A point on the projected plane. The visible map occupies [0,1]²,
/// `x` grows east and `y` grows north.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PlaneCoord {
    pub x: f64,
    pub y: f64,
}

impl PlaneCoord {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub const CENTER: PlaneCoord = PlaneCoord { x: 0.5, y: 0.5 };
}

/// Trait for map projections supporting forward and inverse transforms.
///
/// Kernels work in radians on a unit sphere centered on (0°, 0°) and map
/// onto the normalized plane. `None` marks a point outside the projection's
/// visible domain; it is never an error.
pub trait Projection: Send + Sync {
    /// Forward: (lon_rad, lat_rad) -> (x, y)
    fn forward(&self, lon: f64, lat: f64) -> Option<(f64, f64)>;

    /// Inverse: (x, y) -> (lon_rad, lat_rad)
    fn inverse(&self, x: f64, y: f64) -> Option<(f64, f64)>;

    /// Batch inverse transform (default: loop).
    fn inverse_batch(&self, coords: &[(f64, f64)], out: &mut [Option<(f64, f64)>]) {
        for (c, o) in coords.iter().zip(out.iter_mut()) {
            *o = self.inverse(c.0, c.1);
        }
    }
}
