//! Inverse sampler: screen position → geographic coordinate → source texture coordinate.
//!
//! The source image is equirectangular, so the last step is linear:
//!   u = lon/360 + ½, v = ½ - lat/180

use crate::params::{clamp_lat, wrap_lon, ViewParameters, DEFAULT_SCALE};
use crate::proj::{GeoCoord, PlaneCoord, Projection};

/// Returned for screen positions outside the projection's domain. Samples
/// the source image's bottom edge, which renders as an inert border color.
pub const SENTINEL: GeoCoord = GeoCoord::new(0.0, -90.0);

/// Normalized source-image coordinate; `v` grows downward like image rows.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TexCoord {
    pub u: f64,
    pub v: f64,
}

#[derive(Clone, Copy, Debug)]
pub struct InverseSampler {
    reference_scale: f64,
}

impl InverseSampler {
    /// `reference_scale` is the view scale that shows the map at 1:1.
    pub fn new(reference_scale: f64) -> Self {
        Self { reference_scale }
    }

    pub fn reference_scale(&self) -> f64 {
        self.reference_scale
    }

    /// Geographic coordinate shown at `uv` for the given projection and view.
    pub fn geographic(
        &self,
        uv: PlaneCoord,
        projection: &dyn Projection,
        params: &ViewParameters,
    ) -> GeoCoord {
        let zoom = params.zoom(self.reference_scale);
        let x = 0.5 + (uv.x - 0.5) / zoom;
        let y = 0.5 + (uv.y - 0.5) / zoom;

        let Some((lon, lat)) = projection.inverse(x, y) else {
            return SENTINEL;
        };

        GeoCoord::new(
            wrap_lon(lon.to_degrees() + params.rotation_lon()),
            clamp_lat(lat.to_degrees() + params.rotation_lat()),
        )
    }

    /// Equirectangular texture coordinate of a geographic point, clamped to [0,1].
    pub fn texture_coord(geo: GeoCoord) -> TexCoord {
        TexCoord {
            u: (geo.lon / 360.0 + 0.5).clamp(0.0, 1.0),
            v: (0.5 - geo.lat / 180.0).clamp(0.0, 1.0),
        }
    }

    pub fn sample(
        &self,
        uv: PlaneCoord,
        projection: &dyn Projection,
        params: &ViewParameters,
    ) -> TexCoord {
        Self::texture_coord(self.geographic(uv, projection, params))
    }
}

impl Default for InverseSampler {
    fn default() -> Self {
        Self::new(DEFAULT_SCALE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proj::ProjectionId;
    use approx::assert_relative_eq;

    #[test]
    fn test_center_maps_to_texture_center() {
        let sampler = InverseSampler::default();
        let params = ViewParameters::default();
        for id in ProjectionId::ALL {
            let tc = sampler.sample(PlaneCoord::CENTER, id.kernel(), &params);
            assert_relative_eq!(tc.u, 0.5, epsilon = 1e-9);
            assert_relative_eq!(tc.v, 0.5, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_outside_domain_yields_sentinel() {
        let sampler = InverseSampler::default();
        let params = ViewParameters::new(150.0, 45.0, 30.0);
        let geo = sampler.geographic(
            PlaneCoord::new(0.0, 0.0),
            ProjectionId::Orthographic.kernel(),
            &params,
        );
        assert_eq!(geo, SENTINEL);
        let tc = InverseSampler::texture_coord(geo);
        assert_relative_eq!(tc.u, 0.5);
        assert_relative_eq!(tc.v, 1.0);
    }

    #[test]
    fn test_rotation_is_added_and_wrapped() {
        let sampler = InverseSampler::default();
        let params = ViewParameters::new(150.0, 170.0, 0.0);
        // Mercator x = 0.75 is lon 90°; 90 + 170 wraps to -100
        let geo = sampler.geographic(
            PlaneCoord::new(0.75, 0.5),
            ProjectionId::Mercator.kernel(),
            &params,
        );
        assert_relative_eq!(geo.lon, -100.0, epsilon = 1e-9);
        assert_relative_eq!(geo.lat, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_latitude_rotation_is_clamped() {
        let sampler = InverseSampler::default();
        let params = ViewParameters::new(150.0, 0.0, 60.0);
        let geo = sampler.geographic(
            PlaneCoord::new(0.5, 0.9),
            ProjectionId::Mercator.kernel(),
            &params,
        );
        assert_relative_eq!(geo.lat, 90.0);
    }

    #[test]
    fn test_zoom_magnifies_about_center() {
        let sampler = InverseSampler::default();
        let base = ViewParameters::default();
        let zoomed = ViewParameters::new(300.0, 0.0, 0.0);
        let merc = ProjectionId::Mercator.kernel();
        let a = sampler.geographic(PlaneCoord::new(0.75, 0.5), merc, &zoomed);
        let b = sampler.geographic(PlaneCoord::new(0.625, 0.5), merc, &base);
        assert_relative_eq!(a.lon, b.lon, epsilon = 1e-9);
        assert_relative_eq!(a.lon, 45.0, epsilon = 1e-9);
    }

    #[test]
    fn test_texture_coord_clamped() {
        let tc = InverseSampler::texture_coord(GeoCoord::new(400.0, -120.0));
        assert_relative_eq!(tc.u, 1.0);
        assert_relative_eq!(tc.v, 1.0);
        let tc = InverseSampler::texture_coord(GeoCoord::new(-180.0, 90.0));
        assert_relative_eq!(tc.u, 0.0);
        assert_relative_eq!(tc.v, 0.0);
    }
}
