//! View parameters fed to the engine by the controls collaborator.

pub const MIN_SCALE: f64 = 50.0;
pub const MAX_SCALE: f64 = 500.0;
pub const DEFAULT_SCALE: f64 = 150.0;

/// Wrap a longitude into [-180, 180]. +180 stays +180.
pub fn wrap_lon(lon: f64) -> f64 {
    let wrapped = (lon + 180.0).rem_euclid(360.0) - 180.0;
    if wrapped == -180.0 && lon > 0.0 {
        180.0
    } else {
        wrapped
    }
}

/// Clamp a latitude into [-90, 90].
pub fn clamp_lat(lat: f64) -> f64 {
    lat.clamp(-90.0, 90.0)
}

/// Scale and rotation of the view. Scale is kept within
/// [`MIN_SCALE`, `MAX_SCALE`]; rotations are stored as given and
/// wrapped/clamped when consumed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewParameters {
    scale: f64,
    rotation_lon: f64,
    rotation_lat: f64,
}

impl ViewParameters {
    pub fn new(scale: f64, rotation_lon: f64, rotation_lat: f64) -> Self {
        let mut params = Self::default();
        params.set_scale(scale);
        params.rotation_lon = rotation_lon;
        params.rotation_lat = rotation_lat;
        params
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn rotation_lon(&self) -> f64 {
        self.rotation_lon
    }

    pub fn rotation_lat(&self) -> f64 {
        self.rotation_lat
    }

    /// Set the scale, clamped to [50, 500]. Non-finite values are ignored.
    pub fn set_scale(&mut self, scale: f64) {
        if scale.is_finite() {
            self.scale = scale.clamp(MIN_SCALE, MAX_SCALE);
        }
    }

    pub fn set_rotation_lon(&mut self, degrees: f64) {
        if degrees.is_finite() {
            self.rotation_lon = degrees;
        }
    }

    pub fn set_rotation_lat(&mut self, degrees: f64) {
        if degrees.is_finite() {
            self.rotation_lat = degrees;
        }
    }

    /// Restore scale 150 and zero rotation.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Longitude rotation wrapped into [-180, 180].
    pub fn wrapped_rotation_lon(&self) -> f64 {
        wrap_lon(self.rotation_lon)
    }

    /// Magnification relative to `reference_scale`.
    pub fn zoom(&self, reference_scale: f64) -> f64 {
        self.scale / reference_scale
    }
}

impl Default for ViewParameters {
    fn default() -> Self {
        Self {
            scale: DEFAULT_SCALE,
            rotation_lon: 0.0,
            rotation_lat: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_scale_clamping() {
        let mut params = ViewParameters::default();
        params.set_scale(10.0);
        assert_relative_eq!(params.scale(), 50.0);
        params.set_scale(9999.0);
        assert_relative_eq!(params.scale(), 500.0);
        params.set_scale(275.0);
        assert_relative_eq!(params.scale(), 275.0);
        params.set_scale(f64::NAN);
        assert_relative_eq!(params.scale(), 275.0);
    }

    #[test]
    fn test_new_clamps() {
        let params = ViewParameters::new(1.0, 30.0, -20.0);
        assert_relative_eq!(params.scale(), MIN_SCALE);
        assert_relative_eq!(params.rotation_lon(), 30.0);
        assert_relative_eq!(params.rotation_lat(), -20.0);
    }

    #[test]
    fn test_reset() {
        let mut params = ViewParameters::new(400.0, 90.0, 45.0);
        params.reset();
        assert_eq!(params, ViewParameters::default());
        assert_relative_eq!(params.scale(), DEFAULT_SCALE);
    }

    #[test]
    fn test_wrap_lon() {
        assert_relative_eq!(wrap_lon(0.0), 0.0);
        assert_relative_eq!(wrap_lon(190.0), -170.0);
        assert_relative_eq!(wrap_lon(-190.0), 170.0);
        assert_relative_eq!(wrap_lon(720.0 + 45.0), 45.0);
        assert_relative_eq!(wrap_lon(180.0), 180.0);
        assert_relative_eq!(wrap_lon(-180.0), -180.0);
    }

    #[test]
    fn test_wrapped_rotation_and_zoom() {
        let params = ViewParameters::new(300.0, 370.0, 0.0);
        assert_relative_eq!(params.wrapped_rotation_lon(), 10.0, epsilon = 1e-12);
        assert_relative_eq!(params.zoom(150.0), 2.0);
        assert_relative_eq!(clamp_lat(120.0), 90.0);
    }
}
