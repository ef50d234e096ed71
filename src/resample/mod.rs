//! Resampling of the equirectangular source image.

pub mod bilinear;
pub mod nearest;

use ndarray::{ArrayView3, Axis};
use serde::{Deserialize, Serialize};

use crate::sampler::TexCoord;

/// Available resampling methods.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResamplingMethod {
    Nearest,
    #[default]
    Bilinear,
}

impl ResamplingMethod {
    /// Parse from a string name.
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "nearest" => Some(Self::Nearest),
            "bilinear" => Some(Self::Bilinear),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Nearest => "nearest",
            Self::Bilinear => "bilinear",
        }
    }
}

/// Sample an RGBA image shaped `(rows, cols, 4)` at a normalized texture
/// coordinate. Edges are clamped; `None` only for an empty image.
pub fn sample_rgba(
    image: &ArrayView3<'_, u8>,
    tc: TexCoord,
    method: ResamplingMethod,
) -> Option<[u8; 4]> {
    let (rows, cols, _) = image.dim();
    let x = tc.u * cols as f64;
    let y = tc.v * rows as f64;

    let mut px = [0u8; 4];
    for (c, out) in px.iter_mut().enumerate() {
        let band = image.index_axis(Axis(2), c);
        *out = match method {
            ResamplingMethod::Nearest => nearest::sample(&band, x, y)?,
            ResamplingMethod::Bilinear => {
                let v = bilinear::sample(&band, x, y)?;
                v.round().clamp(0.0, 255.0) as u8
            }
        };
    }
    Some(px)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array3;

    fn checker() -> Array3<u8> {
        // 2×2 image: red, green / blue, white
        let data = vec![
            255, 0, 0, 255, 0, 255, 0, 255, //
            0, 0, 255, 255, 255, 255, 255, 255,
        ];
        Array3::from_shape_vec((2, 2, 4), data).unwrap()
    }

    #[test]
    fn test_from_name() {
        assert_eq!(ResamplingMethod::from_name("Nearest"), Some(ResamplingMethod::Nearest));
        assert_eq!(ResamplingMethod::from_name("bilinear"), Some(ResamplingMethod::Bilinear));
        assert_eq!(ResamplingMethod::from_name("lanczos"), None);
        assert_eq!(ResamplingMethod::default(), ResamplingMethod::Bilinear);
    }

    #[test]
    fn test_nearest_quadrants() {
        let img = checker();
        let view = img.view();
        let tc = |u, v| TexCoord { u, v };
        let m = ResamplingMethod::Nearest;
        assert_eq!(sample_rgba(&view, tc(0.25, 0.25), m), Some([255, 0, 0, 255]));
        assert_eq!(sample_rgba(&view, tc(0.75, 0.25), m), Some([0, 255, 0, 255]));
        assert_eq!(sample_rgba(&view, tc(0.25, 0.75), m), Some([0, 0, 255, 255]));
        assert_eq!(sample_rgba(&view, tc(1.0, 1.0), m), Some([255, 255, 255, 255]));
    }

    #[test]
    fn test_bilinear_center_blends_all_four() {
        let img = checker();
        let px = sample_rgba(&img.view(), TexCoord { u: 0.5, v: 0.5 }, ResamplingMethod::Bilinear)
            .unwrap();
        // (255 + 0 + 0 + 255) / 4, (0 + 255 + 0 + 255) / 4, (0 + 0 + 255 + 255) / 4
        assert_eq!(px, [128, 128, 128, 255]);
    }

    #[test]
    fn test_empty_image() {
        let img = Array3::<u8>::zeros((0, 0, 4));
        assert!(sample_rgba(&img.view(), TexCoord { u: 0.5, v: 0.5 }, ResamplingMethod::Nearest)
            .is_none());
    }
}
