//! Inverse-mapping render engine.
//!
//! For each output pixel, maps the screen position back through the active
//! projection (and, mid-transition, the outgoing one) to a geographic
//! coordinate, then samples the equirectangular source image there.
//! Exact inverse per pixel; rows are evaluated in parallel.

use std::path::Path;

use ndarray::parallel::prelude::*;
use ndarray::{Array3, ArrayView3, Axis};

use crate::config::RenderConfig;
use crate::error::RenderError;
use crate::graticule::{Graticule, GraticuleTracer};
use crate::params::ViewParameters;
use crate::proj::{PlaneCoord, ProjectionId};
use crate::resample;
use crate::sampler::{InverseSampler, TexCoord};
use crate::transition::FrameState;

/// Decoded RGBA8 raster in equirectangular layout, shaped `(rows, cols, 4)`.
#[derive(Clone, Debug, PartialEq)]
pub struct SourceImage {
    pixels: Array3<u8>,
}

impl SourceImage {
    /// Wrap a row-major RGBA8 buffer of `width * height * 4` bytes.
    pub fn from_rgba8(width: usize, height: usize, data: Vec<u8>) -> Result<Self, RenderError> {
        let expected = width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(4))
            .ok_or_else(|| {
                RenderError::InvalidImage(format!("{width}x{height} RGBA image is too large"))
            })?;
        if data.len() != expected {
            return Err(RenderError::InvalidImage(format!(
                "{width}x{height} RGBA image needs {expected} bytes, got {}",
                data.len()
            )));
        }
        let pixels = Array3::from_shape_vec((height, width, 4), data)
            .map_err(|e| RenderError::InvalidImage(e.to_string()))?;
        Self::from_array(pixels)
    }

    pub fn from_array(pixels: Array3<u8>) -> Result<Self, RenderError> {
        let (rows, cols, channels) = pixels.dim();
        if channels != 4 {
            return Err(RenderError::InvalidImage(format!(
                "expected 4 channels, got {channels}"
            )));
        }
        if rows == 0 || cols == 0 {
            return Err(RenderError::InvalidImage("image is empty".to_string()));
        }
        Ok(Self { pixels })
    }

    pub fn width(&self) -> usize {
        let (_, cols, _) = self.pixels.dim();
        cols
    }

    pub fn height(&self) -> usize {
        let (rows, _, _) = self.pixels.dim();
        rows
    }

    pub fn view(&self) -> ArrayView3<'_, u8> {
        self.pixels.view()
    }
}

/// Per-frame renderer owning the source image.
#[derive(Clone, Debug)]
pub struct Renderer {
    config: RenderConfig,
    sampler: InverseSampler,
    tracer: GraticuleTracer,
    image: Option<SourceImage>,
}

impl Renderer {
    pub fn new(config: RenderConfig) -> Result<Self, RenderError> {
        config.validate()?;
        Ok(Self {
            sampler: InverseSampler::new(config.reference_scale),
            tracer: GraticuleTracer::new(config.graticule, config.reference_scale),
            config,
            image: None,
        })
    }

    /// Build from a RON config file, using defaults if it does not exist.
    pub fn from_config_file(path: &Path) -> Result<Self, RenderError> {
        Self::new(RenderConfig::load_or_default(path)?)
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn sampler(&self) -> &InverseSampler {
        &self.sampler
    }

    /// Replace the source image.
    pub fn load_image(&mut self, image: SourceImage) {
        log::info!("Loaded {}x{} source image", image.width(), image.height());
        self.image = Some(image);
    }

    pub fn clear_image(&mut self) {
        if self.image.take().is_some() {
            log::info!("Cleared source image");
        }
    }

    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }

    pub fn image(&self) -> Option<&SourceImage> {
        self.image.as_ref()
    }

    /// Pure per-pixel mapping from a screen position in [0,1]² (y north)
    /// to a source texture coordinate, for this frame.
    pub fn pixel_mapping(
        &self,
        frame: &FrameState,
    ) -> impl Fn(PlaneCoord) -> TexCoord + Send + Sync {
        let sampler = self.sampler;
        let params = frame.params;
        let t = frame.progress;
        let to = frame.to.kernel();
        let from = frame.from.filter(|_| frame.is_blending()).map(|id| id.kernel());

        move |uv: PlaneCoord| {
            let geo_to = sampler.geographic(uv, to, &params);
            let geo = match from {
                Some(from) => sampler.geographic(uv, from, &params).lerp(geo_to, t),
                None => geo_to,
            };
            InverseSampler::texture_coord(geo)
        }
    }

    /// Render one frame of `shape = (rows, cols)` RGBA pixels.
    pub fn render(
        &self,
        frame: &FrameState,
        shape: (usize, usize),
    ) -> Result<Array3<u8>, RenderError> {
        let (rows, cols) = shape;
        if rows == 0 || cols == 0 {
            return Err(RenderError::Shape(format!(
                "output must be non-empty, got {rows}x{cols}"
            )));
        }

        let background = self.config.background;
        let Some(image) = &self.image else {
            return Ok(Array3::from_shape_fn((rows, cols, 4), |(_, _, c)| background[c]));
        };

        let src = image.view();
        let method = self.config.resampling;
        let mapping = self.pixel_mapping(frame);
        let mut dst = Array3::<u8>::zeros((rows, cols, 4));

        dst.axis_iter_mut(Axis(0))
            .into_par_iter()
            .enumerate()
            .for_each(|(row, mut line)| {
                let y = 1.0 - (row as f64 + 0.5) / rows as f64;
                for (col, mut px) in line.axis_iter_mut(Axis(0)).enumerate() {
                    let uv = PlaneCoord::new((col as f64 + 0.5) / cols as f64, y);
                    let rgba = resample::sample_rgba(&src, mapping(uv), method)
                        .unwrap_or(background);
                    for (d, s) in px.iter_mut().zip(rgba) {
                        *d = s;
                    }
                }
            });

        log::trace!(
            "Rendered {rows}x{cols} frame: {} (from {:?}, t = {:.3})",
            frame.to.key(),
            frame.from.map(|id| id.key()),
            frame.progress
        );
        Ok(dst)
    }

    /// Graticule polylines for a projection and view.
    pub fn graticule(&self, projection: ProjectionId, params: &ViewParameters) -> Graticule {
        self.tracer.trace(projection.kernel(), params)
    }
}
