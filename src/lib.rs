//! Warp equirectangular world images through a fixed catalog of map
//! projections, with eased transitions between projections and graticule
//! overlays.

pub mod config;
pub mod error;
pub mod graticule;
pub mod params;
pub mod proj;
pub mod resample;
pub mod sampler;
pub mod transition;
pub mod warp;

pub use config::RenderConfig;
pub use error::{ConfigError, RenderError};
pub use params::ViewParameters;
pub use proj::{GeoCoord, PlaneCoord, ProjectionCatalog, ProjectionId};
pub use transition::{FrameState, TransitionController};
pub use warp::{Renderer, SourceImage};
