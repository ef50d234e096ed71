//! Frame rendering.

pub mod engine;

pub use engine::{Renderer, SourceImage};
