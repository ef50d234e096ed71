//! Render configuration with defaults and RON persistence.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, RenderError};
use crate::graticule::{GraticuleConfig, MIN_STEP_DEG};
use crate::params::{DEFAULT_SCALE, MAX_SCALE, MIN_SCALE};
use crate::proj::ProjectionId;
use crate::resample::ResamplingMethod;
use crate::transition::DEFAULT_DURATION_MS;

/// Conventional file name for a persisted [`RenderConfig`].
pub const CONFIG_FILE_NAME: &str = "mapmorph.ron";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RenderConfig {
    /// RGBA fill for pixels when no image is loaded.
    pub background: [u8; 4],
    pub resampling: ResamplingMethod,
    /// View scale at which the map is shown at 1:1.
    pub reference_scale: f64,
    /// Transition duration in milliseconds.
    pub transition_ms: f64,
    pub initial_projection: ProjectionId,
    pub graticule: GraticuleConfig,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            background: [230, 230, 230, 255],
            resampling: ResamplingMethod::Bilinear,
            reference_scale: DEFAULT_SCALE,
            transition_ms: DEFAULT_DURATION_MS,
            initial_projection: ProjectionId::Mercator,
            graticule: GraticuleConfig::default(),
        }
    }
}

impl RenderConfig {
    pub fn from_ron_str(s: &str) -> Result<Self, ConfigError> {
        ron::from_str(s).map_err(ConfigError::Parse)
    }

    pub fn to_ron_string(&self) -> Result<String, ConfigError> {
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);
        ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::Serialize)
    }

    /// Load from `path`, or fall back to defaults if the file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            log::info!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path).map_err(ConfigError::Read)?;
        let config = Self::from_ron_str(&contents)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir).map_err(ConfigError::Write)?;
        }
        std::fs::write(path, self.to_ron_string()?).map_err(ConfigError::Write)
    }

    /// Re-read `path`: `Some(new_config)` if it differs from `self`.
    pub fn reload(&self, path: &Path) -> Result<Option<Self>, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(ConfigError::Read)?;
        let config = Self::from_ron_str(&contents)?;
        if &config != self {
            log::info!("Config reloaded with changes");
            Ok(Some(config))
        } else {
            Ok(None)
        }
    }

    pub fn validate(&self) -> Result<(), RenderError> {
        if !(self.reference_scale.is_finite()
            && (MIN_SCALE..=MAX_SCALE).contains(&self.reference_scale))
        {
            return Err(RenderError::InvalidConfig(format!(
                "reference_scale {} outside [{MIN_SCALE}, {MAX_SCALE}]",
                self.reference_scale
            )));
        }
        if !(self.transition_ms.is_finite() && self.transition_ms >= 0.0) {
            return Err(RenderError::InvalidConfig(format!(
                "transition_ms must be non-negative, got {}",
                self.transition_ms
            )));
        }
        let g = &self.graticule;
        for (name, step) in [
            ("meridian_step", g.meridian_step),
            ("parallel_step", g.parallel_step),
            ("sample_step", g.sample_step),
        ] {
            if !(step.is_finite() && (MIN_STEP_DEG..=360.0).contains(&step)) {
                return Err(RenderError::InvalidConfig(format!(
                    "graticule {name} must be in [{MIN_STEP_DEG}, 360], got {step}"
                )));
            }
        }
        Ok(())
    }
}
