use serde::{Deserialize, Serialize};

use crate::comparison::ComparisonConfig;
use crate::error::{MultiMatchError, Result};

/// How a movie's shot annotation is turned into compared scanpaths.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Merge consecutive shots until each scene lasts `min_shot_duration`
    pub group_shots: bool,

    /// Minimum scene length when grouping shots, seconds
    pub min_shot_duration: f64,

    /// Length of the scanpath taken from each scene onset, seconds. Scenes
    /// shorter than this are not compared.
    pub window_secs: f64,

    /// Count the start and end of smooth pursuits as fixations
    pub pursuits_as_fixations: bool,
}

impl SceneConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.min_shot_duration.is_finite() || self.min_shot_duration < 0.0 {
            return Err(MultiMatchError::Configuration(format!(
                "minimum shot duration must be non-negative, got {}",
                self.min_shot_duration
            )));
        }
        if !self.window_secs.is_finite() || self.window_secs <= 0.0 {
            return Err(MultiMatchError::Configuration(format!(
                "scanpath window must be positive, got {}",
                self.window_secs
            )));
        }
        Ok(())
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            group_shots: false,
            // Median shot length of the movie annotation
            min_shot_duration: 4.92,
            window_secs: 4.92,
            pursuits_as_fixations: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ForrestConfig {
    pub comparison: ComparisonConfig,
    pub scenes: SceneConfig,
}

impl ForrestConfig {
    pub fn validate(&self) -> Result<()> {
        self.comparison.validate()?;
        self.scenes.validate()
    }
}
