use serde::{Deserialize, Serialize};

use crate::error::{MultiMatchError, Result};

/// Screen extent in pixels. Only the diagonal enters the similarity scores;
/// the extents themselves bound valid fixation positions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenSize {
    pub width: f64,
    pub height: f64,
}

impl ScreenSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Parse a `[width, height]` pair.
    pub fn from_slice(dimensions: &[f64]) -> Result<Self> {
        match dimensions {
            [width, height] => {
                let screen = Self::new(*width, *height);
                screen.validate()?;
                Ok(screen)
            }
            _ => Err(MultiMatchError::Configuration(format!(
                "screen size needs exactly 2 entries [width, height], got {}",
                dimensions.len()
            ))),
        }
    }

    pub fn diagonal(&self) -> f64 {
        self.width.hypot(self.height)
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        (0.0..=self.width).contains(&x) && (0.0..=self.height).contains(&y)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.width.is_finite() && self.width > 0.0)
            || !(self.height.is_finite() && self.height > 0.0)
        {
            return Err(MultiMatchError::Configuration(format!(
                "screen size must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        Ok(())
    }
}

impl Default for ScreenSize {
    fn default() -> Self {
        Self::new(1280.0, 720.0)
    }
}

/// Thresholds below which consecutive fixations are merged during
/// simplification. All zero disables merging.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupingThresholds {
    /// Maximum direction change between consecutive saccades, degrees
    pub direction_deg: f64,

    /// Fixations shorter than this may be merged, seconds
    pub duration_secs: f64,

    /// Saccades shorter than this may be merged, pixels
    pub amplitude_px: f64,
}

impl GroupingThresholds {
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("direction", self.direction_deg),
            ("duration", self.duration_secs),
            ("amplitude", self.amplitude_px),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(MultiMatchError::Configuration(format!(
                    "{} threshold must be a non-negative number, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

/// Everything a single scanpath comparison needs besides the two scanpaths.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComparisonConfig {
    pub screen: ScreenSize,

    /// Simplify both scanpaths before aligning them
    pub grouping: bool,

    pub thresholds: GroupingThresholds,
}

impl ComparisonConfig {
    pub fn with_grouping(screen: ScreenSize, thresholds: GroupingThresholds) -> Self {
        Self {
            screen,
            grouping: true,
            thresholds,
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.screen.validate()?;
        self.thresholds.validate()
    }
}

impl Default for ComparisonConfig {
    fn default() -> Self {
        Self {
            screen: ScreenSize::default(),
            grouping: false,
            thresholds: GroupingThresholds::default(),
        }
    }
}
