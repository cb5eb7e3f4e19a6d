use serde::{Deserialize, Serialize};

use super::{
    MAJOR_SPACING, MAX_VALUE, MEDIUM_SPACING, MIN_VALUE, SCROLL_PADDING, STEP_PADDING, STEP_SIZE,
    TICK_COLOR, TICK_FONT_SIZE,
};
use crate::error::{Result, RulerError};

/// Largest number of ticks a config may scan, a hundred times the built-in ruler.
pub const MAX_TICKS: usize = 1_000_000;

/// Geometry and style of a ruler.
///
/// `Default` yields the editor's built-in ruler; the free functions
/// [`make_horizontal_ticks`](super::make_horizontal_ticks) and
/// [`make_vertical_ticks`](super::make_vertical_ticks) always use it.
///
/// Every field is optional when deserializing; missing fields keep their
/// default.
///
/// # Examples
///
/// ```
/// use ruler::RulerConfig;
///
/// let config = RulerConfig::from_toml_str(r##"
///     min = -1000
///     max = 1000
///     color = "#000"
/// "##).unwrap();
///
/// assert_eq!(config.step, 10);
/// assert_eq!(config.color, "#000");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulerConfig {
    /// First logical coordinate scanned (inclusive).
    pub min: i64,
    /// End of the scanned range (exclusive).
    pub max: i64,
    /// Distance between two scanned coordinates.
    pub step: i64,
    /// Pixel position of logical coordinate zero.
    pub scroll_padding: f64,
    /// Cross-axis pixel where every tick ends.
    pub step_padding: f64,
    /// On-screen distance, in pixels, between labelled ticks.
    pub major_spacing: f64,
    /// On-screen distance, in pixels, between medium ticks.
    pub medium_spacing: f64,
    /// Label fill colour.
    pub color: String,
    /// Label font size in pixels.
    pub font_size: f64,
}

impl Default for RulerConfig {
    fn default() -> Self {
        Self {
            min: MIN_VALUE,
            max: MAX_VALUE,
            step: STEP_SIZE,
            scroll_padding: SCROLL_PADDING,
            step_padding: STEP_PADDING,
            major_spacing: MAJOR_SPACING,
            medium_spacing: MEDIUM_SPACING,
            color: TICK_COLOR.to_string(),
            font_size: TICK_FONT_SIZE,
        }
    }
}

impl RulerConfig {
    /// Parses and validates a config from TOML.
    pub fn from_toml_str(input: &str) -> Result<Self> {
        let config: Self = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the invariants the tick scan relies on.
    pub fn validate(&self) -> Result<()> {
        if self.step <= 0 {
            return Err(invalid(format!("step must be positive, got {}", self.step)));
        }
        if self.min >= self.max {
            return Err(invalid(format!(
                "min ({}) must be below max ({})",
                self.min, self.max
            )));
        }
        for (name, value) in [
            ("major_spacing", self.major_spacing),
            ("medium_spacing", self.medium_spacing),
            ("font_size", self.font_size),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(invalid(format!("{name} must be positive, got {value}")));
            }
        }
        if !self.scroll_padding.is_finite() || !self.step_padding.is_finite() {
            return Err(invalid("paddings must be finite".to_string()));
        }
        let count = self.tick_count();
        if count > MAX_TICKS {
            return Err(invalid(format!(
                "range [{}, {}) at step {} scans {count} ticks, at most {MAX_TICKS} allowed",
                self.min, self.max, self.step
            )));
        }
        Ok(())
    }

    /// Number of coordinates in `[min, max)` at `step` spacing.
    ///
    /// Exact over the whole `i64` range; saturates at `usize::MAX` on
    /// targets where the count does not fit.
    pub fn tick_count(&self) -> usize {
        if self.step <= 0 || self.min >= self.max {
            return 0;
        }
        let span = self.max.abs_diff(self.min);
        let count = span.div_ceil(self.step.unsigned_abs());
        usize::try_from(count).unwrap_or(usize::MAX)
    }
}

fn invalid(message: String) -> RulerError {
    RulerError::InvalidConfig { message }
}
