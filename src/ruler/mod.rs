//! Ruler tick generation.
//!
//! A ruler scans a fixed range of logical coordinates and classifies each
//! one by how it lines up with zoom-adjusted spacings:
//!
//! - **Major** ticks fall every 100 pixels and carry a text label.
//! - **Medium** ticks fall every 50 pixels.
//! - Everything else is a **minor** tick.
//!
//! The result is rendered as an SVG fragment (one `<path>` plus the labels)
//! that the caller embeds in its own `<svg>` container, or consumed directly
//! as [`Tick`] values through [`Ruler::ticks`].

mod config;
pub mod svg;
mod tick_iter;
pub mod util;

pub use config::{MAX_TICKS, RulerConfig};
pub use tick_iter::RulerTickIter;

use tracing::{debug, trace};

use crate::error::{Result, RulerError};

/// First logical coordinate scanned.
pub const MIN_VALUE: i64 = -50_000;
/// End of the scanned range (exclusive).
pub const MAX_VALUE: i64 = 50_000;
/// Distance between scanned coordinates.
pub const STEP_SIZE: i64 = 10;
/// Pixel position of logical coordinate zero.
pub const SCROLL_PADDING: f64 = 50.0;
/// Cross-axis pixel where every tick ends.
pub const STEP_PADDING: f64 = 20.0;
/// Pixels between labelled ticks.
pub const MAJOR_SPACING: f64 = 100.0;
/// Pixels between medium ticks.
pub const MEDIUM_SPACING: f64 = 50.0;
pub const TICK_COLOR: &str = "#9da2a6";
pub const TICK_FONT_SIZE: f64 = 12.0;

/// Orientation of a ruler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Runs along the top of the canvas; ticks are vertical segments.
    Horizontal,
    /// Runs along the left of the canvas; ticks are horizontal segments.
    Vertical,
}

/// Visual prominence of a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TickLevel {
    Major,
    Medium,
    Minor,
}

impl TickLevel {
    /// Cross-axis pixel where a tick of this level starts.
    pub const fn start(self) -> f64 {
        match self {
            TickLevel::Major => 5.0,
            TickLevel::Medium => 10.0,
            TickLevel::Minor => 15.0,
        }
    }

    pub const fn is_labelled(self) -> bool {
        matches!(self, TickLevel::Major)
    }
}

/// One classified coordinate on the ruler.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tick {
    /// Logical coordinate.
    pub value: i64,
    /// Rendered pixel position along the ruler.
    pub pos: f64,
    pub level: TickLevel,
}

/// A ruler at a given zoom.
///
/// # Examples
///
/// ```
/// use ruler::{Axis, Ruler};
///
/// let svg = Ruler::new(1.0).render(Axis::Horizontal);
/// assert!(svg.starts_with("<path d=\"M -49950 5 L -49950 20 "));
/// assert!(svg.contains(">0</text>"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Ruler {
    zoom: f64,
    config: RulerConfig,
}

impl Ruler {
    /// Creates a ruler with the built-in geometry.
    ///
    /// The zoom is not validated: zero yields a ruler of minor ticks only
    /// and a negative zoom classifies against negative spacings. Use
    /// [`Ruler::try_new`] to reject those.
    pub fn new(zoom: f64) -> Self {
        Self::with_config(zoom, RulerConfig::default())
    }

    /// Creates a ruler, rejecting zero, negative and non-finite zoom.
    pub fn try_new(zoom: f64) -> Result<Self> {
        check_zoom(zoom)?;
        Ok(Self::new(zoom))
    }

    pub fn with_config(zoom: f64, config: RulerConfig) -> Self {
        Self { zoom, config }
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn config(&self) -> &RulerConfig {
        &self.config
    }

    /// Iterates over every tick in ascending coordinate order.
    pub fn ticks(&self) -> RulerTickIter {
        RulerTickIter::new(self.zoom, &self.config)
    }

    /// Renders the ruler as an SVG fragment for the given axis.
    pub fn render(&self, axis: Axis) -> String {
        let ticks = self.ticks();
        let mut commands = Vec::with_capacity(ticks.len().min(MAX_TICKS));
        let mut labels = Vec::new();

        for tick in ticks {
            commands.push(svg::tick_command(axis, &tick, self.config.step_padding));
            if tick.level.is_labelled() {
                trace!(value = tick.value, pos = tick.pos, "major tick");
                labels.push(svg::tick_label(axis, &tick, &self.config));
            }
        }

        debug!(
            ?axis,
            zoom = self.zoom,
            ticks = commands.len(),
            labels = labels.len(),
            "rendered ruler"
        );
        svg::assemble(&commands, &labels)
    }
}

fn check_zoom(zoom: f64) -> Result<()> {
    if zoom.is_finite() && zoom > 0.0 {
        Ok(())
    } else {
        Err(RulerError::InvalidZoom(zoom))
    }
}

/// Renders ticks for either axis with the built-in geometry.
pub fn make_ticks(axis: Axis, zoom: f64) -> String {
    Ruler::new(zoom).render(axis)
}

/// Like [`make_ticks`], but rejects zero, negative and non-finite zoom.
pub fn try_make_ticks(axis: Axis, zoom: f64) -> Result<String> {
    Ok(Ruler::try_new(zoom)?.render(axis))
}

/// Ticks for the ruler along the top edge.
///
/// # Examples
///
/// ```
/// let svg = ruler::make_horizontal_ticks(1.0);
/// assert!(svg.contains("M 50 5 L 50 20"));
/// ```
pub fn make_horizontal_ticks(zoom: f64) -> String {
    make_ticks(Axis::Horizontal, zoom)
}

/// Ticks for the ruler along the left edge.
pub fn make_vertical_ticks(zoom: f64) -> String {
    make_ticks(Axis::Vertical, zoom)
}
