//! Ruler guides for canvas editors
//!
//! `ruler` generates the tick marks drawn along the edges of a zoomable
//! design canvas, and provides the navigation-token history the editor uses
//! for single-page routing.
//!
//! # Core Concepts
//!
//! ## Ticks
//!
//! A ruler scans logical canvas coordinates in fixed steps and classifies
//! each one against zoom-adjusted spacings:
//! - **Major** ticks every 100 pixels, labelled with their coordinate
//! - **Medium** ticks every 50 pixels
//! - **Minor** ticks everywhere else
//!
//! Classification uses floor modulo, so negative coordinates line up the
//! same way positive ones do.
//!
//! ## Rendering
//!
//! [`make_horizontal_ticks`] and [`make_vertical_ticks`] return an SVG
//! fragment: a single `<path>` with every tick followed by the `<text>`
//! labels. Both go through the same routine, parameterised by [`Axis`].
//!
//! ## Transforms
//!
//! [`RulerTransform`] maps logical coordinates to pixels
//! (`logical * zoom + 50`) and back.
//!
//! ## History
//!
//! The [`history`] module models browser history as the
//! [`History`](history::History) trait over navigation tokens, with an
//! in-memory implementation.
//!
//! # Examples
//!
//! ## Rendering a Ruler
//!
//! ```rust
//! let top = ruler::make_horizontal_ticks(1.0);
//!
//! // Coordinate 0 sits after the 50px scroll padding and is labelled
//! assert!(top.contains("M 50 5 L 50 20"));
//! assert!(top.contains(">0</text>"));
//!
//! let left = ruler::make_vertical_ticks(2.0);
//! assert!(left.contains("M 5 50 L 20 50"));
//! ```
//!
//! ## Inspecting Ticks
//!
//! ```rust
//! use ruler::{Ruler, TickLevel};
//!
//! let ruler = Ruler::new(1.0);
//! let tick = ruler.ticks().find(|t| t.value == 50).unwrap();
//!
//! assert_eq!(tick.level, TickLevel::Medium);
//! assert_eq!(tick.pos, 100.0);
//! ```
//!
//! ## Rejecting Invalid Zoom
//!
//! ```rust
//! use ruler::{Axis, RulerError};
//!
//! // The unchecked entry points render a degenerate all-minor ruler for zoom 0
//! assert!(!ruler::make_horizontal_ticks(0.0).contains("<text"));
//!
//! // The checked one refuses it
//! let err = ruler::try_make_ticks(Axis::Horizontal, 0.0).unwrap_err();
//! assert!(matches!(err, RulerError::InvalidZoom(_)));
//! ```

pub mod error;
pub mod history;
pub mod ruler;
pub mod transform;

pub use error::{HistoryError, Result, RulerError};
pub use ruler::{
    Axis, Ruler, RulerConfig, RulerTickIter, Tick, TickLevel, make_horizontal_ticks, make_ticks,
    make_vertical_ticks, try_make_ticks,
};
pub use transform::RulerTransform;
