//! Mapping between logical ruler coordinates and rendered pixels.
//!
//! A ruler scans logical coordinates (canvas units) and draws each tick at
//! a pixel position obtained by scaling with the zoom factor and shifting by
//! the scroll padding:
//!
//! ```text
//! pixel = logical * zoom + offset
//! ```
//!
//! [`RulerTransform`] holds that mapping and its inverse, so the same value
//! that positions the ticks can also turn a pointer position on the ruler
//! back into a canvas coordinate.
//!
//! # Examples
//!
//! ```rust
//! use ruler::RulerTransform;
//!
//! let transform = RulerTransform::new(2.0);
//!
//! // Logical 0 sits right after the 50px scroll padding
//! assert_eq!(transform.to_pixel(0.0), 50.0);
//! assert_eq!(transform.to_pixel(100.0), 250.0);
//!
//! // And back again
//! assert_eq!(transform.to_logical(250.0), 100.0);
//! ```

use crate::ruler::SCROLL_PADDING;

/// Affine map from logical ruler coordinates to pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RulerTransform {
    zoom: f64,
    offset: f64,
}

impl Default for RulerTransform {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl RulerTransform {
    /// Creates a transform with the default scroll padding as offset.
    pub const fn new(zoom: f64) -> Self {
        Self::with_offset(zoom, SCROLL_PADDING)
    }

    /// Creates a transform with an explicit pixel offset.
    pub const fn with_offset(zoom: f64, offset: f64) -> Self {
        Self { zoom, offset }
    }

    /// The zoom factor.
    pub const fn zoom(&self) -> f64 {
        self.zoom
    }

    /// The pixel position of logical coordinate zero.
    pub const fn offset(&self) -> f64 {
        self.offset
    }

    /// Converts a logical coordinate to its rendered pixel position.
    pub fn to_pixel(&self, logical: f64) -> f64 {
        logical * self.zoom + self.offset
    }

    /// Converts a pixel position back to a logical coordinate.
    ///
    /// A zero zoom has no inverse; the result is then non-finite.
    pub fn to_logical(&self, pixel: f64) -> f64 {
        (pixel - self.offset) / self.zoom
    }

    /// The logical distance that spans `pixels` on screen at this zoom.
    ///
    /// This is what turns the fixed 100px and 50px label spacings into
    /// the coordinate spacings the ruler classifies against.
    pub fn logical_span(&self, pixels: f64) -> f64 {
        pixels / self.zoom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_pixel_applies_scroll_padding() {
        let t = RulerTransform::new(1.0);
        assert_eq!(t.to_pixel(0.0), 50.0);
        assert_eq!(t.to_pixel(-50.0), 0.0);
        assert_eq!(t.to_pixel(10.0), 60.0);
    }

    #[test]
    fn test_to_pixel_scales_by_zoom() {
        let t = RulerTransform::new(0.5);
        assert_eq!(t.to_pixel(100.0), 100.0);
        assert_eq!(t.to_pixel(-100.0), 0.0);
    }

    #[test]
    fn test_round_trip_through_pixels() {
        let t = RulerTransform::with_offset(4.0, 12.0);
        for logical in [-300.0, -10.0, 0.0, 7.5, 1200.0] {
            assert_eq!(t.to_logical(t.to_pixel(logical)), logical);
        }
    }

    #[test]
    fn test_logical_span() {
        let t = RulerTransform::new(2.0);
        assert_eq!(t.logical_span(100.0), 50.0);
        assert_eq!(t.logical_span(50.0), 25.0);
    }

    #[test]
    fn test_zero_zoom_has_no_inverse() {
        let t = RulerTransform::new(0.0);
        assert_eq!(t.to_pixel(1234.0), 50.0);
        assert!(t.to_logical(60.0).is_infinite());
        assert!(t.logical_span(100.0).is_infinite());
    }
}
