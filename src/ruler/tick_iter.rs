use super::{RulerConfig, Tick, TickLevel, util::floor_mod};
use crate::transform::RulerTransform;

/// Iterator over the classified ticks of a ruler, in ascending coordinate order.
///
/// Values are computed from an index rather than by accumulating the step,
/// so the sequence is exact over the whole range.
///
/// # Examples
///
/// ```
/// use ruler::{Ruler, TickLevel};
///
/// let ruler = Ruler::new(1.0);
/// let majors = ruler
///     .ticks()
///     .filter(|t| t.level == TickLevel::Major)
///     .take_while(|t| t.value <= 200)
///     .filter(|t| t.value >= 0)
///     .map(|t| t.value)
///     .collect::<Vec<_>>();
///
/// assert_eq!(majors, vec![0, 100, 200]);
/// ```
#[derive(Debug, Clone)]
pub struct RulerTickIter {
    transform: RulerTransform,
    start: i64,
    step: i64,
    threshold: f64,
    major_span: f64,
    medium_span: f64,
    current_index: usize,
    len: usize,
}

impl RulerTickIter {
    pub(crate) fn new(zoom: f64, config: &RulerConfig) -> Self {
        let transform = RulerTransform::with_offset(zoom, config.scroll_padding);
        Self {
            transform,
            start: config.min,
            step: config.step,
            threshold: config.step as f64,
            major_span: transform.logical_span(config.major_spacing),
            medium_span: transform.logical_span(config.medium_spacing),
            current_index: 0,
            len: config.tick_count(),
        }
    }

    fn classify(&self, value: i64) -> TickLevel {
        let v = value as f64;
        if floor_mod(v, self.major_span) < self.threshold {
            TickLevel::Major
        } else if floor_mod(v, self.medium_span) < self.threshold {
            TickLevel::Medium
        } else {
            TickLevel::Minor
        }
    }
}

impl Iterator for RulerTickIter {
    type Item = Tick;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current_index >= self.len {
            return None;
        }

        // The true value lies in [min, max), so wrapping arithmetic lands on it
        // even when `step * index` alone exceeds i64.
        let offset = self.step.wrapping_mul(self.current_index as i64);
        let value = self.start.wrapping_add(offset);
        self.current_index += 1;

        Some(Tick {
            value,
            pos: self.transform.to_pixel(value as f64),
            level: self.classify(value),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.current_index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for RulerTickIter {}

#[cfg(test)]
mod tests {
    use super::*;

    fn tick_at(zoom: f64, value: i64) -> Tick {
        RulerTickIter::new(zoom, &RulerConfig::default())
            .find(|t| t.value == value)
            .unwrap()
    }

    #[test]
    fn test_covers_whole_range_in_order() {
        let ticks: Vec<_> = RulerTickIter::new(1.0, &RulerConfig::default()).collect();

        assert_eq!(ticks.len(), 10000);
        assert_eq!(ticks.first().unwrap().value, -50000);
        assert_eq!(ticks.last().unwrap().value, 49990);
        for pair in ticks.windows(2) {
            assert_eq!(pair[1].value - pair[0].value, 10);
        }
    }

    #[test]
    fn test_exact_size() {
        let mut iter = RulerTickIter::new(1.0, &RulerConfig::default());
        assert_eq!(iter.len(), 10000);
        iter.next();
        iter.next();
        assert_eq!(iter.len(), 9998);
    }

    #[test]
    fn test_zoom_one_levels() {
        assert_eq!(tick_at(1.0, 0).level, TickLevel::Major);
        assert_eq!(tick_at(1.0, 100).level, TickLevel::Major);
        assert_eq!(tick_at(1.0, -100).level, TickLevel::Major);
        assert_eq!(tick_at(1.0, 50).level, TickLevel::Medium);
        assert_eq!(tick_at(1.0, -50).level, TickLevel::Medium);
        assert_eq!(tick_at(1.0, 10).level, TickLevel::Minor);
        assert_eq!(tick_at(1.0, -10).level, TickLevel::Minor);
    }

    #[test]
    fn test_zoom_two_halves_spacing() {
        // 100px apart at zoom 2 is 50 logical units
        assert_eq!(tick_at(2.0, 50).level, TickLevel::Major);
        assert_eq!(tick_at(2.0, 30).level, TickLevel::Medium);
        assert_eq!(tick_at(2.0, 20).level, TickLevel::Minor);
    }

    #[test]
    fn test_positions() {
        assert_eq!(tick_at(1.0, 0).pos, 50.0);
        assert_eq!(tick_at(2.0, 0).pos, 50.0);
        assert_eq!(tick_at(2.0, 10).pos, 70.0);
        assert_eq!(tick_at(0.5, -100).pos, 0.0);
    }

    #[test]
    fn test_zero_zoom_is_all_minor() {
        assert!(
            RulerTickIter::new(0.0, &RulerConfig::default()).all(|t| t.level == TickLevel::Minor)
        );
    }

    #[test]
    fn test_full_i64_range_does_not_overflow() {
        let config = RulerConfig {
            min: i64::MIN,
            max: i64::MAX,
            step: i64::MAX,
            ..RulerConfig::default()
        };
        let values: Vec<_> = RulerTickIter::new(1.0, &config).map(|t| t.value).collect();
        assert_eq!(values, vec![i64::MIN, -1, i64::MAX - 1]);
    }

    #[test]
    fn test_unbounded_config_reports_length_lazily() {
        let config = RulerConfig {
            min: i64::MIN,
            max: i64::MAX,
            step: 1,
            ..RulerConfig::default()
        };
        let mut iter = RulerTickIter::new(1.0, &config);
        assert!(iter.len() > 1_000_000);
        assert_eq!(iter.next().unwrap().value, i64::MIN);
        assert_eq!(iter.next().unwrap().value, i64::MIN + 1);
    }

    #[test]
    fn test_custom_range() {
        let config = RulerConfig {
            min: -20,
            max: 20,
            step: 5,
            ..RulerConfig::default()
        };
        let values: Vec<_> = RulerTickIter::new(1.0, &config).map(|t| t.value).collect();
        assert_eq!(values, vec![-20, -15, -10, -5, 0, 5, 10, 15]);
    }
}
