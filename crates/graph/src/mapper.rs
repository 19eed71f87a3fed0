use probe_config::GraphConfig;
use std::ops::Range;

/// Drawing rectangle in logical pixels, supplied by the renderer per call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub width:  f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// A point in the rect's local coordinate space; y grows downward, so the
/// highest sample in the window maps nearest y = 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Maps a sample series onto a drawing rect.
///
/// The horizontal axis is position, not time: each sample gets a fixed
/// `column_width` of pixels, and when the series outgrows the rect only the
/// trailing window is visible — older samples fall off the left edge, the
/// window jumping by whole columns as history grows. The vertical scale is
/// rescaled to the visible window's own min/max on every call, so recent
/// variation always uses the full height regardless of historical extremes.
/// That per-window rescale is deliberate; never cache a global min/max.
#[derive(Debug, Clone, Copy)]
pub struct GraphMapper {
    column_width: f64,
    inset:        f64,
}

impl Default for GraphMapper {
    fn default() -> Self {
        Self {
            column_width: 2.0,
            inset:        2.0,
        }
    }
}

impl GraphMapper {
    #[must_use]
    pub fn new(column_width: f64, inset: f64) -> Self {
        Self { column_width, inset }
    }

    /// Build a mapper from the `[graph]` config table.
    #[must_use]
    pub fn from_config(config: &GraphConfig) -> Self {
        Self::new(config.column_width, config.inset)
    }

    #[must_use]
    pub fn column_width(&self) -> f64 {
        self.column_width
    }

    /// Index range of the samples visible in a rect `rect_width` wide.
    ///
    /// At most `floor(rect_width / column_width)` samples fit; when the
    /// series is longer than that, only the most recent ones are visible.
    #[must_use]
    pub fn visible_range(&self, series_len: usize, rect_width: f64) -> Range<usize> {
        let max_visible = (rect_width / self.column_width).floor() as usize;
        let start = series_len.saturating_sub(max_visible);
        start..series_len
    }

    /// Map the visible window of `series` to drawable points.
    ///
    /// Returns one point per visible sample, in order; empty when nothing is
    /// visible yet. A flat window (all values equal, or a single sample)
    /// draws a horizontal line at mid-height. Out-of-band ys are clamped to
    /// `[inset, height - inset]`. Non-finite samples are not sanitized: a
    /// NaN sample yields a NaN y (garbage in, garbage out).
    #[must_use]
    pub fn compute_points(&self, series: &[f64], rect: Rect) -> Vec<Point> {
        let visible = &series[self.visible_range(series.len(), rect.width)];
        if visible.is_empty() {
            return Vec::new();
        }

        let local_min = visible.iter().copied().fold(f64::INFINITY, f64::min);
        let local_max = visible.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        let top = self.inset;
        let bottom = (rect.height - self.inset).max(top);

        visible
            .iter()
            .enumerate()
            .map(|(j, &value)| {
                let x = j as f64 * self.column_width;
                let y = if local_max == local_min {
                    // Degenerate window; avoids dividing by zero.
                    rect.height / 2.0
                } else {
                    let normalized = (value - local_min) / (local_max - local_min);
                    (rect.height - normalized * rect.height).clamp(top, bottom)
                };
                Point { x, y }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapper() -> GraphMapper {
        GraphMapper::default() // column_width 2.0, inset 2.0
    }

    #[test]
    fn short_series_is_fully_visible() {
        assert_eq!(mapper().visible_range(3, 10.0), 0..3);
        assert_eq!(mapper().visible_range(5, 10.0), 0..5);
        assert_eq!(mapper().visible_range(0, 10.0), 0..0);
    }

    #[test]
    fn long_series_shows_trailing_window() {
        assert_eq!(mapper().visible_range(6, 10.0), 1..6);
        assert_eq!(mapper().visible_range(100, 10.0), 95..100);
    }

    #[test]
    fn zero_width_rect_shows_nothing() {
        assert_eq!(mapper().visible_range(4, 0.0), 4..4);
        assert!(mapper()
            .compute_points(&[1.0, 2.0], Rect::new(0.0, 100.0))
            .is_empty());
    }

    #[test]
    fn empty_series_maps_to_no_points() {
        assert!(mapper().compute_points(&[], Rect::new(10.0, 100.0)).is_empty());
    }

    #[test]
    fn trailing_window_scenario() {
        // 6 samples, 5 visible: window [5, 3, 8, 2, 9], min 2, max 9.
        let series = [1.0, 5.0, 3.0, 8.0, 2.0, 9.0];
        let points = mapper().compute_points(&series, Rect::new(10.0, 100.0));
        assert_eq!(points.len(), 5);

        // First visible sample (value 5) draws at the left edge.
        assert_eq!(points[0].x, 0.0);
        let expected_y = 100.0 - (5.0 - 2.0) / 7.0 * 100.0;
        assert!((points[0].y - expected_y).abs() < 1e-9);

        // Window maximum (value 9) clamps to the top inset.
        assert_eq!(points[4].x, 8.0);
        assert_eq!(points[4].y, 2.0);

        // Window minimum (value 2) clamps to the bottom inset.
        assert_eq!(points[3].y, 98.0);
    }

    #[test]
    fn all_points_stay_inside_the_inset_band() {
        let series = [-1000.0, 0.0, 1000.0, 3.5, -3.5];
        for point in mapper().compute_points(&series, Rect::new(20.0, 50.0)) {
            assert!(point.y >= 2.0 && point.y <= 48.0, "y = {}", point.y);
        }
    }

    #[test]
    fn flat_window_draws_at_mid_height() {
        let points = mapper().compute_points(&[5.0], Rect::new(10.0, 100.0));
        assert_eq!(points, vec![Point { x: 0.0, y: 50.0 }]);

        let points = mapper().compute_points(&[7.0, 7.0, 7.0], Rect::new(10.0, 100.0));
        assert!(points.iter().all(|p| p.y == 50.0));
    }

    #[test]
    fn higher_values_draw_nearer_the_top() {
        let points = mapper().compute_points(&[1.0, 2.0, 3.0], Rect::new(10.0, 100.0));
        assert!(points[0].y > points[1].y && points[1].y > points[2].y);
    }

    #[test]
    fn x_is_window_relative() {
        // Only the last 5 of 8 samples visible; x restarts at 0.
        let mut series = vec![1.0; 8];
        series[7] = 2.0;
        let points = mapper().compute_points(&series, Rect::new(10.0, 100.0));
        let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![0.0, 2.0, 4.0, 6.0, 8.0]);
    }

    #[test]
    fn nan_sample_propagates_to_its_point() {
        let series = [1.0, f64::NAN, 3.0];
        let points = mapper().compute_points(&series, Rect::new(10.0, 100.0));
        assert!(points[1].y.is_nan());
        // Neighbouring points are unaffected: the window bounds come from
        // the finite samples.
        assert!(points[0].y.is_finite() && points[2].y.is_finite());
    }

    #[test]
    fn from_config_uses_graph_table() {
        let config = probe_config::GraphConfig {
            column_width: 4.0,
            inset:        1.0,
            columns:      10,
        };
        let mapper = GraphMapper::from_config(&config);
        assert_eq!(mapper.visible_range(20, 40.0), 10..20);
    }

    #[test]
    fn tiny_rect_does_not_panic() {
        // Height smaller than twice the inset collapses the clamp band.
        let points = mapper().compute_points(&[1.0, 9.0], Rect::new(10.0, 3.0));
        assert_eq!(points.len(), 2);
        assert!(points.iter().all(|p| p.y.is_finite()));
    }
}
