use crate::mapper::{GraphMapper, Rect};

/// Vertical resolution ramp, lowest to highest.
const BLOCKS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Placeholder cell for samples whose mapped y is non-finite (NaN input).
const INVALID: char = '·';

/// Logical pixel height of the virtual drawing rect the mapper works in.
/// Tall enough that the inset margin stays a small fraction of the range
/// before the ys are quantized onto the 8-step block ramp.
const SPARK_HEIGHT: f64 = 100.0;

/// Render the visible window of `series` as a one-line block sparkline,
/// at most `columns` characters wide.
///
/// One character per visible sample: the mapper picks the trailing window
/// for a rect `columns` columns wide and each point's y is quantized onto
/// the block ramp. Returns an empty string while the series has no samples.
#[must_use]
pub fn render_line(mapper: &GraphMapper, series: &[f64], columns: usize) -> String {
    let rect = Rect::new(columns as f64 * mapper.column_width(), SPARK_HEIGHT);
    mapper
        .compute_points(series, rect)
        .iter()
        .map(|point| {
            if !point.y.is_finite() {
                return INVALID;
            }
            // y grows downward; flip back into ramp order.
            let level = (rect.height - point.y) / rect.height * (BLOCKS.len() - 1) as f64;
            BLOCKS[(level.round() as usize).min(BLOCKS.len() - 1)]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_series_renders_empty() {
        assert_eq!(render_line(&GraphMapper::default(), &[], 40), "");
    }

    #[test]
    fn one_char_per_visible_sample() {
        let mapper = GraphMapper::default();
        let series: Vec<f64> = (0..10).map(f64::from).collect();
        assert_eq!(render_line(&mapper, &series, 40).chars().count(), 10);

        // Longer than the window: capped at `columns` characters.
        let series: Vec<f64> = (0..500).map(f64::from).collect();
        assert_eq!(render_line(&mapper, &series, 40).chars().count(), 40);
    }

    #[test]
    fn extremes_hit_the_ends_of_the_ramp() {
        let line = render_line(&GraphMapper::default(), &[0.0, 10.0], 40);
        let chars: Vec<char> = line.chars().collect();
        assert_eq!(chars[0], '▁');
        assert_eq!(chars[1], '█');
    }

    #[test]
    fn flat_series_renders_mid_ramp() {
        let line = render_line(&GraphMapper::default(), &[5.0, 5.0, 5.0], 40);
        assert!(line.chars().all(|c| c == line.chars().next().unwrap()));
        assert!(BLOCKS[3..5].contains(&line.chars().next().unwrap()));
    }

    #[test]
    fn nan_renders_placeholder() {
        let line = render_line(&GraphMapper::default(), &[1.0, f64::NAN, 2.0], 40);
        assert_eq!(line.chars().nth(1), Some(INVALID));
    }
}
