//! Chart scaffolding shared by the plain bar chart and the TUI line chart.
//!
//! Axis bounds and tick labels are computed here so both renderings agree
//! on scale; the views only place glyphs.

use canopy_model::ProjectionPoint;

use crate::summary::format_kg;

/// Y-axis bounds for a projection: zero up to a "nice" ceiling above the
/// final (largest) value.
pub fn y_axis_bounds(points: &[ProjectionPoint]) -> [f64; 2] {
    let max = points
        .last()
        .map(|p| p.cumulative_co2_kg)
        .unwrap_or(0.0)
        .max(0.0);

    [0.0, nice_ceil(max)]
}

/// Evenly spaced tick labels across `bounds`, formatted in kilograms.
pub fn y_tick_labels(bounds: [f64; 2], count: usize) -> Vec<String> {
    if count < 2 {
        return vec![format_kg(bounds[1])];
    }

    let step = (bounds[1] - bounds[0]) / (count - 1) as f64;
    (0..count)
        .map(|i| format_kg(bounds[0] + step * i as f64))
        .collect()
}

/// Horizontal bar lengths for the plain-text chart, proportional to each
/// point's value. Positive values always get at least one cell.
pub fn bar_lengths(points: &[ProjectionPoint], max_width: usize) -> Vec<usize> {
    let max = points
        .iter()
        .map(|p| p.cumulative_co2_kg)
        .fold(0.0_f64, f64::max);

    if max <= 0.0 || max_width == 0 {
        return vec![0; points.len()];
    }

    points
        .iter()
        .map(|p| {
            let scaled = (p.cumulative_co2_kg / max * max_width as f64).round() as usize;
            scaled.clamp(1, max_width)
        })
        .collect()
}

/// Round `value` up to the next 1/2/2.5/5 multiple of its decade.
fn nice_ceil(value: f64) -> f64 {
    if value <= 0.0 {
        return 1.0;
    }

    let magnitude = 10.0_f64.powf(value.log10().floor());
    for multiplier in [1.0, 2.0, 2.5, 5.0, 10.0] {
        let candidate = multiplier * magnitude;
        if candidate >= value {
            return candidate;
        }
    }

    10.0 * magnitude
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(year: u32, kg: f64) -> ProjectionPoint {
        ProjectionPoint {
            year,
            cumulative_co2_kg: kg,
        }
    }

    #[test]
    fn test_nice_ceil() {
        assert_eq!(nice_ceil(0.0), 1.0);
        assert_eq!(nice_ceil(1.0), 1.0);
        assert_eq!(nice_ceil(1.3), 2.0);
        assert_eq!(nice_ceil(2.2), 2.5);
        assert_eq!(nice_ceil(43540.0), 50000.0);
        assert_eq!(nice_ceil(99000.0), 100000.0);
    }

    #[test]
    fn test_y_axis_bounds_cover_final_value() {
        let points = vec![point(1, 2177.0), point(2, 4354.0), point(3, 6531.0)];
        let bounds = y_axis_bounds(&points);
        assert_eq!(bounds[0], 0.0);
        assert!(bounds[1] >= 6531.0);
    }

    #[test]
    fn test_y_tick_labels_span_bounds() {
        let labels = y_tick_labels([0.0, 50000.0], 5);
        assert_eq!(labels.len(), 5);
        assert_eq!(labels[0], "0.00");
        assert_eq!(labels[4], "50,000.00");
    }

    #[test]
    fn test_bar_lengths_scale_to_width() {
        let points = vec![point(1, 25.0), point(2, 50.0), point(3, 100.0)];
        let lengths = bar_lengths(&points, 40);
        assert_eq!(lengths, vec![10, 20, 40]);
    }

    #[test]
    fn test_bar_lengths_minimum_one_cell() {
        let points = vec![point(1, 0.001), point(2, 1000.0)];
        let lengths = bar_lengths(&points, 40);
        assert_eq!(lengths[0], 1);
        assert_eq!(lengths[1], 40);
    }
}
