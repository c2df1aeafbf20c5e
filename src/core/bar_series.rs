use crate::core::shape::BarGeometry;
use crate::core::{BandScale, LinearScale};

/// Projects ordered values into vertical bars, one band slot per value.
///
/// Bars grow from `value_scale(0)` clamped into the plot range, so negative
/// values hang below the baseline.
#[must_use]
pub fn project_bars(values: &[f64], band: BandScale, value_scale: LinearScale) -> Vec<BarGeometry> {
    let baseline = bar_baseline(value_scale);
    values
        .iter()
        .enumerate()
        .map(|(index, value)| {
            let y = value_scale.map(*value);
            BarGeometry {
                x: band.position(index),
                y: y.min(baseline),
                width: band.bandwidth(),
                height: (baseline - y).abs(),
            }
        })
        .collect()
}

/// Pixel row bars grow from: the zero line when visible, else the nearest edge.
#[must_use]
pub fn bar_baseline(value_scale: LinearScale) -> f64 {
    let (range_start, range_end) = value_scale.range();
    let (low, high) = if range_start <= range_end {
        (range_start, range_end)
    } else {
        (range_end, range_start)
    };
    value_scale.map(0.0).clamp(low, high)
}
