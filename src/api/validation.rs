use std::collections::HashSet;

use crate::core::{DataPoint, ValueDomain};
use crate::error::{ChartError, ChartResult};

use super::ChartConfig;

pub(super) fn validate_config(config: &ChartConfig) -> ChartResult<()> {
    if !config.viewport.is_valid() {
        return Err(ChartError::InvalidViewport {
            width: config.viewport.width,
            height: config.viewport.height,
        });
    }
    if !config.duration_ms.is_finite() || config.duration_ms < 0.0 {
        return Err(ChartError::InvalidConfig(
            "transition duration must be finite and >= 0".to_owned(),
        ));
    }
    if config.palette_colors.is_empty() {
        return Err(ChartError::InvalidConfig(
            "color palette must contain at least one color".to_owned(),
        ));
    }
    for color in &config.palette_colors {
        color.validate()?;
    }
    for (name, ratio) in [
        ("inner_radius_ratio", config.inner_radius_ratio),
        ("band_padding", config.band_padding),
    ] {
        if !ratio.is_finite() || !(0.0..1.0).contains(&ratio) {
            return Err(ChartError::InvalidConfig(format!(
                "{name} must be finite and in [0, 1)"
            )));
        }
    }
    for (name, value) in [
        ("marker_radius", config.marker_radius),
        ("stroke_width", config.stroke_width),
    ] {
        if !value.is_finite() || value <= 0.0 {
            return Err(ChartError::InvalidConfig(format!(
                "{name} must be finite and > 0"
            )));
        }
    }
    if let Some(ValueDomain::Fixed { min, max }) = config.value_domain {
        if !min.is_finite() || !max.is_finite() {
            return Err(ChartError::InvalidConfig(
                "fixed value domain must be finite".to_owned(),
            ));
        }
    }
    if let Some(chart_id) = &config.chart_id {
        if chart_id.trim().is_empty() {
            return Err(ChartError::InvalidConfig(
                "chart id must not be blank".to_owned(),
            ));
        }
    }
    Ok(())
}

/// Rejects snapshots that break the keyed-data preconditions.
///
/// Runs before the renderer sees the snapshot, so a rejected snapshot never
/// produces a partial render.
pub(super) fn validate_snapshot(points: &[DataPoint]) -> ChartResult<()> {
    let mut seen = HashSet::with_capacity(points.len());
    for point in points {
        if point.key.as_str().is_empty() {
            return Err(ChartError::InvalidSnapshot(
                "data point key must not be empty".to_owned(),
            ));
        }
        if !seen.insert(point.key.as_str()) {
            return Err(ChartError::DuplicateKey {
                key: point.key.to_string(),
            });
        }
        let position_is_finite = point.position.is_none_or(|position| position.is_finite());
        if !point.value.is_finite() || !position_is_finite {
            return Err(ChartError::NonNumericValue {
                key: point.key.to_string(),
            });
        }
    }
    Ok(())
}
