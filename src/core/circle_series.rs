use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::core::shape::CircleGeometry;
use crate::core::{BandScale, DataPoint, Position};

/// Host-supplied radius function.
#[derive(Clone)]
pub struct RadiusFn(Arc<dyn Fn(f64) -> f64 + Send + Sync>);

impl RadiusFn {
    pub fn new(function: impl Fn(f64) -> f64 + Send + Sync + 'static) -> Self {
        Self(Arc::new(function))
    }

    #[must_use]
    pub fn call(&self, value: f64) -> f64 {
        (self.0)(value)
    }
}

impl fmt::Debug for RadiusFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("RadiusFn(..)")
    }
}

impl PartialEq for RadiusFn {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

/// Maps a raw value to a circle radius in pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "kebab-case")]
pub enum RadiusMapping {
    Linear { factor: f64 },
    /// `ln(value) * factor`.
    Logarithmic { factor: f64 },
    Sqrt { factor: f64 },
    /// Injected at runtime; not representable in config files.
    #[serde(skip)]
    Custom(RadiusFn),
}

impl Default for RadiusMapping {
    fn default() -> Self {
        Self::Linear { factor: 1.0 }
    }
}

impl RadiusMapping {
    #[must_use]
    pub fn custom(function: impl Fn(f64) -> f64 + Send + Sync + 'static) -> Self {
        Self::Custom(RadiusFn::new(function))
    }

    /// Radius for `value`; negative or non-finite results clamp to zero.
    #[must_use]
    pub fn radius(&self, value: f64) -> f64 {
        let radius = match self {
            Self::Linear { factor } => value * factor,
            Self::Logarithmic { factor } => value.ln() * factor,
            Self::Sqrt { factor } => value.sqrt() * factor,
            Self::Custom(function) => function.call(value),
        };
        if radius.is_finite() { radius.max(0.0) } else { 0.0 }
    }
}

/// Projects points into circles.
///
/// Points carrying an externally computed position are drawn there; the rest
/// are placed on a row through the vertical center, one band slot each.
#[must_use]
pub fn project_circles(
    points: &[DataPoint],
    mapping: &RadiusMapping,
    row: BandScale,
    row_y: f64,
) -> Vec<CircleGeometry> {
    points
        .iter()
        .enumerate()
        .map(|(index, point)| {
            let center = point
                .position
                .unwrap_or_else(|| Position::new(row.center(index), row_y));
            CircleGeometry {
                cx: center.x,
                cy: center.y,
                radius: mapping.radius(point.value),
            }
        })
        .collect()
}
