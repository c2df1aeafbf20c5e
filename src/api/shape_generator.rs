use indexmap::IndexMap;

use crate::core::{
    BandScale, DataKey, DataPoint, LinearScale, PieSort, RadiusMapping, ShapeDescriptor,
    ValueDomain, Viewport, bar_baseline, project_bars, project_circles, project_line_vertices,
    project_pie_arcs,
};
use crate::error::ChartResult;

use super::{ArcTween, ChartConfig, ChartKind};

/// Scales and target geometry computed for one snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeLayout {
    pub targets: IndexMap<DataKey, ShapeDescriptor>,
    /// Pixel row that vertices and bars collapse onto when entering/exiting.
    pub baseline_y: f64,
    pub value_scale: Option<LinearScale>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineGenerator {
    value_domain: ValueDomain,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArcGenerator {
    sort: PieSort,
    inner_radius_ratio: f64,
    update_tween: ArcTween,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CircleGenerator {
    mapping: RadiusMapping,
    band_padding: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarGenerator {
    value_domain: ValueDomain,
    band_padding: f64,
}

/// Shape-generator variant of a chart, fixed at construction.
///
/// Every variant feeds the same reconciliation; they differ only in how
/// targets are laid out, what the degenerate shape is and where an update
/// starts from.
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeGenerator {
    Line(LineGenerator),
    Arc(ArcGenerator),
    Circle(CircleGenerator),
    Bar(BarGenerator),
}

impl ShapeGenerator {
    #[must_use]
    pub fn for_config(config: &ChartConfig) -> Self {
        match config.kind {
            ChartKind::Line => Self::Line(LineGenerator {
                value_domain: config.effective_value_domain(),
            }),
            ChartKind::Pie => Self::Arc(ArcGenerator {
                sort: config.pie_sort,
                inner_radius_ratio: config.inner_radius_ratio,
                update_tween: config.arc_tween,
            }),
            ChartKind::Circle => Self::Circle(CircleGenerator {
                mapping: config.effective_value_to_radius(),
                band_padding: config.band_padding,
            }),
            ChartKind::Bar => Self::Bar(BarGenerator {
                value_domain: config.effective_value_domain(),
                band_padding: config.band_padding,
            }),
        }
    }

    pub fn layout(&self, points: &[DataPoint], viewport: Viewport) -> ChartResult<ShapeLayout> {
        let width = f64::from(viewport.width);
        let height = f64::from(viewport.height);
        let values: Vec<f64> = points.iter().map(|point| point.value).collect();
        let extent = value_extent(&values);

        let (shapes, baseline_y, value_scale): (Vec<ShapeDescriptor>, f64, Option<LinearScale>) =
            match self {
                Self::Line(line) => {
                    let (lo, hi) = line.value_domain.resolve(extent);
                    let last_index = values.len().saturating_sub(1) as f64;
                    let index_scale = LinearScale::horizontal(0.0, last_index, width)?;
                    let value_scale = LinearScale::vertical(lo, hi, height)?;
                    let shapes = project_line_vertices(&values, index_scale, value_scale)
                        .into_iter()
                        .map(ShapeDescriptor::Vertex)
                        .collect();
                    (shapes, height, Some(value_scale))
                }
                Self::Arc(arc) => {
                    let outer_radius = width.min(height) / 2.0;
                    let shapes = project_pie_arcs(
                        &values,
                        arc.sort,
                        viewport.center(),
                        outer_radius * arc.inner_radius_ratio,
                        outer_radius,
                    )
                    .into_iter()
                    .map(ShapeDescriptor::Arc)
                    .collect();
                    (shapes, height, None)
                }
                Self::Circle(circle) => {
                    let row = BandScale::new(values.len(), (0.0, width), circle.band_padding)?;
                    let shapes = project_circles(points, &circle.mapping, row, height / 2.0)
                        .into_iter()
                        .map(ShapeDescriptor::Circle)
                        .collect();
                    (shapes, height, None)
                }
                Self::Bar(bar) => {
                    let (lo, hi) = bar.value_domain.resolve(extent);
                    let band = BandScale::new(values.len(), (0.0, width), bar.band_padding)?;
                    let value_scale = LinearScale::vertical(lo, hi, height)?;
                    let shapes = project_bars(&values, band, value_scale)
                        .into_iter()
                        .map(ShapeDescriptor::Bar)
                        .collect();
                    (shapes, bar_baseline(value_scale), Some(value_scale))
                }
            };

        let targets = points
            .iter()
            .map(|point| point.key.clone())
            .zip(shapes)
            .collect();
        Ok(ShapeLayout {
            targets,
            baseline_y,
            value_scale,
        })
    }

    /// Starting shape of a key absent from the previous render.
    #[must_use]
    pub fn enter_from(&self, target: ShapeDescriptor, layout: &ShapeLayout) -> ShapeDescriptor {
        target.degenerate(layout.baseline_y)
    }

    /// Final shape of a key absent from the new snapshot.
    #[must_use]
    pub fn exit_to(&self, stored: ShapeDescriptor, layout: &ShapeLayout) -> ShapeDescriptor {
        stored.degenerate(layout.baseline_y)
    }

    /// Starting shape of a key present in both renders.
    #[must_use]
    pub fn update_from(
        &self,
        stored: ShapeDescriptor,
        target: ShapeDescriptor,
        layout: &ShapeLayout,
    ) -> ShapeDescriptor {
        match self {
            Self::Arc(ArcGenerator {
                update_tween: ArcTween::FromCollapsed,
                ..
            }) => target.degenerate(layout.baseline_y),
            _ => stored,
        }
    }
}

fn value_extent(values: &[f64]) -> Option<(f64, f64)> {
    values.iter().copied().fold(None, |extent, value| match extent {
        None => Some((value, value)),
        Some((min, max)) => Some((min.min(value), max.max(value))),
    })
}
