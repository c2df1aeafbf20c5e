use crate::core::{ShapeDescriptor, arc_path, line_path};
use crate::render::{CirclePrimitive, PathPrimitive, RectPrimitive, RenderFrame};

use super::{ChartConfig, ElementId, TransitionPhase, TransitionPlan};

/// Materializes a plan at `progress` into drawable primitives.
///
/// Line charts get one series path through the non-exiting vertices plus a
/// marker per vertex; exiting markers keep animating until the plan ends.
pub(super) fn build_frame(
    plan: &TransitionPlan,
    progress: f64,
    config: &ChartConfig,
    series_id: Option<&ElementId>,
) -> RenderFrame {
    let mut frame = RenderFrame::new(config.viewport);
    let series_color = config.palette_colors[0];
    let mut vertices = Vec::new();

    for sample in plan.sample(progress) {
        let element_id = sample.element_id.to_string();
        match sample.descriptor {
            ShapeDescriptor::Vertex(vertex) => {
                if sample.phase != TransitionPhase::Exit {
                    vertices.push(vertex);
                }
                frame.circles.push(CirclePrimitive {
                    element_id,
                    cx: vertex.x,
                    cy: vertex.y,
                    radius: config.marker_radius,
                    fill: series_color,
                    stroke: None,
                    stroke_width: 0.0,
                });
            }
            ShapeDescriptor::Arc(arc) => {
                frame
                    .paths
                    .push(PathPrimitive::filled(element_id, arc_path(arc), sample.color));
            }
            ShapeDescriptor::Circle(circle) => {
                frame.circles.push(CirclePrimitive {
                    element_id,
                    cx: circle.cx,
                    cy: circle.cy,
                    radius: circle.radius,
                    fill: sample.color,
                    stroke: Some(series_color),
                    stroke_width: config.stroke_width,
                });
            }
            ShapeDescriptor::Bar(bar) => {
                frame.rects.push(RectPrimitive {
                    element_id,
                    x: bar.x,
                    y: bar.y,
                    width: bar.width,
                    height: bar.height,
                    fill: sample.color,
                });
            }
        }
    }

    if let Some(series_id) = series_id.filter(|_| vertices.len() > 1) {
        frame.paths.insert(
            0,
            PathPrimitive::stroked(
                series_id.to_string(),
                line_path(&vertices, config.curve),
                series_color,
                config.stroke_width,
            ),
        );
    }
    frame
}
