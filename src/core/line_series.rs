use serde::{Deserialize, Serialize};

use crate::core::LinearScale;
use crate::core::shape::VertexGeometry;
use crate::render::PathCommand;

/// Smoothing applied when line vertices become a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum CurveMode {
    Linear,
    /// Cubic segments that preserve monotonicity in y between vertices.
    #[default]
    MonotoneX,
}

/// Projects ordered values into line vertices.
///
/// The x coordinate comes from the value's position in the sequence, the y
/// coordinate from `value_scale`.
#[must_use]
pub fn project_line_vertices(
    values: &[f64],
    index_scale: LinearScale,
    value_scale: LinearScale,
) -> Vec<VertexGeometry> {
    values
        .iter()
        .enumerate()
        .map(|(index, value)| VertexGeometry {
            x: index_scale.map(index as f64),
            y: value_scale.map(*value),
        })
        .collect()
}

/// Builds the series path through `vertices` in order.
#[must_use]
pub fn line_path(vertices: &[VertexGeometry], curve: CurveMode) -> Vec<PathCommand> {
    let Some(first) = vertices.first() else {
        return Vec::new();
    };

    let mut commands = Vec::with_capacity(vertices.len());
    commands.push(PathCommand::MoveTo {
        x: first.x,
        y: first.y,
    });
    if curve == CurveMode::Linear || vertices.len() < 3 {
        commands.extend(
            vertices[1..]
                .iter()
                .map(|vertex| PathCommand::LineTo {
                    x: vertex.x,
                    y: vertex.y,
                }),
        );
        return commands;
    }

    let tangents = monotone_tangents(vertices);
    for (index, pair) in vertices.windows(2).enumerate() {
        let (from, to) = (pair[0], pair[1]);
        let dx = (to.x - from.x) / 3.0;
        commands.push(PathCommand::CubicTo {
            c1x: from.x + dx,
            c1y: from.y + dx * tangents[index],
            c2x: to.x - dx,
            c2y: to.y - dx * tangents[index + 1],
            x: to.x,
            y: to.y,
        });
    }
    commands
}

/// Fritsch-Carlson style tangents; requires at least three vertices.
fn monotone_tangents(vertices: &[VertexGeometry]) -> Vec<f64> {
    let last = vertices.len() - 1;
    let mut tangents = vec![0.0; vertices.len()];
    for index in 1..last {
        tangents[index] = interior_slope(
            vertices[index - 1],
            vertices[index],
            vertices[index + 1],
        );
    }
    tangents[0] = endpoint_slope(vertices[0], vertices[1], tangents[1]);
    tangents[last] = endpoint_slope(vertices[last - 1], vertices[last], tangents[last - 1]);
    tangents
}

fn interior_slope(prev: VertexGeometry, current: VertexGeometry, next: VertexGeometry) -> f64 {
    let h0 = current.x - prev.x;
    let h1 = next.x - current.x;
    if h0 == 0.0 || h1 == 0.0 || h0 + h1 == 0.0 {
        return 0.0;
    }
    let s0 = (current.y - prev.y) / h0;
    let s1 = (next.y - current.y) / h1;
    let p = (s0 * h1 + s1 * h0) / (h0 + h1);
    let slope = (sign(s0) + sign(s1)) * s0.abs().min(s1.abs()).min(0.5 * p.abs());
    if slope.is_finite() { slope } else { 0.0 }
}

fn endpoint_slope(from: VertexGeometry, to: VertexGeometry, neighbour: f64) -> f64 {
    let h = to.x - from.x;
    if h == 0.0 {
        neighbour
    } else {
        (3.0 * (to.y - from.y) / h - neighbour) / 2.0
    }
}

fn sign(value: f64) -> f64 {
    if value < 0.0 { -1.0 } else { 1.0 }
}
