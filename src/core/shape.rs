use serde::{Deserialize, Serialize};

use crate::core::primitives::lerp;

/// One vertex of a line series in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VertexGeometry {
    pub x: f64,
    pub y: f64,
}

/// Pie/donut wedge. Angles are radians measured clockwise from 12 o'clock.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArcGeometry {
    pub center_x: f64,
    pub center_y: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    pub inner_radius: f64,
    pub outer_radius: f64,
}

impl ArcGeometry {
    /// Builds a wedge from turn fractions (`1.0` is a full circle).
    #[must_use]
    pub fn from_turn_fractions(
        center_x: f64,
        center_y: f64,
        start_fraction: f64,
        end_fraction: f64,
        inner_radius: f64,
        outer_radius: f64,
    ) -> Self {
        Self {
            center_x,
            center_y,
            start_angle: start_fraction * std::f64::consts::TAU,
            end_angle: end_fraction * std::f64::consts::TAU,
            inner_radius,
            outer_radius,
        }
    }

    #[must_use]
    pub fn sweep(self) -> f64 {
        self.end_angle - self.start_angle
    }

    /// Zero-angle wedge at 12 o'clock with the same radii.
    #[must_use]
    pub fn collapsed(self) -> Self {
        Self {
            start_angle: 0.0,
            end_angle: 0.0,
            ..self
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CircleGeometry {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
}

/// Vertical bar; `y` is the top edge in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarGeometry {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Geometry of one keyed visual primitive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "kebab-case")]
pub enum ShapeDescriptor {
    Vertex(VertexGeometry),
    Arc(ArcGeometry),
    Circle(CircleGeometry),
    Bar(BarGeometry),
}

impl ShapeDescriptor {
    /// Returns the "not yet visible" form of this shape.
    ///
    /// Vertices drop onto `baseline_y`, bars shrink to zero height on
    /// `baseline_y`, circles shrink to zero radius in place and arcs collapse
    /// to the zero-angle wedge.
    #[must_use]
    pub fn degenerate(self, baseline_y: f64) -> Self {
        match self {
            Self::Vertex(vertex) => Self::Vertex(VertexGeometry {
                x: vertex.x,
                y: baseline_y,
            }),
            Self::Arc(arc) => Self::Arc(arc.collapsed()),
            Self::Circle(circle) => Self::Circle(CircleGeometry {
                radius: 0.0,
                ..circle
            }),
            Self::Bar(bar) => Self::Bar(BarGeometry {
                y: baseline_y,
                height: 0.0,
                ..bar
            }),
        }
    }

    /// Field-wise interpolation at eased progress `t`.
    ///
    /// Mismatched variants cannot be blended; they hold `self` until `t`
    /// reaches `1` and then snap to `to`.
    #[must_use]
    pub fn interpolate(self, to: Self, t: f64) -> Self {
        match (self, to) {
            (Self::Vertex(a), Self::Vertex(b)) => Self::Vertex(VertexGeometry {
                x: lerp(a.x, b.x, t),
                y: lerp(a.y, b.y, t),
            }),
            (Self::Arc(a), Self::Arc(b)) => Self::Arc(ArcGeometry {
                center_x: lerp(a.center_x, b.center_x, t),
                center_y: lerp(a.center_y, b.center_y, t),
                start_angle: lerp(a.start_angle, b.start_angle, t),
                end_angle: lerp(a.end_angle, b.end_angle, t),
                inner_radius: lerp(a.inner_radius, b.inner_radius, t),
                outer_radius: lerp(a.outer_radius, b.outer_radius, t),
            }),
            (Self::Circle(a), Self::Circle(b)) => Self::Circle(CircleGeometry {
                cx: lerp(a.cx, b.cx, t),
                cy: lerp(a.cy, b.cy, t),
                radius: lerp(a.radius, b.radius, t),
            }),
            (Self::Bar(a), Self::Bar(b)) => Self::Bar(BarGeometry {
                x: lerp(a.x, b.x, t),
                y: lerp(a.y, b.y, t),
                width: lerp(a.width, b.width, t),
                height: lerp(a.height, b.height, t),
            }),
            _ if t >= 1.0 => to,
            _ => self,
        }
    }

    #[must_use]
    pub fn as_arc(self) -> Option<ArcGeometry> {
        match self {
            Self::Arc(arc) => Some(arc),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_vertex(self) -> Option<VertexGeometry> {
        match self {
            Self::Vertex(vertex) => Some(vertex),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_circle(self) -> Option<CircleGeometry> {
        match self {
            Self::Circle(circle) => Some(circle),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_bar(self) -> Option<BarGeometry> {
        match self {
            Self::Bar(bar) => Some(bar),
            _ => None,
        }
    }
}
