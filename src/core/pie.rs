use std::cmp::Reverse;
use std::f64::consts::{PI, TAU};

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::Position;
use crate::core::shape::ArcGeometry;
use crate::render::{PathCommand, PathCommands};

const ANGLE_EPSILON: f64 = 1e-12;

/// Order in which slices are laid out around the circle.
///
/// Output always follows input order; sorting only decides which slice
/// starts at 12 o'clock and how the rest follow clockwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum PieSort {
    #[default]
    ValueDescending,
    Input,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PieSlice {
    pub value: f64,
    pub start_angle: f64,
    pub end_angle: f64,
}

/// Computes consecutive angle pairs for `values`.
///
/// Positive values share a full turn proportionally and the last positive
/// slice ends exactly on `TAU`. Zero, negative and non-finite values get
/// zero-width slices. When nothing is positive, every slice is empty.
#[must_use]
pub fn layout_pie(values: &[f64], sort: PieSort) -> Vec<PieSlice> {
    let weight = |value: f64| if value.is_finite() && value > 0.0 { value } else { 0.0 };
    let total: f64 = values.iter().copied().map(weight).sum();
    let k = if total > 0.0 { TAU / total } else { 0.0 };

    let mut order: Vec<usize> = (0..values.len()).collect();
    if sort == PieSort::ValueDescending {
        order.sort_by_key(|&index| Reverse(OrderedFloat(weight(values[index]))));
    }
    let last_positive = order
        .iter()
        .rposition(|&index| weight(values[index]) > 0.0);

    let mut slices = vec![
        PieSlice {
            value: 0.0,
            start_angle: 0.0,
            end_angle: 0.0,
        };
        values.len()
    ];
    let mut angle = 0.0;
    for (position, &index) in order.iter().enumerate() {
        let start_angle = angle;
        let end_angle = if Some(position) == last_positive {
            TAU
        } else {
            start_angle + weight(values[index]) * k
        };
        slices[index] = PieSlice {
            value: values[index],
            start_angle,
            end_angle,
        };
        angle = end_angle;
    }
    slices
}

/// Projects values into wedges centred in the plot area.
#[must_use]
pub fn project_pie_arcs(
    values: &[f64],
    sort: PieSort,
    center: Position,
    inner_radius: f64,
    outer_radius: f64,
) -> Vec<ArcGeometry> {
    layout_pie(values, sort)
        .into_iter()
        .map(|slice| ArcGeometry {
            center_x: center.x,
            center_y: center.y,
            start_angle: slice.start_angle,
            end_angle: slice.end_angle,
            inner_radius,
            outer_radius,
        })
        .collect()
}

/// Path commands outlining one wedge (or ring for a full turn).
#[must_use]
pub fn arc_path(arc: ArcGeometry) -> PathCommands {
    let mut commands = PathCommands::new();
    let (mut r0, mut r1) = (arc.inner_radius.max(0.0), arc.outer_radius.max(0.0));
    if r1 < r0 {
        std::mem::swap(&mut r0, &mut r1);
    }
    let point = |radius: f64, angle: f64| {
        (
            arc.center_x + radius * angle.sin(),
            arc.center_y - radius * angle.cos(),
        )
    };
    let (a0, a1) = (arc.start_angle, arc.end_angle);
    let da = (a1 - a0).abs();
    let clockwise = a1 >= a0;

    if r1 <= ANGLE_EPSILON {
        commands.push(PathCommand::MoveTo {
            x: arc.center_x,
            y: arc.center_y,
        });
        commands.push(PathCommand::Close);
        return commands;
    }

    if da >= TAU - ANGLE_EPSILON {
        let half = if clockwise { a0 + PI } else { a0 - PI };
        push_ring(&mut commands, point(r1, a0), point(r1, half), r1, clockwise);
        if r0 > ANGLE_EPSILON {
            push_ring(&mut commands, point(r0, a0), point(r0, half), r0, !clockwise);
        }
        commands.push(PathCommand::Close);
        return commands;
    }

    let (x, y) = point(r1, a0);
    commands.push(PathCommand::MoveTo { x, y });
    if da > ANGLE_EPSILON {
        let (x, y) = point(r1, a1);
        commands.push(PathCommand::ArcTo {
            radius: r1,
            large_arc: da > PI,
            sweep: clockwise,
            x,
            y,
        });
    }
    if r0 > ANGLE_EPSILON {
        let (x, y) = point(r0, a1);
        commands.push(PathCommand::LineTo { x, y });
        if da > ANGLE_EPSILON {
            let (x, y) = point(r0, a0);
            commands.push(PathCommand::ArcTo {
                radius: r0,
                large_arc: da > PI,
                sweep: !clockwise,
                x,
                y,
            });
        }
    } else {
        commands.push(PathCommand::LineTo {
            x: arc.center_x,
            y: arc.center_y,
        });
    }
    commands.push(PathCommand::Close);
    commands
}

fn push_ring(
    commands: &mut PathCommands,
    start: (f64, f64),
    opposite: (f64, f64),
    radius: f64,
    sweep: bool,
) {
    commands.push(PathCommand::MoveTo {
        x: start.0,
        y: start.1,
    });
    for (x, y) in [opposite, start] {
        commands.push(PathCommand::ArcTo {
            radius,
            large_arc: true,
            sweep,
            x,
            y,
        });
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::TAU;

    use approx::assert_relative_eq;

    use super::{PieSort, arc_path, layout_pie};
    use crate::core::shape::ArcGeometry;
    use crate::render::{PathCommand, PathCommands};

    #[test]
    fn descending_sort_starts_with_largest_slice() {
        let slices = layout_pie(&[24.0, 48.0, 32.0], PieSort::ValueDescending);
        assert_eq!(slices[1].start_angle, 0.0);
        assert_relative_eq!(slices[2].start_angle, slices[1].end_angle);
        assert_relative_eq!(slices[0].start_angle, slices[2].end_angle);
        assert_eq!(slices[0].end_angle, TAU);
    }

    #[test]
    fn input_order_is_kept_when_unsorted() {
        let slices = layout_pie(&[1.0, 1.0, 2.0], PieSort::Input);
        assert_eq!(slices[0].start_angle, 0.0);
        assert_relative_eq!(slices[1].start_angle, TAU / 4.0);
        assert_relative_eq!(slices[2].start_angle, TAU / 2.0);
    }

    #[test]
    fn non_positive_values_produce_empty_slices() {
        let slices = layout_pie(&[0.0, -3.0, 5.0], PieSort::Input);
        assert_eq!(slices[0].start_angle, slices[0].end_angle);
        assert_eq!(slices[1].start_angle, slices[1].end_angle);
        assert_eq!((slices[2].start_angle, slices[2].end_angle), (0.0, TAU));

        let empty = layout_pie(&[0.0, 0.0], PieSort::ValueDescending);
        assert!(empty.iter().all(|slice| slice.end_angle == 0.0));
    }

    #[test]
    fn quarter_wedge_path_goes_through_center() {
        let arc = ArcGeometry::from_turn_fractions(0.0, 0.0, 0.0, 0.25, 0.0, 100.0);
        let commands = arc_path(arc);
        assert_eq!(commands[0], PathCommand::MoveTo { x: 0.0, y: -100.0 });
        let PathCommand::ArcTo {
            large_arc, sweep, x, y, ..
        } = commands[1]
        else {
            panic!("expected arc segment");
        };
        assert!(!large_arc);
        assert!(sweep);
        assert_relative_eq!(x, 100.0, epsilon = 1e-9);
        assert_relative_eq!(y, 0.0, epsilon = 1e-9);
        assert_eq!(commands[2], PathCommand::LineTo { x: 0.0, y: 0.0 });
        assert_eq!(commands[3], PathCommand::Close);
    }

    #[test]
    fn full_turn_donut_draws_two_rings() {
        let arc = ArcGeometry::from_turn_fractions(50.0, 50.0, 0.0, 1.0, 20.0, 40.0);
        let commands = arc_path(arc);
        let moves = commands
            .iter()
            .filter(|command| matches!(command, PathCommand::MoveTo { .. }))
            .count();
        assert_eq!(moves, 2);
    }

    #[test]
    fn zero_radius_wedge_is_a_point() {
        let arc = ArcGeometry::from_turn_fractions(5.0, 5.0, 0.0, 0.5, 0.0, 0.0);
        assert_eq!(arc_path(arc).len(), 2);
    }
}
