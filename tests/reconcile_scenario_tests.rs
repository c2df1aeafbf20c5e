use std::f64::consts::TAU;

use approx::assert_relative_eq;
use chart_reconcile::api::{ChartConfig, ChartRenderer, TransitionPhase, TransitionPlan};
use chart_reconcile::core::{DataPoint, DataSnapshot, Easing, ShapeDescriptor, ValueDomain, Viewport};

fn vertex_of(plan: &TransitionPlan, key: &str) -> (f64, f64) {
    let vertex = plan
        .get(key)
        .and_then(|transition| transition.to.as_vertex())
        .expect("vertex target");
    (vertex.x, vertex.y)
}

fn fitted_line_renderer() -> ChartRenderer {
    let config = ChartConfig::line(Viewport::new(400, 300)).with_value_domain(ValueDomain::Data);
    ChartRenderer::new(config).expect("renderer")
}

#[test]
fn line_first_render_spans_the_full_width() {
    let mut renderer = fitted_line_renderer();
    let plan = renderer
        .reconcile(&[DataPoint::new("a", 10.0), DataPoint::new("b", 20.0)], 0.0)
        .expect("reconcile");

    assert_eq!(plan.phase_count(TransitionPhase::Enter), 2);
    assert_eq!(vertex_of(plan, "a"), (0.0, 300.0));
    assert_eq!(vertex_of(plan, "b"), (400.0, 0.0));
    for transition in &plan.transitions {
        let from = transition.from.as_vertex().expect("vertex from");
        assert_eq!(from.y, 300.0);
    }
}

#[test]
fn line_key_swap_enters_exits_and_keeps_unchanged_vertex() {
    let mut renderer = fitted_line_renderer();
    renderer
        .reconcile(&[DataPoint::new("a", 10.0), DataPoint::new("b", 20.0)], 0.0)
        .expect("first");
    renderer.finish();

    let plan = renderer
        .reconcile(&[DataPoint::new("a", 10.0), DataPoint::new("c", 30.0)], 1000.0)
        .expect("second");

    let a = plan.get("a").expect("a");
    assert_eq!(a.phase, TransitionPhase::Update);
    assert_eq!(a.from, a.to);

    let b = plan.get("b").expect("b");
    assert_eq!(b.phase, TransitionPhase::Exit);
    assert_eq!(b.to.as_vertex().map(|v| v.y), Some(300.0));

    let c = plan.get("c").expect("c");
    assert_eq!(c.phase, TransitionPhase::Enter);
    assert_eq!(c.to.as_vertex().map(|v| (v.x, v.y)), Some((400.0, 0.0)));

    renderer.finish();
    let keys: Vec<&str> = renderer
        .state()
        .committed()
        .keys()
        .map(|key| key.as_str())
        .collect();
    assert_eq!(keys, vec!["a", "c"]);
}

#[test]
fn line_preset_maps_fractions_onto_plot_height() {
    let mut renderer = ChartRenderer::new(ChartConfig::line(Viewport::new(400, 300))).expect("renderer");
    let plan = renderer
        .reconcile(
            &[
                DataPoint::new("a", 0.0),
                DataPoint::new("b", 0.5),
                DataPoint::new("c", 1.0),
            ],
            0.0,
        )
        .expect("reconcile");
    assert_eq!(vertex_of(plan, "a"), (0.0, 300.0));
    assert_eq!(vertex_of(plan, "b"), (200.0, 150.0));
    assert_eq!(vertex_of(plan, "c"), (400.0, 0.0));
}

#[test]
fn line_with_flat_values_sits_on_vertical_midpoint() {
    let mut renderer = fitted_line_renderer();
    let plan = renderer
        .reconcile(&[DataPoint::new("a", 7.0), DataPoint::new("b", 7.0)], 0.0)
        .expect("reconcile");
    assert_eq!(vertex_of(plan, "a").1, 150.0);
    assert_eq!(vertex_of(plan, "b").1, 150.0);
}

fn arc_sweep_total(plan: &TransitionPlan) -> f64 {
    plan.transitions
        .iter()
        .filter_map(|transition| transition.to.as_arc())
        .map(|arc| arc.sweep())
        .sum()
}

#[test]
fn pie_dataset_switch_keeps_full_turn_and_continuity() {
    let mut renderer = ChartRenderer::new(ChartConfig::pie(Viewport::new(400, 400))).expect("renderer");
    let first = DataSnapshot::from_json_str(r#"{"a":48,"b":32,"c":24}"#).expect("first json");
    let second = DataSnapshot::from_json_str(r#"{"a":75,"b":15,"c":10}"#).expect("second json");

    let initial = renderer
        .reconcile(&first.points(), 0.0)
        .expect("first")
        .clone();
    assert_eq!(initial.easing, Easing::ExpInOut);
    assert_relative_eq!(arc_sweep_total(&initial), TAU, epsilon = 1e-9);
    for transition in &initial.transitions {
        let from = transition.from.as_arc().expect("arc");
        assert_eq!((from.start_angle, from.end_angle), (0.0, 0.0));
    }

    let update = renderer
        .reconcile(&second.points(), 1000.0)
        .expect("second")
        .clone();
    assert_eq!(update.easing, Easing::BackInOut);
    assert_eq!(update.phase_count(TransitionPhase::Update), 3);
    assert_relative_eq!(arc_sweep_total(&update), TAU, epsilon = 1e-9);
    for transition in &update.transitions {
        let previous = initial.get(transition.key.as_str()).expect("previous");
        assert_eq!(transition.from, previous.to);
    }
}

#[test]
fn pie_largest_slice_starts_at_twelve_oclock() {
    let mut renderer = ChartRenderer::new(ChartConfig::pie(Viewport::new(200, 100))).expect("renderer");
    let snapshot = DataSnapshot::categories([("small", 1.0), ("large", 3.0)]).expect("snapshot");
    let plan = renderer.reconcile(&snapshot.points(), 0.0).expect("reconcile");

    let large = plan.get("large").and_then(|t| t.to.as_arc()).expect("large");
    let small = plan.get("small").and_then(|t| t.to.as_arc()).expect("small");
    assert_eq!(large.start_angle, 0.0);
    assert_relative_eq!(large.end_angle, 0.75 * TAU, epsilon = 1e-12);
    assert_eq!(small.end_angle, TAU);
    assert_eq!(large.outer_radius, 50.0);
    assert_eq!((large.center_x, large.center_y), (100.0, 50.0));
}

#[test]
fn bars_grow_from_the_zero_baseline() {
    let mut renderer = ChartRenderer::new(ChartConfig::bar(Viewport::new(300, 200))).expect("renderer");
    let plan = renderer
        .reconcile(&[DataPoint::new("a", 5.0), DataPoint::new("b", 10.0)], 0.0)
        .expect("reconcile");

    let b = plan.get("b").expect("b");
    let to = b.to.as_bar().expect("bar");
    assert_eq!(to.y, 0.0);
    assert_eq!(to.height, 200.0);
    let from = b.from.as_bar().expect("bar");
    assert_eq!((from.y, from.height), (200.0, 0.0));
    assert_eq!(from.x, to.x);
}

#[test]
fn circles_honour_external_positions() {
    let mut renderer = ChartRenderer::new(ChartConfig::circle(Viewport::new(600, 400))).expect("renderer");
    let points = [
        DataPoint::new("pinned", 10.0).with_position(42.0, 24.0),
        DataPoint::new("row", 1.0),
    ];
    let plan = renderer.reconcile(&points, 0.0).expect("reconcile");

    let pinned = plan.get("pinned").and_then(|t| t.to.as_circle()).expect("pinned");
    assert_eq!((pinned.cx, pinned.cy), (42.0, 24.0));
    assert_relative_eq!(pinned.radius, 10.0_f64.ln() * 75.0, epsilon = 1e-9);

    let row = plan.get("row").and_then(|t| t.to.as_circle()).expect("row");
    assert_eq!(row.cy, 200.0);
    assert_eq!(row.radius, 0.0);
}

#[test]
fn superseding_call_diffs_against_newest_targets() {
    let mut renderer = ChartRenderer::new(ChartConfig::bar(Viewport::new(300, 200))).expect("renderer");
    renderer
        .reconcile(&[DataPoint::new("a", 1.0), DataPoint::new("b", 2.0)], 0.0)
        .expect("first");
    let second = renderer
        .reconcile(&[DataPoint::new("a", 4.0)], 100.0)
        .expect("second")
        .clone();
    let third = renderer
        .reconcile(&[DataPoint::new("a", 2.0), DataPoint::new("b", 2.0)], 200.0)
        .expect("third")
        .clone();

    assert_eq!(third.get("a").map(|t| t.from), second.get("a").map(|t| t.to));
    assert_eq!(third.get("b").map(|t| t.phase), Some(TransitionPhase::Enter));
    assert!(renderer.state().committed().is_empty());

    let sample = renderer.frame_at(1200.0).expect("frame").expect("final");
    assert!(sample.committed);
    let committed = renderer.state().committed();
    assert_eq!(committed.len(), 2);
    assert!(matches!(committed.get("a"), Some(ShapeDescriptor::Bar(_))));
}
