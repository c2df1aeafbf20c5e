use chart_reconcile::api::{ChartComponent, ChartConfig, ManualClock, TickOutcome};
use chart_reconcile::core::{DataPoint, DataSnapshot, Viewport};
use chart_reconcile::render::{SvgRenderer, render_svg};

#[test]
fn bar_chart_frames_serialize_with_element_ids() {
    let clock = ManualClock::new(0.0);
    let snapshot = DataSnapshot::series(vec![DataPoint::new("q1", 4.0), DataPoint::new("q2", 8.0)]);
    let mut chart = ChartComponent::mount_with_clock(
        SvgRenderer::new(),
        &snapshot,
        ChartConfig::bar(Viewport::new(200, 100)).with_chart_id("sales"),
        clock.clone(),
    )
    .expect("mount");

    clock.advance(1_000.0);
    assert_eq!(chart.tick().expect("tick"), TickOutcome::Committed);

    let svg = chart
        .container()
        .and_then(SvgRenderer::document)
        .expect("document")
        .to_owned();
    assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"200\" height=\"100\""));
    assert!(svg.contains("<rect id=\"sales-1\""));
    assert!(svg.contains("<rect id=\"sales-2\""));
    assert!(svg.contains("height=\"100.00\""));

    let container = chart.unmount().expect("unmount");
    assert_eq!(container.frames_rendered(), 2);
    assert!(container.document().is_none());
}

#[test]
fn pie_wedges_render_as_arc_paths() {
    let clock = ManualClock::new(0.0);
    let snapshot = DataSnapshot::categories([("a", 1.0), ("b", 1.0)]).expect("snapshot");
    let mut chart = ChartComponent::mount_with_clock(
        SvgRenderer::new(),
        &snapshot,
        ChartConfig::pie(Viewport::new(100, 100)).with_duration_ms(0.0),
        clock,
    )
    .expect("mount");

    let renderer = chart.renderer().expect("renderer");
    assert!(renderer.active_plan().is_none());
    assert_eq!(renderer.state().committed().len(), 2);

    let svg = chart
        .container()
        .and_then(SvgRenderer::document)
        .expect("document");
    assert_eq!(svg.matches("<path").count(), 2);
    assert!(svg.contains("A50,50,0,0,1,"));
    assert_eq!(chart.tick().expect("idle"), TickOutcome::Idle);
}

#[test]
fn empty_frame_is_a_bare_document() {
    let frame = chart_reconcile::render::RenderFrame::new(Viewport::new(10, 20));
    assert_eq!(
        render_svg(&frame),
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"10\" height=\"20\" viewBox=\"0 0 10 20\"></svg>"
    );
}
