use chart_reconcile::api::{ChartComponent, ChartConfig, ManualClock, TickOutcome};
use chart_reconcile::core::{DataSnapshot, Viewport};
use chart_reconcile::render::SvgRenderer;

const FRAME_MS: f64 = 250.0;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = chart_reconcile::telemetry::init_default_tracing();

    let clock = ManualClock::new(0.0);
    let first = DataSnapshot::from_json_str(r#"{"a": 48, "b": 32, "c": 24}"#)?;
    let second = DataSnapshot::from_json_str(r#"{"a": 75, "b": 15, "c": 10}"#)?;

    let mut chart = ChartComponent::mount_with_clock(
        SvgRenderer::new(),
        &first,
        ChartConfig::pie(Viewport::new(300, 300)).with_chart_id("demo-pie"),
        clock.clone(),
    )?;
    run_until_committed(&mut chart, &clock)?;

    if let Some(plan) = chart.on_data_change(&second)? {
        println!(
            "revision {}: {} updates, easing {:?}",
            plan.revision,
            plan.transitions.len(),
            plan.easing
        );
    }
    run_until_committed(&mut chart, &clock)?;

    if let Some(svg) = chart.container().and_then(SvgRenderer::document) {
        println!("{svg}");
    }
    chart.unmount();
    Ok(())
}

fn run_until_committed(
    chart: &mut ChartComponent<SvgRenderer, ManualClock>,
    clock: &ManualClock,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        clock.advance(FRAME_MS);
        match chart.tick()? {
            TickOutcome::Animating { progress } => println!("progress {progress:.2}"),
            TickOutcome::Committed => {
                println!("committed {} slices", chart.state().map_or(0, |s| s.len()));
                return Ok(());
            }
            TickOutcome::Idle => return Ok(()),
        }
    }
}
