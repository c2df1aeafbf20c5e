use chart_reconcile::api::{ChartConfig, ChartKind, ChartRenderer};
use chart_reconcile::core::{CurveMode, DataPoint, VertexGeometry, Viewport, line_path};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn points(count: usize, phase: f64) -> Vec<DataPoint> {
    (0..count)
        .map(|i| {
            let t = i as f64;
            DataPoint::new(format!("k{i}"), 100.0 + (t / 12.0 + phase).sin() * 40.0)
        })
        .collect()
}

fn bench_reconcile_1k(c: &mut Criterion) {
    let first = points(1_000, 0.0);
    let second = points(1_000, 1.0);

    for kind in [ChartKind::Line, ChartKind::Bar, ChartKind::Pie, ChartKind::Circle] {
        let mut renderer =
            ChartRenderer::new(ChartConfig::new(kind, Viewport::new(1920, 1080))).expect("renderer");
        let mut flip = false;
        c.bench_function(&format!("reconcile_1k_{}", kind.id_prefix()), |b| {
            b.iter(|| {
                flip = !flip;
                let snapshot = if flip { &first } else { &second };
                let plan = renderer
                    .reconcile(black_box(snapshot), 0.0)
                    .expect("reconcile");
                black_box(plan.transitions.len());
            })
        });
    }
}

fn bench_frame_sampling_1k(c: &mut Criterion) {
    let mut renderer =
        ChartRenderer::new(ChartConfig::line(Viewport::new(1920, 1080))).expect("renderer");
    renderer.reconcile(&points(1_000, 0.0), 0.0).expect("reconcile");

    c.bench_function("line_frame_sample_1k", |b| {
        b.iter(|| {
            let plan = renderer.active_plan().expect("plan");
            let samples = plan.sample(black_box(0.4));
            black_box(samples.len());
        })
    });
}

fn bench_monotone_path_10k(c: &mut Criterion) {
    let vertices: Vec<VertexGeometry> = (0..10_000)
        .map(|i| {
            let t = i as f64;
            VertexGeometry {
                x: t,
                y: (t / 50.0).sin() * 100.0,
            }
        })
        .collect();

    c.bench_function("monotone_path_10k", |b| {
        b.iter(|| {
            let commands = line_path(black_box(&vertices), CurveMode::MonotoneX);
            black_box(commands.len());
        })
    });
}

criterion_group!(
    benches,
    bench_reconcile_1k,
    bench_frame_sampling_1k,
    bench_monotone_path_10k
);
criterion_main!(benches);
