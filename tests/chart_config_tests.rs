use chart_reconcile::api::{ArcTween, ChartConfig, ChartKind, ChartRenderer};
use chart_reconcile::core::{CurveMode, Easing, PieSort, RadiusMapping, ValueDomain, Viewport};
use chart_reconcile::render::Color;
use chart_reconcile::ChartError;

#[test]
fn config_json_fills_defaults_and_ignores_unknown_options() {
    let config = ChartConfig::from_json_str(
        r##"{
            "kind": "circle",
            "viewport": { "width": 640, "height": 480 },
            "palette_colors": ["#ff0000", "#0f0"],
            "value_to_radius": { "mode": "sqrt", "factor": 2.0 },
            "theme": "dark",
            "tooltip": { "enabled": true }
        }"##,
    )
    .expect("config");

    assert_eq!(config.kind, ChartKind::Circle);
    assert_eq!(config.duration_ms, 1_000.0);
    assert_eq!(config.easing, Easing::ExpInOut);
    assert_eq!(config.curve, CurveMode::MonotoneX);
    assert_eq!(config.arc_tween, ArcTween::FromPrevious);
    assert_eq!(config.pie_sort, PieSort::ValueDescending);
    assert_eq!(config.value_to_radius, Some(RadiusMapping::Sqrt { factor: 2.0 }));
    assert_eq!(
        config.palette_colors,
        vec![Color::rgb(1.0, 0.0, 0.0), Color::rgb(0.0, 1.0, 0.0)]
    );
}

#[test]
fn kind_defaults_apply_to_json_configs() {
    let pie = ChartConfig::from_json_str(r#"{"kind":"pie","viewport":{"width":400,"height":400}}"#)
        .expect("pie config");
    assert_eq!(pie.update_easing, None);
    assert_eq!(pie.easing_for(true), Easing::ExpInOut);
    assert_eq!(pie.easing_for(false), Easing::BackInOut);
    assert_eq!(pie, ChartConfig::pie(Viewport::new(400, 400)));

    let circle =
        ChartConfig::from_json_str(r#"{"kind":"circle","viewport":{"width":600,"height":400}}"#)
            .expect("circle config");
    assert_eq!(
        circle.effective_value_to_radius(),
        RadiusMapping::Logarithmic { factor: 75.0 }
    );

    let line = ChartConfig::from_json_str(r#"{"kind":"line","viewport":{"width":400,"height":300}}"#)
        .expect("line config");
    assert_eq!(
        line.effective_value_domain(),
        ValueDomain::Fixed { min: 0.0, max: 1.0 }
    );
}

#[test]
fn config_survives_json_round_trip() {
    let config = ChartConfig::line(Viewport::new(800, 200))
        .with_chart_id("revenue")
        .with_duration_ms(250.0)
        .with_easing(Easing::Linear)
        .with_curve(CurveMode::Linear)
        .with_value_domain(ValueDomain::Fixed { min: 0.0, max: 1.0 });

    let json = config.to_json_pretty().expect("serialize");
    assert!(json.contains("\"#2a6965\""));
    assert!(json.contains("\"mode\": \"fixed\""));
    assert_eq!(ChartConfig::from_json_str(&json).expect("parse"), config);
}

#[test]
fn injected_radius_function_is_runtime_only() {
    let config = ChartConfig::circle(Viewport::new(100, 100))
        .with_value_to_radius(RadiusMapping::custom(|value| value * 3.0));
    assert_eq!(config.effective_value_to_radius().radius(2.0), 6.0);
    assert!(config.to_json_pretty().is_err());
}

#[test]
fn invalid_hex_color_is_rejected_on_load() {
    let err = ChartConfig::from_json_str(
        r#"{"kind":"pie","viewport":{"width":10,"height":10},"palette_colors":["teal"]}"#,
    )
    .expect_err("bad color");
    assert!(matches!(err, ChartError::InvalidConfig(_)));
}

#[test]
fn renderer_rejects_out_of_range_settings() {
    let viewport = Viewport::new(100, 100);
    let cases = [
        ChartConfig::pie(viewport).with_duration_ms(-1.0),
        ChartConfig::pie(viewport).with_duration_ms(f64::NAN),
        ChartConfig::pie(viewport).with_palette(Vec::new()),
        ChartConfig::pie(viewport).with_inner_radius_ratio(1.0),
        ChartConfig::bar(viewport).with_band_padding(-0.1),
        ChartConfig::line(viewport).with_marker_radius(0.0),
        ChartConfig::line(viewport).with_chart_id("  "),
        ChartConfig::line(viewport).with_value_domain(ValueDomain::Fixed {
            min: 0.0,
            max: f64::INFINITY,
        }),
    ];
    for config in cases {
        let err = ChartRenderer::new(config).expect_err("invalid config");
        assert!(matches!(err, ChartError::InvalidConfig(_)), "{err}");
    }
}

#[test]
fn zero_duration_is_allowed() {
    let renderer = ChartRenderer::new(ChartConfig::bar(Viewport::new(10, 10)).with_duration_ms(0.0));
    assert!(renderer.is_ok());
}
