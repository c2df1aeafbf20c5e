use serde::{Deserialize, Serialize};

use crate::core::{CurveMode, Easing, PieSort, RadiusMapping, ValueDomain, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

pub const DEFAULT_TRANSITION_DURATION_MS: f64 = 1000.0;

/// Chart family; selects the shape generator once at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChartKind {
    Line,
    Pie,
    Bar,
    Circle,
}

impl ChartKind {
    /// Line values are read as fractions of the plot height.
    #[must_use]
    pub const fn default_value_domain(self) -> ValueDomain {
        match self {
            Self::Line => ValueDomain::Fixed { min: 0.0, max: 1.0 },
            Self::Bar => ValueDomain::ZeroBased,
            Self::Pie | Self::Circle => ValueDomain::Data,
        }
    }

    /// Pies grow in with the configured easing and overshoot on later
    /// updates.
    #[must_use]
    pub const fn default_update_easing(self) -> Option<Easing> {
        match self {
            Self::Pie => Some(Easing::BackInOut),
            Self::Line | Self::Bar | Self::Circle => None,
        }
    }

    #[must_use]
    pub fn default_value_to_radius(self) -> RadiusMapping {
        match self {
            Self::Circle => RadiusMapping::Logarithmic { factor: 75.0 },
            Self::Line | Self::Pie | Self::Bar => RadiusMapping::default(),
        }
    }

    #[must_use]
    pub const fn id_prefix(self) -> &'static str {
        match self {
            Self::Line => "line",
            Self::Pie => "pie",
            Self::Bar => "bar",
            Self::Circle => "circle",
        }
    }
}

/// Where an updating arc starts its tween.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ArcTween {
    /// From the wedge committed by the previous render.
    #[default]
    FromPrevious,
    /// From the zero-angle wedge, replaying the initial growth on every update.
    FromCollapsed,
}

/// Chart bootstrap configuration.
///
/// Serializable so hosts can persist chart setup. Unknown fields are ignored
/// on load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    pub kind: ChartKind,
    pub viewport: Viewport,
    #[serde(default)]
    pub chart_id: Option<String>,
    #[serde(default = "default_duration_ms")]
    pub duration_ms: f64,
    /// Easing of the first render after mount.
    #[serde(default)]
    pub easing: Easing,
    /// Easing of later renders; falls back to the kind's update easing,
    /// then to `easing`.
    #[serde(default)]
    pub update_easing: Option<Easing>,
    #[serde(default = "default_palette")]
    pub palette_colors: Vec<Color>,
    /// Falls back to [`ChartKind::default_value_to_radius`].
    #[serde(default)]
    pub value_to_radius: Option<RadiusMapping>,
    #[serde(default)]
    pub curve: CurveMode,
    #[serde(default)]
    pub arc_tween: ArcTween,
    #[serde(default)]
    pub value_domain: Option<ValueDomain>,
    #[serde(default)]
    pub inner_radius_ratio: f64,
    #[serde(default)]
    pub pie_sort: PieSort,
    #[serde(default = "default_band_padding")]
    pub band_padding: f64,
    #[serde(default = "default_marker_radius")]
    pub marker_radius: f64,
    #[serde(default = "default_stroke_width")]
    pub stroke_width: f64,
}

impl ChartConfig {
    #[must_use]
    pub fn new(kind: ChartKind, viewport: Viewport) -> Self {
        Self {
            kind,
            viewport,
            chart_id: None,
            duration_ms: default_duration_ms(),
            easing: Easing::ExpInOut,
            update_easing: None,
            palette_colors: default_palette(),
            value_to_radius: None,
            curve: CurveMode::default(),
            arc_tween: ArcTween::default(),
            value_domain: None,
            inner_radius_ratio: 0.0,
            pie_sort: PieSort::default(),
            band_padding: default_band_padding(),
            marker_radius: default_marker_radius(),
            stroke_width: default_stroke_width(),
        }
    }

    /// Line chart over a fixed `[0, 1]` value domain.
    #[must_use]
    pub fn line(viewport: Viewport) -> Self {
        Self::new(ChartKind::Line, viewport)
    }

    /// Pie chart: grows in with exp-in-out, updates with back-in-out.
    #[must_use]
    pub fn pie(viewport: Viewport) -> Self {
        Self::new(ChartKind::Pie, viewport)
    }

    #[must_use]
    pub fn bar(viewport: Viewport) -> Self {
        Self::new(ChartKind::Bar, viewport)
    }

    /// Circle chart: radius `ln(value) * 75`.
    #[must_use]
    pub fn circle(viewport: Viewport) -> Self {
        Self::new(ChartKind::Circle, viewport)
    }

    #[must_use]
    pub fn with_chart_id(mut self, chart_id: impl Into<String>) -> Self {
        self.chart_id = Some(chart_id.into());
        self
    }

    #[must_use]
    pub fn with_duration_ms(mut self, duration_ms: f64) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    #[must_use]
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    #[must_use]
    pub fn with_update_easing(mut self, easing: Easing) -> Self {
        self.update_easing = Some(easing);
        self
    }

    #[must_use]
    pub fn with_palette(mut self, palette: Vec<Color>) -> Self {
        self.palette_colors = palette;
        self
    }

    #[must_use]
    pub fn with_value_to_radius(mut self, mapping: RadiusMapping) -> Self {
        self.value_to_radius = Some(mapping);
        self
    }

    #[must_use]
    pub fn with_curve(mut self, curve: CurveMode) -> Self {
        self.curve = curve;
        self
    }

    #[must_use]
    pub fn with_arc_tween(mut self, tween: ArcTween) -> Self {
        self.arc_tween = tween;
        self
    }

    #[must_use]
    pub fn with_value_domain(mut self, domain: ValueDomain) -> Self {
        self.value_domain = Some(domain);
        self
    }

    /// Donut hole as a ratio of the outer radius, in `[0, 1)`.
    #[must_use]
    pub fn with_inner_radius_ratio(mut self, ratio: f64) -> Self {
        self.inner_radius_ratio = ratio;
        self
    }

    #[must_use]
    pub fn with_pie_sort(mut self, sort: PieSort) -> Self {
        self.pie_sort = sort;
        self
    }

    #[must_use]
    pub fn with_band_padding(mut self, padding: f64) -> Self {
        self.band_padding = padding;
        self
    }

    #[must_use]
    pub fn with_marker_radius(mut self, radius: f64) -> Self {
        self.marker_radius = radius;
        self
    }

    #[must_use]
    pub fn with_stroke_width(mut self, width: f64) -> Self {
        self.stroke_width = width;
        self
    }

    #[must_use]
    pub fn effective_value_domain(&self) -> ValueDomain {
        self.value_domain
            .unwrap_or_else(|| self.kind.default_value_domain())
    }

    #[must_use]
    pub fn effective_value_to_radius(&self) -> RadiusMapping {
        self.value_to_radius
            .clone()
            .unwrap_or_else(|| self.kind.default_value_to_radius())
    }

    #[must_use]
    pub fn effective_chart_id(&self) -> &str {
        self.chart_id
            .as_deref()
            .unwrap_or_else(|| self.kind.id_prefix())
    }

    /// Easing for a render; `first_render` is true when nothing was drawn yet.
    #[must_use]
    pub fn easing_for(&self, first_render: bool) -> Easing {
        if first_render {
            self.easing
        } else {
            self.update_easing
                .or(self.kind.default_update_easing())
                .unwrap_or(self.easing)
        }
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidConfig(format!("failed to parse chart config: {e}")))
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidConfig(format!("failed to serialize chart config: {e}"))
        })
    }
}

fn default_duration_ms() -> f64 {
    DEFAULT_TRANSITION_DURATION_MS
}

fn default_palette() -> Vec<Color> {
    vec![
        Color::from_rgb8(0x2a, 0x69, 0x65),
        Color::from_rgb8(0x4e, 0xa1, 0x9b),
        Color::from_rgb8(0xc3, 0xdf, 0xde),
    ]
}

fn default_band_padding() -> f64 {
    0.1
}

fn default_marker_radius() -> f64 {
    5.0
}

fn default_stroke_width() -> f64 {
    1.5
}
