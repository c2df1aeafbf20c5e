pub mod bar_series;
pub mod circle_series;
pub mod color_scale;
pub mod easing;
pub mod line_series;
pub mod pie;
pub mod primitives;
pub mod scale;
pub mod shape;
pub mod types;

pub use bar_series::{bar_baseline, project_bars};
pub use circle_series::{RadiusFn, RadiusMapping, project_circles};
pub use color_scale::OrdinalColorScale;
pub use easing::Easing;
pub use line_series::{CurveMode, line_path, project_line_vertices};
pub use pie::{PieSlice, PieSort, arc_path, layout_pie, project_pie_arcs};
pub use scale::{BandScale, LinearScale, ValueDomain};
pub use shape::{ArcGeometry, BarGeometry, CircleGeometry, ShapeDescriptor, VertexGeometry};
pub use types::{DataKey, DataPoint, DataSnapshot, Position, Viewport};
