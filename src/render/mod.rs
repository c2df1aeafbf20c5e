mod frame;
mod null_renderer;
mod primitives;
mod svg_renderer;

pub use frame::RenderFrame;
pub use null_renderer::NullRenderer;
pub use primitives::{
    CirclePrimitive, Color, PathCommand, PathCommands, PathPrimitive, RectPrimitive, path_data,
};
pub use svg_renderer::{SvgRenderer, render_svg};

use crate::error::ChartResult;

/// Mount target for a chart: anything that can receive drawing output.
///
/// Backends receive a fully materialized, deterministic `RenderFrame` so
/// drawing code remains isolated from reconciliation and timing logic.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;

    /// Releases whatever the backend attached for the chart. Called once when
    /// the owning chart unmounts.
    fn detach(&mut self) {}
}
