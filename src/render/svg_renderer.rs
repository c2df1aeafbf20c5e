use std::fmt::Write as _;

use crate::error::ChartResult;
use crate::render::{Color, RenderFrame, Renderer};

/// Serializes every frame into a standalone SVG document.
///
/// The latest document is kept until the next frame or until the chart
/// unmounts, at which point the renderer is cleared.
#[derive(Debug, Default)]
pub struct SvgRenderer {
    document: Option<String>,
    frames_rendered: usize,
}

impl SvgRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// SVG markup of the most recently rendered frame.
    #[must_use]
    pub fn document(&self) -> Option<&str> {
        self.document.as_deref()
    }

    #[must_use]
    pub fn frames_rendered(&self) -> usize {
        self.frames_rendered
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.document = Some(render_svg(frame));
        self.frames_rendered += 1;
        Ok(())
    }

    fn detach(&mut self) {
        self.document = None;
    }
}

#[must_use]
pub fn render_svg(frame: &RenderFrame) -> String {
    let width = frame.viewport.width;
    let height = frame.viewport.height;
    let mut svg = String::new();
    let _ = write!(
        svg,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">"
    );

    for rect in &frame.rects {
        let _ = write!(
            svg,
            "<rect id=\"{}\" x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" fill=\"{}\"/>",
            escape_xml(&rect.element_id),
            rect.x,
            rect.y,
            rect.width.max(0.0),
            rect.height.max(0.0),
            rect.fill.to_hex()
        );
    }

    for path in &frame.paths {
        let _ = write!(
            svg,
            "<path id=\"{}\" d=\"{}\" fill=\"{}\"",
            escape_xml(&path.element_id),
            path.path_data(),
            paint(path.fill)
        );
        if let Some(stroke) = path.stroke {
            let _ = write!(
                svg,
                " stroke=\"{}\" stroke-width=\"{:.2}\"",
                stroke.to_hex(),
                path.stroke_width
            );
        }
        svg.push_str("/>");
    }

    for circle in &frame.circles {
        let _ = write!(
            svg,
            "<circle id=\"{}\" cx=\"{:.2}\" cy=\"{:.2}\" r=\"{:.2}\" fill=\"{}\"",
            escape_xml(&circle.element_id),
            circle.cx,
            circle.cy,
            circle.radius.max(0.0),
            circle.fill.to_hex()
        );
        if let Some(stroke) = circle.stroke {
            let _ = write!(
                svg,
                " stroke=\"{}\" stroke-width=\"{:.2}\"",
                stroke.to_hex(),
                circle.stroke_width
            );
        }
        svg.push_str("/>");
    }

    svg.push_str("</svg>");
    svg
}

fn paint(color: Option<Color>) -> String {
    color.map_or_else(|| "none".to_owned(), Color::to_hex)
}

fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
