use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
///
/// Serializes as a `#rrggbb` / `#rrggbbaa` hex string so palettes in config
/// files read the same way they do in stylesheets.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    #[must_use]
    pub const fn from_rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self::rgb(
            red as f64 / 255.0,
            green as f64 / 255.0,
            blue as f64 / 255.0,
        )
    }

    /// Parses `#rgb`, `#rrggbb` or `#rrggbbaa`.
    pub fn from_hex(input: &str) -> ChartResult<Self> {
        let digits = input.strip_prefix('#').unwrap_or(input);
        let invalid = || ChartError::InvalidConfig(format!("invalid hex color `{input}`"));
        if !digits.bytes().all(|byte| byte.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| invalid())
        };
        let short = |index: usize| {
            u8::from_str_radix(&digits[index..=index], 16)
                .map(|nibble| nibble * 17)
                .map_err(|_| invalid())
        };

        let (red, green, blue, alpha) = match digits.len() {
            3 => (short(0)?, short(1)?, short(2)?, 255),
            6 => (channel(0..2)?, channel(2..4)?, channel(4..6)?, 255),
            8 => (
                channel(0..2)?,
                channel(2..4)?,
                channel(4..6)?,
                channel(6..8)?,
            ),
            _ => return Err(invalid()),
        };
        Ok(Self::rgba(
            f64::from(red) / 255.0,
            f64::from(green) / 255.0,
            f64::from(blue) / 255.0,
            f64::from(alpha) / 255.0,
        ))
    }

    #[must_use]
    pub fn to_hex(self) -> String {
        let to_byte = |value: f64| (value.clamp(0.0, 1.0) * 255.0).round() as u8;
        let mut out = format!(
            "#{:02x}{:02x}{:02x}",
            to_byte(self.red),
            to_byte(self.green),
            to_byte(self.blue)
        );
        if self.alpha < 1.0 {
            let _ = write!(out, "{:02x}", to_byte(self.alpha));
        }
        out
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

impl TryFrom<String> for Color {
    type Error = ChartError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<Color> for String {
    fn from(value: Color) -> Self {
        value.to_hex()
    }
}

/// One drawing command in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathCommand {
    MoveTo {
        x: f64,
        y: f64,
    },
    LineTo {
        x: f64,
        y: f64,
    },
    CubicTo {
        c1x: f64,
        c1y: f64,
        c2x: f64,
        c2y: f64,
        x: f64,
        y: f64,
    },
    /// Circular arc to `(x, y)` with SVG large-arc/sweep semantics.
    ArcTo {
        radius: f64,
        large_arc: bool,
        sweep: bool,
        x: f64,
        y: f64,
    },
    Close,
}

impl PathCommand {
    fn coordinates(self) -> smallvec::SmallVec<[f64; 6]> {
        match self {
            Self::MoveTo { x, y } | Self::LineTo { x, y } => smallvec::smallvec![x, y],
            Self::CubicTo {
                c1x,
                c1y,
                c2x,
                c2y,
                x,
                y,
            } => smallvec::smallvec![c1x, c1y, c2x, c2y, x, y],
            Self::ArcTo { radius, x, y, .. } => smallvec::smallvec![radius, x, y],
            Self::Close => smallvec::SmallVec::new(),
        }
    }
}

/// Serializes commands as SVG path data (`d` attribute).
#[must_use]
pub fn path_data(commands: &[PathCommand]) -> String {
    let mut out = String::new();
    for command in commands {
        let _ = match *command {
            PathCommand::MoveTo { x, y } => write!(out, "M{},{}", fmt_num(x), fmt_num(y)),
            PathCommand::LineTo { x, y } => write!(out, "L{},{}", fmt_num(x), fmt_num(y)),
            PathCommand::CubicTo {
                c1x,
                c1y,
                c2x,
                c2y,
                x,
                y,
            } => write!(
                out,
                "C{},{},{},{},{},{}",
                fmt_num(c1x),
                fmt_num(c1y),
                fmt_num(c2x),
                fmt_num(c2y),
                fmt_num(x),
                fmt_num(y)
            ),
            PathCommand::ArcTo {
                radius,
                large_arc,
                sweep,
                x,
                y,
            } => write!(
                out,
                "A{r},{r},0,{},{},{},{}",
                u8::from(large_arc),
                u8::from(sweep),
                fmt_num(x),
                fmt_num(y),
                r = fmt_num(radius)
            ),
            PathCommand::Close => write!(out, "Z"),
        };
    }
    out
}

/// Formats with at most six decimals and no trailing zeros.
fn fmt_num(value: f64) -> String {
    let rounded = (value * 1e6).round() / 1e6;
    if rounded == 0.0 {
        return "0".to_owned();
    }
    let text = format!("{rounded:.6}");
    text.trim_end_matches('0').trim_end_matches('.').to_owned()
}

/// Inline storage sized for a donut wedge; longer line paths spill to the heap.
pub type PathCommands = smallvec::SmallVec<[PathCommand; 8]>;

/// Filled and/or stroked path; used for line series and pie wedges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathPrimitive {
    pub element_id: String,
    pub commands: PathCommands,
    pub fill: Option<Color>,
    pub stroke: Option<Color>,
    pub stroke_width: f64,
}

impl PathPrimitive {
    #[must_use]
    pub fn filled(
        element_id: impl Into<String>,
        commands: impl Into<PathCommands>,
        fill: Color,
    ) -> Self {
        Self {
            element_id: element_id.into(),
            commands: commands.into(),
            fill: Some(fill),
            stroke: None,
            stroke_width: 0.0,
        }
    }

    #[must_use]
    pub fn stroked(
        element_id: impl Into<String>,
        commands: impl Into<PathCommands>,
        stroke: Color,
        stroke_width: f64,
    ) -> Self {
        Self {
            element_id: element_id.into(),
            commands: commands.into(),
            fill: None,
            stroke: Some(stroke),
            stroke_width,
        }
    }

    #[must_use]
    pub fn path_data(&self) -> String {
        path_data(&self.commands)
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self
            .commands
            .iter()
            .flat_map(|command| command.coordinates())
            .any(|value| !value.is_finite())
        {
            return Err(ChartError::InvalidData(
                "path coordinates must be finite".to_owned(),
            ));
        }
        if self.stroke.is_some() && (!self.stroke_width.is_finite() || self.stroke_width <= 0.0) {
            return Err(ChartError::InvalidData(
                "path stroke width must be finite and > 0".to_owned(),
            ));
        }
        for color in [self.fill, self.stroke].into_iter().flatten() {
            color.validate()?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CirclePrimitive {
    pub element_id: String,
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
    pub fill: Color,
    pub stroke: Option<Color>,
    pub stroke_width: f64,
}

impl CirclePrimitive {
    pub fn validate(&self) -> ChartResult<()> {
        if !self.cx.is_finite() || !self.cy.is_finite() {
            return Err(ChartError::InvalidData(
                "circle center must be finite".to_owned(),
            ));
        }
        // Back-in-out easing overshoots, so a growing circle may dip below zero.
        if !self.radius.is_finite() {
            return Err(ChartError::InvalidData(
                "circle radius must be finite".to_owned(),
            ));
        }
        self.fill.validate()?;
        if let Some(stroke) = self.stroke {
            stroke.validate()?;
        }
        Ok(())
    }
}

/// Axis-aligned filled rectangle in pixel space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RectPrimitive {
    pub element_id: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: Color,
}

impl RectPrimitive {
    pub fn validate(&self) -> ChartResult<()> {
        if !self.x.is_finite()
            || !self.y.is_finite()
            || !self.width.is_finite()
            || !self.height.is_finite()
        {
            return Err(ChartError::InvalidData(
                "rect geometry must be finite".to_owned(),
            ));
        }
        self.fill.validate()
    }
}
