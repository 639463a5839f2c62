use image::Rgba;
use std::fmt;

/// Opaque RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_rgba(self) -> Rgba<u8> {
        Rgba([self.r, self.g, self.b, 255])
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Gruvbox dark palette used by the logo
pub mod palette {
    use super::Color;

    pub const BG0_HARD: Color = Color::rgb(0x1d, 0x20, 0x21);
    pub const BG: Color = Color::rgb(0x28, 0x28, 0x28);
    pub const BG1: Color = Color::rgb(0x3c, 0x38, 0x36);
    pub const BG2: Color = Color::rgb(0x50, 0x49, 0x45);
    pub const FG: Color = Color::rgb(0xeb, 0xdb, 0xb2);
    pub const YELLOW: Color = Color::rgb(0xfa, 0xbd, 0x2f);
    pub const ORANGE: Color = Color::rgb(0xfe, 0x80, 0x19);
    pub const RED: Color = Color::rgb(0xfb, 0x49, 0x34);
    pub const AQUA: Color = Color::rgb(0x8e, 0xc0, 0x7c);
    pub const GREEN: Color = Color::rgb(0xb8, 0xbb, 0x26);
    pub const PURPLE: Color = Color::rgb(0xd3, 0x86, 0x9b);
}

/// Fill source for a shape
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Fill {
    None,
    Solid(Color),
    /// Reference to a `<defs>` entry by id
    Url(&'static str),
}

/// Stroke settings; `round` selects round line caps
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f64,
    pub round: bool,
}

impl Stroke {
    pub const fn new(color: Color, width: f64) -> Self {
        Self {
            color,
            width,
            round: false,
        }
    }

    pub const fn round(color: Color, width: f64) -> Self {
        Self {
            color,
            width,
            round: true,
        }
    }
}

/// How a shape is painted
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paint {
    pub fill: Fill,
    pub stroke: Option<Stroke>,
    /// Filter id from `<defs>`
    pub filter: Option<&'static str>,
}

impl Paint {
    pub const fn fill(color: Color) -> Self {
        Self {
            fill: Fill::Solid(color),
            stroke: None,
            filter: None,
        }
    }

    pub const fn stroke(stroke: Stroke) -> Self {
        Self {
            fill: Fill::None,
            stroke: Some(stroke),
            filter: None,
        }
    }
}

/// Icon shapes in the 128x128 design space
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Circle {
        cx: f64,
        cy: f64,
        r: f64,
        paint: Paint,
    },
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        paint: Paint,
    },
    Path {
        d: &'static str,
        paint: Paint,
    },
    Rect {
        x: f64,
        y: f64,
        w: f64,
        h: f64,
        rx: f64,
        paint: Paint,
    },
}

impl Shape {
    pub fn paint(&self) -> &Paint {
        match self {
            Shape::Circle { paint, .. }
            | Shape::Line { paint, .. }
            | Shape::Path { paint, .. }
            | Shape::Rect { paint, .. } => paint,
        }
    }

    /// SVG element name
    pub fn tag(&self) -> &'static str {
        match self {
            Shape::Circle { .. } => "circle",
            Shape::Line { .. } => "line",
            Shape::Path { .. } => "path",
            Shape::Rect { .. } => "rect",
        }
    }
}
