//! Vector markup for the logo
//!
//! The icon is a fixed list of shapes in a 128x128 design space: a circular
//! badge holding a clock face, a small query glyph and a list glyph.

use crate::types::palette::*;
use crate::types::{Fill, Paint, Shape, Stroke};

/// Side length of the SVG design space
pub const DESIGN_SIZE: f64 = 128.0;

const CENTER: f64 = 64.0;
const CLOCK_RADIUS: f64 = 35.0;

/// Format a number compactly, treating -0 as 0
fn f(n: f64) -> String {
    let n = if n == 0.0 { 0.0 } else { n };
    format!("{}", n)
}

/// The fixed icon geometry
pub fn logo_shapes() -> Vec<Shape> {
    let mut shapes = vec![
        // Badge
        Shape::Circle {
            cx: CENTER,
            cy: CENTER,
            r: 60.0,
            paint: Paint {
                fill: Fill::Url("bgGradient"),
                stroke: Some(Stroke::new(BG2, 2.0)),
                filter: Some("shadow"),
            },
        },
        // Clock face
        Shape::Circle {
            cx: CENTER,
            cy: CENTER,
            r: CLOCK_RADIUS,
            paint: Paint::stroke(Stroke::new(FG, 3.0)),
        },
        Shape::Line {
            x1: CENTER,
            y1: CENTER,
            x2: CENTER,
            y2: 40.0,
            paint: Paint::stroke(Stroke::round(YELLOW, 4.0)),
        },
        Shape::Line {
            x1: CENTER,
            y1: CENTER,
            x2: 80.0,
            y2: CENTER,
            paint: Paint::stroke(Stroke::round(ORANGE, 3.0)),
        },
        Shape::Circle {
            cx: CENTER,
            cy: CENTER,
            r: 4.0,
            paint: Paint::fill(RED),
        },
    ];

    // Hour markers at 12, 3, 6 and 9 o'clock
    for (dx, dy) in [(0.0, -1.0), (1.0, 0.0), (0.0, 1.0), (-1.0, 0.0)] {
        shapes.push(Shape::Circle {
            cx: CENTER + dx * CLOCK_RADIUS,
            cy: CENTER + dy * CLOCK_RADIUS,
            r: 2.0,
            paint: Paint::fill(FG),
        });
    }

    shapes.push(Shape::Path {
        d: "M 45 20 Q 50 15 55 20 Q 60 25 55 30 L 52 35 M 52 40 L 52 42",
        paint: Paint::stroke(Stroke::round(AQUA, 2.5)),
    });

    for (y, w) in [(85.0, 15.0), (90.0, 12.0), (95.0, 18.0)] {
        shapes.push(Shape::Rect {
            x: 75.0,
            y,
            w,
            h: 2.0,
            rx: 1.0,
            paint: Paint::fill(GREEN),
        });
    }

    for y in [86.0, 91.0, 96.0] {
        shapes.push(Shape::Circle {
            cx: 72.0,
            cy: y,
            r: 1.5,
            paint: Paint::fill(PURPLE),
        });
    }

    shapes
}

fn paint_attributes(paint: &Paint) -> String {
    let mut attrs = match paint.fill {
        Fill::None => " fill=\"none\"".to_string(),
        Fill::Solid(c) => format!(" fill=\"{}\"", c),
        Fill::Url(id) => format!(" fill=\"url(#{})\"", id),
    };

    if let Some(stroke) = &paint.stroke {
        attrs.push_str(&format!(
            " stroke=\"{}\" stroke-width=\"{}\"",
            stroke.color,
            f(stroke.width)
        ));
        if stroke.round {
            attrs.push_str(" stroke-linecap=\"round\"");
        }
    }

    if let Some(filter) = paint.filter {
        attrs.push_str(&format!(" filter=\"url(#{})\"", filter));
    }

    attrs
}

/// Convert a shape to an SVG element string
fn shape_to_svg_element(shape: &Shape) -> String {
    let paint = paint_attributes(shape.paint());

    match shape {
        Shape::Circle { cx, cy, r, .. } => format!(
            "<circle cx=\"{}\" cy=\"{}\" r=\"{}\"{}/>",
            f(*cx),
            f(*cy),
            f(*r),
            paint
        ),
        Shape::Line { x1, y1, x2, y2, .. } => format!(
            "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\"{}/>",
            f(*x1),
            f(*y1),
            f(*x2),
            f(*y2),
            paint
        ),
        Shape::Path { d, .. } => format!("<path d=\"{}\"{}/>", d, paint),
        Shape::Rect { x, y, w, h, rx, .. } => {
            let mut el = format!(
                "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\"",
                f(*x),
                f(*y),
                f(*w),
                f(*h)
            );
            if *rx > 0.0 {
                el.push_str(&format!(" rx=\"{}\"", f(*rx)));
            }
            el.push_str(&paint);
            el.push_str("/>");
            el
        }
    }
}

/// Build the logo SVG document
///
/// Pure and deterministic: every call returns the same bytes.
pub fn logo_svg() -> String {
    let size = f(DESIGN_SIZE);
    let elements: Vec<String> = logo_shapes().iter().map(shape_to_svg_element).collect();

    format!(
        r##"<?xml version="1.0" encoding="UTF-8"?>
<svg width="{size}" height="{size}" viewBox="0 0 {size} {size}" xmlns="http://www.w3.org/2000/svg">
  <defs>
    <linearGradient id="bgGradient" x1="0%" y1="0%" x2="100%" y2="100%">
      <stop offset="0%" style="stop-color:{bg};stop-opacity:1"/>
      <stop offset="100%" style="stop-color:{bg1};stop-opacity:1"/>
    </linearGradient>
    <filter id="shadow" x="-50%" y="-50%" width="200%" height="200%">
      <feDropShadow dx="2" dy="2" stdDeviation="3" flood-color="{shadow}" flood-opacity="0.5"/>
    </filter>
  </defs>
  {elements}
</svg>
"##,
        bg = BG,
        bg1 = BG1,
        shadow = BG0_HARD,
        elements = elements.join("\n  ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_format() {
        assert_eq!(f(64.0), "64");
        assert_eq!(f(2.5), "2.5");
        assert_eq!(f(-0.0), "0");
    }

    #[test]
    fn test_logo_svg_is_deterministic() {
        assert_eq!(logo_svg(), logo_svg());
    }

    #[test]
    fn test_shape_counts() {
        let shapes = logo_shapes();
        let count = |tag: &str| shapes.iter().filter(|s| s.tag() == tag).count();
        // badge + clock + center + 4 markers + 3 list dots
        assert_eq!(count("circle"), 10);
        assert_eq!(count("line"), 2);
        assert_eq!(count("path"), 1);
        assert_eq!(count("rect"), 3);
    }

    #[test]
    fn test_rim_markers_on_clock_face() {
        let svg = logo_svg();
        assert!(svg.contains("<circle cx=\"64\" cy=\"29\" r=\"2\" fill=\"#ebdbb2\"/>"));
        assert!(svg.contains("<circle cx=\"99\" cy=\"64\" r=\"2\" fill=\"#ebdbb2\"/>"));
        assert!(svg.contains("<circle cx=\"64\" cy=\"99\" r=\"2\" fill=\"#ebdbb2\"/>"));
        assert!(svg.contains("<circle cx=\"29\" cy=\"64\" r=\"2\" fill=\"#ebdbb2\"/>"));
    }

    #[test]
    fn test_badge_element() {
        let svg = logo_svg();
        assert!(svg.contains(
            "<circle cx=\"64\" cy=\"64\" r=\"60\" fill=\"url(#bgGradient)\" stroke=\"#504945\" stroke-width=\"2\" filter=\"url(#shadow)\"/>"
        ));
    }

    #[test]
    fn test_list_bar_has_rounded_corners() {
        let svg = logo_svg();
        assert!(svg.contains(
            "<rect x=\"75\" y=\"95\" width=\"18\" height=\"2\" rx=\"1\" fill=\"#b8bb26\"/>"
        ));
    }

    #[test]
    fn test_header() {
        let svg = logo_svg();
        assert!(svg.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(svg.contains("viewBox=\"0 0 128 128\""));
        assert!(svg.trim_end().ends_with("</svg>"));
    }
}
