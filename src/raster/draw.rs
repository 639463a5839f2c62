//! Primitive raster drawing on RGBA buffers
//!
//! Coordinates are pixel positions; every primitive clips to the buffer.
//! Pixels are overwritten, not blended.

use image::{Rgba, RgbaImage};

fn put(img: &mut RgbaImage, x: i64, y: i64, color: Rgba<u8>) {
    if x >= 0 && y >= 0 && (x as u64) < img.width() as u64 && (y as u64) < img.height() as u64 {
        img.put_pixel(x as u32, y as u32, color);
    }
}

/// Normalized squared distance of (x, y) from an ellipse center; <= 1 is inside
fn ellipse_norm(x: f32, y: f32, cx: f32, cy: f32, rx: f32, ry: f32) -> f32 {
    let dx = (x - cx) / rx;
    let dy = (y - cy) / ry;
    dx * dx + dy * dy
}

fn span(center: f32, radius: f32) -> std::ops::RangeInclusive<i64> {
    (center - radius).floor() as i64..=(center + radius).ceil() as i64
}

/// Fill an axis-aligned ellipse; a degenerate radius plots the center pixel
pub fn fill_ellipse(img: &mut RgbaImage, cx: f32, cy: f32, rx: f32, ry: f32, color: Rgba<u8>) {
    if rx <= 0.0 || ry <= 0.0 {
        put(img, cx.round() as i64, cy.round() as i64, color);
        return;
    }

    for y in span(cy, ry) {
        for x in span(cx, rx) {
            if ellipse_norm(x as f32, y as f32, cx, cy, rx, ry) <= 1.0 {
                put(img, x, y, color);
            }
        }
    }
}

/// Outline an ellipse with a band of `width` pixels drawn inward from the edge
pub fn stroke_ellipse(
    img: &mut RgbaImage,
    cx: f32,
    cy: f32,
    rx: f32,
    ry: f32,
    width: f32,
    color: Rgba<u8>,
) {
    let inner_rx = rx - width;
    let inner_ry = ry - width;
    if inner_rx <= 0.0 || inner_ry <= 0.0 {
        fill_ellipse(img, cx, cy, rx, ry, color);
        return;
    }

    for y in span(cy, ry) {
        for x in span(cx, rx) {
            let (px, py) = (x as f32, y as f32);
            if ellipse_norm(px, py, cx, cy, rx, ry) <= 1.0
                && ellipse_norm(px, py, cx, cy, inner_rx, inner_ry) > 1.0
            {
                put(img, x, y, color);
            }
        }
    }
}

/// Distance from a point to the segment (x0, y0)-(x1, y1)
fn segment_distance(px: f32, py: f32, x0: f32, y0: f32, x1: f32, y1: f32) -> f32 {
    let (dx, dy) = (x1 - x0, y1 - y0);
    let len_sq = dx * dx + dy * dy;
    let t = if len_sq == 0.0 {
        0.0
    } else {
        (((px - x0) * dx + (py - y0) * dy) / len_sq).clamp(0.0, 1.0)
    };
    let (nx, ny) = (x0 + t * dx, y0 + t * dy);
    ((px - nx).powi(2) + (py - ny).powi(2)).sqrt()
}

/// Draw a straight line of the given width with round ends
pub fn line(
    img: &mut RgbaImage,
    (x0, y0): (f32, f32),
    (x1, y1): (f32, f32),
    width: f32,
    color: Rgba<u8>,
) {
    let half = (width / 2.0).max(0.5);

    for y in (y0.min(y1) - half).floor() as i64..=(y0.max(y1) + half).ceil() as i64 {
        for x in (x0.min(x1) - half).floor() as i64..=(x0.max(x1) + half).ceil() as i64 {
            if segment_distance(x as f32, y as f32, x0, y0, x1, y1) <= half {
                put(img, x, y, color);
            }
        }
    }
}

/// Draw a circular arc band of `width` pixels inside radius `r`.
///
/// Angles are in degrees, measured clockwise from 3 o'clock (image y grows
/// downward), so 0..180 is the lower half.
#[allow(clippy::too_many_arguments)]
pub fn arc(
    img: &mut RgbaImage,
    cx: f32,
    cy: f32,
    r: f32,
    start_deg: f32,
    end_deg: f32,
    width: f32,
    color: Rgba<u8>,
) {
    let inner = (r - width).max(0.0);
    let start = start_deg.rem_euclid(360.0);
    let end = end_deg.rem_euclid(360.0);
    let full = (end_deg - start_deg).abs() >= 360.0;

    for y in span(cy, r) {
        for x in span(cx, r) {
            let (dx, dy) = (x as f32 - cx, y as f32 - cy);
            let dist = (dx * dx + dy * dy).sqrt();
            if dist > r || dist < inner {
                continue;
            }

            let angle = dy.atan2(dx).to_degrees().rem_euclid(360.0);
            let in_range = full
                || if start <= end {
                    angle >= start && angle <= end
                } else {
                    angle >= start || angle <= end
                };
            if in_range {
                put(img, x, y, color);
            }
        }
    }
}

/// Fill the rectangle with inclusive corners (x0, y0) and (x1, y1)
pub fn fill_rect(img: &mut RgbaImage, (x0, y0): (i64, i64), (x1, y1): (i64, i64), color: Rgba<u8>) {
    for y in y0.min(y1)..=y0.max(y1) {
        for x in x0.min(x1)..=x0.max(x1) {
            put(img, x, y, color);
        }
    }
}
