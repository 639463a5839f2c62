//! Approximate logo drawn with primitive raster operations
//!
//! Used when the SVG renderer is not compiled in. The drawing mirrors the
//! vector icon; every proportion is a fixed fraction of the target size.

use image::{Rgba, RgbaImage};

use super::draw::{arc, fill_ellipse, fill_rect, line, stroke_ellipse};
use super::{Backend, Rasterizer};
use crate::error::LogoError;
use crate::types::palette::*;

/// Stroke width given in pixels at 128px, scaled to `size` (at least 1px)
fn stroke(size: u32, width_at_128: f32) -> f32 {
    (width_at_128 * size as f32 / 128.0).max(1.0)
}

/// Draw the logo approximation into a fresh transparent `size` x `size` buffer
pub fn draw_logo(size: u32) -> RgbaImage {
    let mut img = RgbaImage::from_pixel(size, size, Rgba([0, 0, 0, 0]));
    let s = size as i64;

    // Badge
    let margin = (s / 16) as f32;
    let center = (s / 2) as f32;
    let badge_r = center - margin;
    fill_ellipse(&mut img, center, center, badge_r, badge_r, BG.to_rgba());
    stroke_ellipse(
        &mut img,
        center,
        center,
        badge_r,
        badge_r,
        stroke(size, 2.0),
        BG2.to_rgba(),
    );

    // Clock face
    let clock_r = (s / 3) as f32;
    stroke_ellipse(
        &mut img,
        center,
        center,
        clock_r,
        clock_r,
        stroke(size, 3.0),
        FG.to_rgba(),
    );

    let hand = ((s / 3) / 2) as f32;
    line(
        &mut img,
        (center, center),
        (center, center - hand),
        stroke(size, 4.0),
        YELLOW.to_rgba(),
    );
    line(
        &mut img,
        (center, center),
        (center + hand, center),
        stroke(size, 3.0),
        ORANGE.to_rgba(),
    );

    let dot = (s / 32) as f32;
    fill_ellipse(&mut img, center, center, dot, dot, RED.to_rgba());

    let marker = (s / 64) as f32;
    for (x, y) in [
        (center, center - clock_r),
        (center + clock_r, center),
        (center, center + clock_r),
        (center - clock_r, center),
    ] {
        fill_ellipse(&mut img, x, y, marker, marker, FG.to_rgba());
    }

    // Query glyph, upper left
    let q_size = s / 8;
    let q = (s / 4) as f32;
    arc(
        &mut img,
        q,
        q,
        (q_size / 2) as f32,
        0.0,
        180.0,
        stroke(size, 2.0),
        AQUA.to_rgba(),
    );
    let q_dot = stroke(size, 1.0);
    fill_ellipse(
        &mut img,
        q,
        q + (q_size / 3) as f32,
        q_dot,
        q_dot,
        AQUA.to_rgba(),
    );

    // List glyph, lower right
    let list = s * 3 / 4;
    let bar = s / 16;
    let bar_h = s / 64;
    let spacing = s / 32;
    let bullet = stroke(size, 1.0);
    for i in 0..3 {
        let y = list + i * spacing;
        let bullet_x = (list - bar / 2 - spacing / 2) as f32;
        fill_ellipse(&mut img, bullet_x, y as f32, bullet, bullet, PURPLE.to_rgba());
        fill_rect(
            &mut img,
            (list - bar / 2, y - bar_h / 2),
            (list + bar / 2, y + bar_h / 2),
            GREEN.to_rgba(),
        );
    }

    img
}

/// Rasterizer that ignores the markup and draws the approximation
#[derive(Debug, Default, Clone, Copy)]
pub struct FallbackDrawer;

impl Rasterizer for FallbackDrawer {
    fn backend(&self) -> Backend {
        Backend::Fallback
    }

    fn render(&self, _svg: &str, size: u32) -> Result<RgbaImage, LogoError> {
        if size == 0 {
            return Err(LogoError::InvalidSize(size));
        }
        Ok(draw_logo(size))
    }
}
