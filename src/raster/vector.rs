//! SVG rendering through resvg

use image::RgbaImage;
use resvg::{tiny_skia, usvg};

use super::{Backend, Rasterizer};
use crate::error::LogoError;

/// Renders the markup itself; preferred over the fallback drawer
#[derive(Debug, Default, Clone, Copy)]
pub struct VectorRenderer;

impl Rasterizer for VectorRenderer {
    fn backend(&self) -> Backend {
        Backend::Vector
    }

    fn render(&self, svg: &str, size: u32) -> Result<RgbaImage, LogoError> {
        let opt = usvg::Options::default();
        let tree = usvg::Tree::from_str(svg, &opt).map_err(|e| LogoError::Markup(e.to_string()))?;

        let mut pixmap = tiny_skia::Pixmap::new(size, size).ok_or(LogoError::InvalidSize(size))?;

        // Fit the document into the square, keeping its aspect ratio
        let svg_size = tree.size();
        let scale = (size as f32 / svg_size.width()).min(size as f32 / svg_size.height());
        let transform = tiny_skia::Transform::from_scale(scale, scale);
        resvg::render(&tree, transform, &mut pixmap.as_mut());

        // tiny-skia stores premultiplied alpha
        let mut rgba = Vec::with_capacity((size as usize) * (size as usize) * 4);
        for pixel in pixmap.pixels() {
            let c = pixel.demultiply();
            rgba.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
        }

        RgbaImage::from_raw(size, size, rgba).ok_or(LogoError::InvalidSize(size))
    }
}
