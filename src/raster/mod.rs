//! Rasterization of the logo into PNG files
//!
//! Backends are tried in preference order:
//! 1. `VectorRenderer` renders the SVG markup with resvg (feature `svg-render`)
//! 2. `FallbackDrawer` draws an approximation with primitives (feature `draw`)
//!
//! A backend that is compiled out is simply absent from the chain; one whose
//! `probe` fails at runtime is skipped.

#[cfg(feature = "draw")]
pub mod draw;
#[cfg(feature = "draw")]
mod fallback;
#[cfg(feature = "svg-render")]
mod vector;

use image::{ImageError, ImageFormat, RgbaImage};
use std::fmt;
use std::path::Path;

use crate::error::LogoError;

#[cfg(feature = "draw")]
pub use fallback::{FallbackDrawer, draw_logo};
#[cfg(feature = "svg-render")]
pub use vector::VectorRenderer;

/// Pixel size used for the unsized PNG
pub const DEFAULT_SIZE: u32 = 128;

/// Which path produced an image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Backend {
    Vector,
    Fallback,
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Backend::Vector => write!(f, "vector"),
            Backend::Fallback => write!(f, "fallback"),
        }
    }
}

/// A way of turning the logo markup into pixels
pub trait Rasterizer {
    fn backend(&self) -> Backend;

    /// Runtime capability check; unavailable rasterizers are skipped
    fn probe(&self) -> bool {
        true
    }

    fn render(&self, svg: &str, size: u32) -> Result<RgbaImage, LogoError>;
}

/// An image together with the backend that drew it
#[derive(Debug)]
pub struct Rendered {
    pub image: RgbaImage,
    pub backend: Backend,
}

/// Ordered list of rasterizers, first usable one wins
pub struct RasterChain {
    rasterizers: Vec<Box<dyn Rasterizer>>,
}

impl Default for RasterChain {
    fn default() -> Self {
        Self::detect()
    }
}

impl RasterChain {
    /// A chain with no backends; every render reports `NoRasterizer`
    pub fn empty() -> Self {
        Self {
            rasterizers: Vec::new(),
        }
    }

    /// Append a rasterizer at the lowest preference
    pub fn with(mut self, rasterizer: impl Rasterizer + 'static) -> Self {
        self.rasterizers.push(Box::new(rasterizer));
        self
    }

    /// All backends compiled into this build, preferred first
    #[allow(unused_mut)]
    pub fn detect() -> Self {
        let mut chain = Self::empty();
        #[cfg(feature = "svg-render")]
        {
            chain = chain.with(VectorRenderer);
        }
        #[cfg(feature = "draw")]
        {
            chain = chain.with(FallbackDrawer);
        }
        chain
    }

    /// A chain restricted to one backend
    pub fn only(backend: Backend) -> Result<Self, LogoError> {
        match backend {
            #[cfg(feature = "svg-render")]
            Backend::Vector => Ok(Self::empty().with(VectorRenderer)),
            #[cfg(feature = "draw")]
            Backend::Fallback => Ok(Self::empty().with(FallbackDrawer)),
            #[allow(unreachable_patterns)]
            other => Err(LogoError::Unsupported(other)),
        }
    }

    pub fn backends(&self) -> Vec<Backend> {
        self.rasterizers.iter().map(|r| r.backend()).collect()
    }

    /// Render with the first rasterizer that is available and succeeds
    pub fn render(&self, svg: &str, size: u32) -> Result<Rendered, LogoError> {
        if size == 0 {
            return Err(LogoError::InvalidSize(size));
        }

        let mut last_error = None;
        for rasterizer in &self.rasterizers {
            let backend = rasterizer.backend();
            if !rasterizer.probe() {
                log::debug!("{} backend unavailable, skipping", backend);
                continue;
            }

            match rasterizer.render(svg, size) {
                Ok(image) => return Ok(Rendered { image, backend }),
                Err(e) if e.is_recoverable() => {
                    log::warn!("{} backend failed at {}px: {}", backend, size, e);
                    last_error = Some(e);
                }
                Err(e) => return Err(e),
            }
        }

        match last_error {
            Some(e) => Err(e),
            None => {
                log::error!("cannot rasterize {}px: {}", size, LogoError::NoRasterizer);
                Err(LogoError::NoRasterizer)
            }
        }
    }

    /// Render and write a PNG to `path`, overwriting it; returns the backend used
    pub fn write_png(&self, svg: &str, path: &Path, size: u32) -> Result<Backend, LogoError> {
        let rendered = self.render(svg, size)?;

        rendered
            .image
            .save_with_format(path, ImageFormat::Png)
            .map_err(|e| match e {
                ImageError::IoError(source) => LogoError::io(path, source),
                other => LogoError::Encode(other),
            })?;

        log::debug!(
            "wrote {} ({}x{}, {})",
            path.display(),
            size,
            size,
            rendered.backend
        );
        Ok(rendered.backend)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Simulates a backend whose library is missing at runtime
    struct Absent(Backend);

    impl Rasterizer for Absent {
        fn backend(&self) -> Backend {
            self.0
        }

        fn probe(&self) -> bool {
            false
        }

        fn render(&self, _svg: &str, _size: u32) -> Result<RgbaImage, LogoError> {
            panic!("absent backend must not be called")
        }
    }

    struct Broken;

    impl Rasterizer for Broken {
        fn backend(&self) -> Backend {
            Backend::Vector
        }

        fn render(&self, _svg: &str, _size: u32) -> Result<RgbaImage, LogoError> {
            Err(LogoError::Markup("bad".to_string()))
        }
    }

    struct Solid;

    impl Rasterizer for Solid {
        fn backend(&self) -> Backend {
            Backend::Fallback
        }

        fn render(&self, _svg: &str, size: u32) -> Result<RgbaImage, LogoError> {
            Ok(RgbaImage::new(size, size))
        }
    }

    #[test]
    fn test_empty_chain_has_no_rasterizer() {
        let err = RasterChain::empty().render("", 16).unwrap_err();
        assert!(matches!(err, LogoError::NoRasterizer));
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_absent_backend_is_skipped() {
        let chain = RasterChain::empty()
            .with(Absent(Backend::Vector))
            .with(Solid);
        let rendered = chain.render("", 32).unwrap();
        assert_eq!(rendered.backend, Backend::Fallback);
        assert_eq!(rendered.image.dimensions(), (32, 32));
    }

    #[test]
    fn test_only_absent_backends() {
        let chain = RasterChain::empty()
            .with(Absent(Backend::Vector))
            .with(Absent(Backend::Fallback));
        assert!(matches!(
            chain.render("", 16).unwrap_err(),
            LogoError::NoRasterizer
        ));
    }

    /// Records every log line so tests can check levels
    struct Capture(std::sync::Mutex<Vec<(log::Level, String)>>);

    impl log::Log for Capture {
        fn enabled(&self, _metadata: &log::Metadata) -> bool {
            true
        }

        fn log(&self, record: &log::Record) {
            if let Ok(mut lines) = self.0.lock() {
                lines.push((record.level(), record.args().to_string()));
            }
        }

        fn flush(&self) {}
    }

    static CAPTURE: Capture = Capture(std::sync::Mutex::new(Vec::new()));

    #[test]
    fn test_no_rasterizer_logged_at_error_level() {
        let _ = log::set_logger(&CAPTURE);
        log::set_max_level(log::LevelFilter::Trace);

        let chain = RasterChain::empty().with(Absent(Backend::Vector));
        assert!(chain.render("", 17).is_err());

        let lines = CAPTURE.0.lock().unwrap();
        assert!(
            lines
                .iter()
                .any(|(level, msg)| *level == log::Level::Error && msg.contains("17px")),
            "{:?}",
            *lines
        );
    }

    #[test]
    fn test_markup_failure_falls_through() {
        let chain = RasterChain::empty().with(Broken).with(Solid);
        assert_eq!(chain.render("", 16).unwrap().backend, Backend::Fallback);
    }

    #[test]
    fn test_markup_failure_reported_when_last() {
        let chain = RasterChain::empty().with(Broken);
        assert!(matches!(
            chain.render("", 16).unwrap_err(),
            LogoError::Markup(_)
        ));
    }

    #[test]
    fn test_zero_size() {
        let chain = RasterChain::empty().with(Solid);
        assert!(matches!(
            chain.render("", 0).unwrap_err(),
            LogoError::InvalidSize(0)
        ));
    }

    #[test]
    fn test_detect_order() {
        let backends = RasterChain::detect().backends();
        let mut expected = Vec::new();
        if cfg!(feature = "svg-render") {
            expected.push(Backend::Vector);
        }
        if cfg!(feature = "draw") {
            expected.push(Backend::Fallback);
        }
        assert_eq!(backends, expected);
    }

    #[test]
    fn test_backend_display() {
        assert_eq!(Backend::Vector.to_string(), "vector");
        assert_eq!(Backend::Fallback.to_string(), "fallback");
    }
}
