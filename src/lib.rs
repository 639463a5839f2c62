//! # inquirer-logo
//!
//! Generates the Activity Inquirer logo: a fixed SVG document plus PNG
//! renderings at several icon sizes.
//!
//! ## Features
//!
//! - **svg-render** (default): rasterize the SVG markup with resvg
//! - **draw** (default): built-in primitive drawer used when the SVG
//!   renderer is not available
//!
//! ## Example
//!
//! ```rust,ignore
//! use inquirer_logo::{GenerateOptions, RasterChain, generate};
//!
//! let report = generate(&GenerateOptions::default(), &RasterChain::detect()).unwrap();
//! assert!(report.is_complete());
//! ```

pub mod error;
pub mod generate;
pub mod raster;
pub mod svg;
pub mod types;

// Re-export commonly used items
pub use error::LogoError;
pub use generate::{
    Artifact, ArtifactKind, ArtifactStatus, DEFAULT_NAME, DEFAULT_SIZES, GenerateOptions,
    MANUAL_CONVERSION_HINT, Report, generate, project_assets_dir,
};
pub use raster::{Backend, DEFAULT_SIZE, RasterChain, Rasterizer, Rendered};
pub use svg::{logo_shapes, logo_svg};
