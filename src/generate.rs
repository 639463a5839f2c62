//! Asset generation: writes the SVG and every PNG variant to the output directory

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::LogoError;
use crate::raster::{Backend, DEFAULT_SIZE, RasterChain};
use crate::svg::logo_svg;

/// Icon sizes produced by default
pub const DEFAULT_SIZES: [u32; 6] = [16, 32, 48, 64, 128, 256];

/// Base file name of the generated assets
pub const DEFAULT_NAME: &str = "activity-inquirer";

/// Printed when the default PNG could not be produced
pub const MANUAL_CONVERSION_HINT: &str =
    "Could not create the PNG; only the SVG was generated.\nYou can convert it manually with an image editor.";

/// `assets/` under the project root, independent of the working directory
pub fn project_assets_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("assets")
}

/// Options for a generation run
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Directory receiving the assets, created when missing
    pub output_dir: PathBuf,
    /// Base name: `<name>.svg`, `<name>.png`, `<name>-<size>.png`
    pub name: String,
    pub sizes: Vec<u32>,
    /// Pixel size of the unsized `<name>.png`
    pub default_size: u32,
    /// Skip rasterization entirely
    pub svg_only: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            output_dir: project_assets_dir(),
            name: DEFAULT_NAME.to_string(),
            sizes: DEFAULT_SIZES.to_vec(),
            default_size: DEFAULT_SIZE,
            svg_only: false,
        }
    }
}

impl GenerateOptions {
    pub fn svg_path(&self) -> PathBuf {
        self.output_dir.join(format!("{}.svg", self.name))
    }

    pub fn png_path(&self, size: Option<u32>) -> PathBuf {
        match size {
            Some(size) => self.output_dir.join(format!("{}-{}.png", self.name, size)),
            None => self.output_dir.join(format!("{}.png", self.name)),
        }
    }
}

/// What kind of file an artifact is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    Svg,
    /// PNG of the given pixel size; `sized` is false for the unsized default file
    Png { size: u32, sized: bool },
}

#[derive(Debug, Clone, PartialEq)]
pub enum ArtifactStatus {
    /// Written; PNGs record the backend that drew them
    Written(Option<Backend>),
    Failed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Artifact {
    pub path: PathBuf,
    pub kind: ArtifactKind,
    pub status: ArtifactStatus,
}

impl Artifact {
    pub fn is_written(&self) -> bool {
        matches!(self.status, ArtifactStatus::Written(_))
    }
}

/// One human-readable status line
impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = self.path.display();
        match (&self.status, self.kind) {
            (ArtifactStatus::Failed(reason), _) => write!(f, "Failed {}: {}", path, reason),
            (ArtifactStatus::Written(_), ArtifactKind::Svg) => write!(f, "Created {} (svg)", path),
            (ArtifactStatus::Written(backend), ArtifactKind::Png { size, .. }) => {
                write!(f, "Created {} ({}x{}", path, size, size)?;
                if let Some(backend) = backend {
                    write!(f, ", {}", backend)?;
                }
                write!(f, ")")
            }
        }
    }
}

/// Outcome of a generation run, one entry per file in the order attempted
#[derive(Debug, Clone, Default)]
pub struct Report {
    pub artifacts: Vec<Artifact>,
}

impl Report {
    pub fn failures(&self) -> impl Iterator<Item = &Artifact> {
        self.artifacts.iter().filter(|a| !a.is_written())
    }

    pub fn is_complete(&self) -> bool {
        self.failures().next().is_none()
    }

    /// True when the SVG was written but no PNG was
    pub fn svg_only(&self) -> bool {
        self.artifacts
            .iter()
            .filter(|a| a.is_written())
            .all(|a| a.kind == ArtifactKind::Svg)
    }

    /// True when the unsized default PNG was attempted and failed
    pub fn needs_manual_conversion(&self) -> bool {
        self.artifacts.iter().any(|a| {
            matches!(a.kind, ArtifactKind::Png { sized: false, .. }) && !a.is_written()
        })
    }
}

fn write_svg(path: &Path, svg: &str) -> Result<(), LogoError> {
    fs::write(path, svg).map_err(|e| LogoError::io(path, e))?;
    log::debug!("wrote {}", path.display());
    Ok(())
}

/// Generate every asset described by `options`
///
/// Missing rasterization capability is recorded per file and never aborts
/// the run; filesystem and encoding errors do.
pub fn generate(options: &GenerateOptions, chain: &RasterChain) -> Result<Report, LogoError> {
    fs::create_dir_all(&options.output_dir).map_err(|e| LogoError::io(&options.output_dir, e))?;

    let mut report = Report::default();

    let svg = logo_svg();
    let svg_path = options.svg_path();
    write_svg(&svg_path, &svg)?;
    report.artifacts.push(Artifact {
        path: svg_path,
        kind: ArtifactKind::Svg,
        status: ArtifactStatus::Written(None),
    });

    if options.svg_only {
        return Ok(report);
    }

    let targets = std::iter::once((options.default_size, false))
        .chain(options.sizes.iter().map(|&size| (size, true)));

    for (size, sized) in targets {
        let path = options.png_path(sized.then_some(size));
        let status = match chain.write_png(&svg, &path, size) {
            Ok(backend) => {
                log::debug!("{}x{} drawn by {} backend", size, size, backend);
                ArtifactStatus::Written(Some(backend))
            }
            Err(e) if e.is_recoverable() || matches!(e, LogoError::InvalidSize(_)) => {
                log::debug!("could not create {}: {}", path.display(), e);
                ArtifactStatus::Failed(e.to_string())
            }
            Err(e) => return Err(e),
        };

        report.artifacts.push(Artifact {
            path,
            kind: ArtifactKind::Png { size, sized },
            status,
        });
    }

    Ok(report)
}
