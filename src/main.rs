use anyhow::Context;
use clap::{Parser, ValueEnum};
use inquirer_logo::{
    Backend, DEFAULT_NAME, DEFAULT_SIZE, GenerateOptions, MANUAL_CONVERSION_HINT, RasterChain,
    generate, project_assets_dir,
};
use std::path::PathBuf;

/// Generate the Activity Inquirer logo as SVG and PNG icons
#[derive(Parser)]
#[command(name = "generate-logo")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Directory receiving the assets (created when missing) [default: <project>/assets]
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Base file name of the assets
    #[arg(short, long, default_value = DEFAULT_NAME)]
    name: String,

    /// Icon sizes in pixels
    #[arg(
        short,
        long,
        value_delimiter = ',',
        default_value = "16,32,48,64,128,256",
        value_parser = clap::value_parser!(u32).range(1..=4096)
    )]
    sizes: Vec<u32>,

    /// Pixel size of the unsized PNG
    #[arg(long, default_value_t = DEFAULT_SIZE, value_parser = clap::value_parser!(u32).range(1..=4096))]
    default_size: u32,

    /// Rasterization backend
    #[arg(short, long, value_enum, default_value = "auto")]
    backend: BackendChoice,

    /// Only write the SVG
    #[arg(long)]
    svg_only: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum BackendChoice {
    /// SVG renderer, falling back to the built-in drawer
    Auto,
    /// SVG renderer only
    Vector,
    /// Built-in drawer only
    Fallback,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let chain = match cli.backend {
        BackendChoice::Auto => RasterChain::detect(),
        BackendChoice::Vector => RasterChain::only(Backend::Vector)?,
        BackendChoice::Fallback => RasterChain::only(Backend::Fallback)?,
    };
    log::debug!("raster backends: {:?}", chain.backends());

    let options = GenerateOptions {
        output_dir: cli.output_dir.unwrap_or_else(project_assets_dir),
        name: cli.name,
        sizes: cli.sizes,
        default_size: cli.default_size,
        svg_only: cli.svg_only,
    };

    let report = generate(&options, &chain).with_context(|| {
        format!(
            "Error generating assets in '{}'",
            options.output_dir.display()
        )
    })?;

    for artifact in &report.artifacts {
        if artifact.is_written() {
            println!("{}", artifact);
        } else {
            eprintln!("{}", artifact);
        }
    }

    if report.needs_manual_conversion() {
        eprintln!("{}", MANUAL_CONVERSION_HINT);
    }

    Ok(())
}
