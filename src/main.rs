use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

mod contents_json;
mod error;
mod icon_gen;
mod icon_spec;
mod renderer;

use icon_gen::GenerateOptions;
use renderer::{RendererKind, DEFAULT_BACKGROUND};

/// Source SVG, relative to the project root
const DEFAULT_SVG_PATH: &str = "Design/AppIcon.svg";

/// Asset set directory, relative to the project root. Projects whose asset
/// catalog sits inside an app target folder pass `--output` instead.
const DEFAULT_APPICONSET_PATH: &str = "Assets.xcassets/AppIcon.appiconset";

#[derive(Debug, Parser)]
#[clap(
    name = "appiconset-gen",
    about = "Render an iOS AppIcon.appiconset (PNGs + Contents.json) from one SVG"
)]
struct Args {
    /// Project root the default input and output paths are resolved against.
    #[clap(long, value_name = "DIR", default_value = ".")]
    project_root: PathBuf,

    /// Source SVG. Defaults to <PROJECT_ROOT>/Design/AppIcon.svg.
    #[clap(short, long, value_name = "SVG")]
    input: Option<PathBuf>,

    /// Output asset set directory. Defaults to
    /// <PROJECT_ROOT>/Assets.xcassets/AppIcon.appiconset.
    #[clap(short, long, value_name = "DIR")]
    output: Option<PathBuf>,

    /// Use this renderer instead of probing rsvg-convert, then inkscape.
    #[clap(long, value_enum, value_name = "RENDERER")]
    renderer: Option<RendererKind>,

    /// Opaque background behind the icon (CSS color format)
    #[clap(long, value_name = "COLOR", default_value = DEFAULT_BACKGROUND)]
    background: String,

    /// Log resolved renderer paths and full command lines
    #[clap(short, long)]
    verbose: bool,
}

impl Args {
    fn svg_path(&self) -> PathBuf {
        self.input
            .clone()
            .unwrap_or_else(|| self.project_root.join(DEFAULT_SVG_PATH))
    }

    fn appiconset_dir(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| self.project_root.join(DEFAULT_APPICONSET_PATH))
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logger(args.verbose);

    let options = GenerateOptions {
        svg_path: args.svg_path(),
        appiconset_dir: args.appiconset_dir(),
        renderer: args.renderer,
        background: args.background,
    };

    icon_gen::generate_icons(&options).with_context(|| {
        format!(
            "Failed to generate {} from {}",
            options.appiconset_dir.display(),
            options.svg_path.display()
        )
    })?;

    Ok(())
}

fn init_logger(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };

    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .init();
}
