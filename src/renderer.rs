//! Locating an external SVG rasterizer and running it for one icon size.

use crate::error::{IconGenError, Result};
use log::{debug, warn};
use std::env;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use std::process::Command;
use std::str::FromStr;

/// Default background painted behind the SVG
pub const DEFAULT_BACKGROUND: &str = "white";

/// The command-line renderers this tool knows how to drive
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum RendererKind {
    /// librsvg's `rsvg-convert`
    #[value(name = "rsvg-convert")]
    RsvgConvert,
    /// Inkscape 1.x command-line export
    #[value(name = "inkscape")]
    Inkscape,
}

impl RendererKind {
    /// Probe order when no renderer is requested explicitly
    pub const PREFERENCE: [RendererKind; 2] = [RendererKind::RsvgConvert, RendererKind::Inkscape];

    /// Executable name looked up on the search path
    pub fn program(self) -> &'static str {
        match self {
            RendererKind::RsvgConvert => "rsvg-convert",
            RendererKind::Inkscape => "inkscape",
        }
    }
}

/// A renderer found on this machine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Renderer {
    pub kind: RendererKind,
    /// Resolved executable, run as-is for every variant
    pub path: PathBuf,
}

/// Finds a renderer on `PATH`
///
/// With `requested` set only that renderer is considered, otherwise
/// `rsvg-convert` wins over `inkscape`.
pub fn find_renderer(requested: Option<RendererKind>) -> Result<Renderer> {
    let search_path = env::var_os("PATH");
    find_renderer_in(search_path.as_deref(), requested)
}

/// Same as [`find_renderer`] but probes the given search path
pub fn find_renderer_in(
    search_path: Option<&OsStr>,
    requested: Option<RendererKind>,
) -> Result<Renderer> {
    let cwd = env::current_dir()?;
    let candidates: &[RendererKind] = match &requested {
        Some(kind) => std::slice::from_ref(kind),
        None => &RendererKind::PREFERENCE,
    };

    for &kind in candidates {
        if let Ok(path) = which::which_in(kind.program(), search_path, &cwd) {
            debug!(
                "🔍 Resolved renderer '{}' to '{}'",
                kind.program(),
                path.display()
            );
            return Ok(Renderer { kind, path });
        }
    }

    let msg = match requested {
        Some(kind) => format!(
            "Renderer '{}' not found. Install it or omit --renderer to fall back to 'librsvg' (rsvg-convert) or 'inkscape'.",
            kind.program()
        ),
        None => "No renderer found. Install either 'librsvg' (rsvg-convert) or 'inkscape'."
            .to_string(),
    };
    Err(IconGenError::Conversion(msg))
}

/// Checks that `color` is a fully opaque CSS color
///
/// Small variants must not bleed alpha, so `transparent` and any color with
/// an alpha component below 1 are rejected.
pub fn validate_background(color: &str) -> Result<()> {
    match css_color::Srgb::from_str(color) {
        Ok(srgb) if srgb.alpha >= 1.0 => Ok(()),
        _ => Err(IconGenError::InvalidColor(color.to_string())),
    }
}

/// Command-line arguments asking `kind` for a `size_px` square PNG on an
/// opaque `background`
pub fn render_args(
    kind: RendererKind,
    svg_path: &Path,
    size_px: u32,
    out_path: &Path,
    background: &str,
) -> Vec<OsString> {
    let size = size_px.to_string();

    match kind {
        RendererKind::RsvgConvert => vec![
            "-w".into(),
            size.clone().into(),
            "-h".into(),
            size.into(),
            format!("--background-color={background}").into(),
            "-o".into(),
            out_path.into(),
            svg_path.into(),
        ],
        RendererKind::Inkscape => {
            let mut export_filename = OsString::from("--export-filename=");
            export_filename.push(out_path);

            vec![
                svg_path.into(),
                export_filename,
                format!("--export-width={size}").into(),
                format!("--export-height={size}").into(),
                format!("--export-background={background}").into(),
                "--export-background-opacity=1.0".into(),
            ]
        }
    }
}

/// Renders `svg_path` to a `size_px`×`size_px` PNG at `out_path`
///
/// Blocks until the renderer exits. A non-zero exit is an error; whatever the
/// renderer left at `out_path` stays there.
pub fn render_svg_to_png(
    renderer: &Renderer,
    svg_path: &Path,
    size_px: u32,
    out_path: &Path,
    background: &str,
) -> Result<()> {
    let args = render_args(renderer.kind, svg_path, size_px, out_path, background);
    debug!("Running {} {:?}", renderer.path.display(), args);

    let status = Command::new(&renderer.path)
        .args(&args)
        .status()
        .map_err(|source| IconGenError::Spawn {
            program: renderer.kind.program().to_string(),
            source,
        })?;

    if !status.success() {
        return Err(IconGenError::RenderFailed {
            program: renderer.kind.program().to_string(),
            size_px,
            status,
        });
    }

    check_output_dimensions(out_path, size_px);
    Ok(())
}

/// Reads the PNG header back; a mismatch is reported, never fatal
fn check_output_dimensions(out_path: &Path, size_px: u32) {
    match image::image_dimensions(out_path) {
        Ok((w, h)) if w == size_px && h == size_px => {}
        Ok((w, h)) => warn!(
            "{} is {w}x{h}, expected {size_px}x{size_px}",
            out_path.display()
        ),
        Err(err) => warn!("Could not read back {}: {err}", out_path.display()),
    }
}
