//! Error types for appiconset-gen

use std::fmt;
use std::io;
use std::process::ExitStatus;

/// Main error type for icon generation
#[derive(Debug)]
pub enum IconGenError {
    /// No usable SVG renderer was found on the search path
    Conversion(String),

    /// The renderer ran but exited unsuccessfully
    RenderFailed {
        program: String,
        size_px: u32,
        status: ExitStatus,
    },

    /// The renderer process could not be started
    Spawn { program: String, source: io::Error },

    /// Spec table and generated filenames differ in length
    LengthMismatch { specs: usize, filenames: usize },

    /// Background color is not a valid CSS color
    InvalidColor(String),

    /// IO error
    Io(io::Error),

    /// JSON serialization error
    Json(serde_json::Error),
}

impl fmt::Display for IconGenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IconGenError::Conversion(msg) => write!(f, "{msg}"),
            IconGenError::RenderFailed {
                program,
                size_px,
                status,
            } => write!(
                f,
                "{program} failed while rendering {size_px}x{size_px} ({status})"
            ),
            IconGenError::Spawn { program, .. } => write!(f, "Failed to run {program}"),
            IconGenError::LengthMismatch { specs, filenames } => write!(
                f,
                "Length mismatch: {specs} icon specs but {filenames} filenames"
            ),
            IconGenError::InvalidColor(color) => {
                write!(f, "Invalid background color: {color}")
            }
            IconGenError::Io(err) => write!(f, "IO error: {err}"),
            IconGenError::Json(err) => write!(f, "JSON error: {err}"),
        }
    }
}

impl std::error::Error for IconGenError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IconGenError::Spawn { source, .. } => Some(source),
            IconGenError::Io(err) => Some(err),
            IconGenError::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for IconGenError {
    fn from(err: io::Error) -> Self {
        IconGenError::Io(err)
    }
}

impl From<serde_json::Error> for IconGenError {
    fn from(err: serde_json::Error) -> Self {
        IconGenError::Json(err)
    }
}

/// Result type alias for icon generation
pub type Result<T> = std::result::Result<T, IconGenError>;
