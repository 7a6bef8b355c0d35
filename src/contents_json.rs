//! Contents.json data model for an AppIcon.appiconset
//!
//! Mirrors the subset of Apple's asset catalog schema that Xcode itself writes
//! for app icons: one entry per variant plus the `info` block.

use crate::error::{IconGenError, Result};
use crate::icon_spec::{IconSpec, Idiom};
use serde::Serialize;
use std::path::Path;

/// Name of the manifest inside the asset set directory
pub const CONTENTS_FILE_NAME: &str = "Contents.json";

/// Root structure of a Contents.json file
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ContentsFile {
    /// One entry per icon variant, in table order
    pub images: Vec<ImageEntry>,

    /// Versioning and authorship information
    pub info: Info,
}

/// Individual image entry within the asset set
///
/// Field order is the order keys appear in the written JSON.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ImageEntry {
    /// The device type for the image ("iphone", "ipad", "ios-marketing")
    pub idiom: Idiom,

    /// The size of the image in points (e.g., "29x29", "83.5x83.5")
    pub size: String,

    /// The scale factor for the image (e.g., "1x", "2x", "3x")
    pub scale: String,

    /// The PNG file inside the asset set directory
    pub filename: String,
}

/// Versioning and authorship information for the asset catalog
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Info {
    /// The format version of the asset catalog
    pub version: u8,

    /// The tool that authored the asset catalog
    pub author: String,
}

impl Default for Info {
    /// Same info block Xcode writes, so the catalog diffs cleanly after
    /// being opened in Xcode
    fn default() -> Self {
        Self {
            version: 1,
            author: "xcode".to_string(),
        }
    }
}

impl ImageEntry {
    /// Creates the entry describing `spec`, stored as `filename`
    pub fn from_spec(spec: &IconSpec, filename: String) -> Self {
        Self {
            idiom: spec.idiom,
            size: spec.size_string(),
            scale: spec.scale_string(),
            filename,
        }
    }
}

/// Pairs specs with their generated filenames, position by position
///
/// # Errors
/// Returns [`IconGenError::LengthMismatch`] when the two slices differ in length.
pub fn build_contents_json(specs: &[IconSpec], filenames: &[String]) -> Result<ContentsFile> {
    if specs.len() != filenames.len() {
        return Err(IconGenError::LengthMismatch {
            specs: specs.len(),
            filenames: filenames.len(),
        });
    }

    let images = specs
        .iter()
        .zip(filenames)
        .map(|(spec, filename)| ImageEntry::from_spec(spec, filename.clone()))
        .collect();

    Ok(ContentsFile {
        images,
        info: Info::default(),
    })
}

/// Writes `contents` to `dir/Contents.json` with 2-space indentation,
/// replacing any existing file
pub fn write_contents_json(dir: &Path, contents: &ContentsFile) -> Result<()> {
    let json = serde_json::to_string_pretty(contents)?;
    std::fs::write(dir.join(CONTENTS_FILE_NAME), json)?;
    Ok(())
}
