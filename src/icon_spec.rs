//! The fixed table of icon variants an iOS AppIcon.appiconset needs.

use serde::{Serialize, Serializer};
use std::fmt;

/// Device class an icon variant targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Idiom {
    Iphone,
    Ipad,
    IosMarketing,
}

impl Idiom {
    /// Asset catalog tag, as written in Contents.json
    pub fn as_str(self) -> &'static str {
        match self {
            Idiom::Iphone => "iphone",
            Idiom::Ipad => "ipad",
            Idiom::IosMarketing => "ios-marketing",
        }
    }
}

impl Serialize for Idiom {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl fmt::Display for Idiom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One required icon variant: a logical point size at a display scale
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IconSpec {
    /// Logical size in points (83.5 is the only fractional one)
    pub size_pt: f64,
    /// Display density multiplier (1x, 2x, 3x)
    pub scale: u32,
    pub idiom: Idiom,
}

impl IconSpec {
    const fn new(size_pt: f64, scale: u32, idiom: Idiom) -> Self {
        Self {
            size_pt,
            scale,
            idiom,
        }
    }

    /// Physical edge length in pixels, `round(size_pt * scale)`
    pub fn pixel_size(&self) -> u32 {
        (self.size_pt * f64::from(self.scale)).round() as u32
    }

    /// Output filename keyed by pixel size, e.g. `icon_120x120.png`
    pub fn filename(&self) -> String {
        let px = self.pixel_size();
        format!("icon_{px}x{px}.png")
    }

    /// Point size as written in Contents.json, e.g. `20x20` or `83.5x83.5`
    pub fn size_string(&self) -> String {
        // f64 Display drops the fraction for whole numbers
        format!("{0}x{0}", self.size_pt)
    }

    /// Scale as written in Contents.json, e.g. `2x`
    pub fn scale_string(&self) -> String {
        format!("{}x", self.scale)
    }
}

/// Every variant required for an iPhone/iPad app, in Contents.json order
pub static ICON_SPECS: [IconSpec; 18] = [
    // iPhone
    IconSpec::new(20.0, 2, Idiom::Iphone),
    IconSpec::new(20.0, 3, Idiom::Iphone),
    IconSpec::new(29.0, 2, Idiom::Iphone),
    IconSpec::new(29.0, 3, Idiom::Iphone),
    IconSpec::new(40.0, 2, Idiom::Iphone),
    IconSpec::new(40.0, 3, Idiom::Iphone),
    IconSpec::new(60.0, 2, Idiom::Iphone),
    IconSpec::new(60.0, 3, Idiom::Iphone),
    // iPad
    IconSpec::new(20.0, 1, Idiom::Ipad),
    IconSpec::new(20.0, 2, Idiom::Ipad),
    IconSpec::new(29.0, 1, Idiom::Ipad),
    IconSpec::new(29.0, 2, Idiom::Ipad),
    IconSpec::new(40.0, 1, Idiom::Ipad),
    IconSpec::new(40.0, 2, Idiom::Ipad),
    IconSpec::new(76.0, 1, Idiom::Ipad),
    IconSpec::new(76.0, 2, Idiom::Ipad),
    IconSpec::new(83.5, 2, Idiom::Ipad),
    // App Store
    IconSpec::new(1024.0, 1, Idiom::IosMarketing),
];
