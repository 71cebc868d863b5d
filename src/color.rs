use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use palette::{Hsl, IntoColor, Srgb};
use serde::{Serialize, Serializer};

// ---------------------------------------------------------------------------
// Rgb – renderer-facing color value
// ---------------------------------------------------------------------------

/// An sRGB color carried in chart descriptions. Serializes as a `#rrggbb`
/// hex string, the form charting collaborators take verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Fallback for categories missing from a color map.
    pub const GRAY: Rgb = Rgb {
        r: 128,
        g: 128,
        b: 128,
    };

    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex())
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.hex())
    }
}

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colors using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Rgb> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Rgb {
                r: (rgb.red * 255.0) as u8,
                g: (rgb.green * 255.0) as u8,
                b: (rgb.blue * 255.0) as u8,
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Color mapping: booster category → Rgb
// ---------------------------------------------------------------------------

/// Maps the dataset's booster version categories to distinct colors.
///
/// Built once per dataset from the sorted category set, so a category keeps
/// its color no matter which records the current filters let through.
#[derive(Debug, Clone)]
pub struct CategoryColors {
    mapping: BTreeMap<String, Rgb>,
    default_color: Rgb,
}

impl CategoryColors {
    /// Build the color map from the dataset's distinct categories.
    pub fn new(categories: &BTreeSet<String>) -> Self {
        let palette = generate_palette(categories.len());
        let mapping: BTreeMap<String, Rgb> = categories
            .iter()
            .zip(palette)
            .map(|(cat, color)| (cat.clone(), color))
            .collect();

        CategoryColors {
            mapping,
            default_color: Rgb::GRAY,
        }
    }

    /// Look up the color for a category label.
    pub fn color_for(&self, category: &str) -> Rgb {
        self.mapping
            .get(category)
            .copied()
            .unwrap_or(self.default_color)
    }

    /// Legend entries (category label → color) for the scatter description.
    pub fn legend_entries(&self) -> Vec<(String, Rgb)> {
        self.mapping
            .iter()
            .map(|(cat, color)| (cat.clone(), *color))
            .collect()
    }
}
