use crate::foundation::error::{GlyphStackError, GlyphStackResult};

pub use kurbo::{BezPath, Point, Rect};

/// An opaque 8-bit RGB color as found in the source raster.
///
/// Ordering is lexicographic `(r, g, b)`, which is what gives the
/// ascending-RGB classification order its total, deterministic key.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Packs three 8-bit channels into a color.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "RGB({}, {}, {})", self.r, self.g, self.b)
    }
}

/// A raster-space pixel coordinate: `0 <= x < width`, `0 <= y < height`,
/// with y growing downward from the top row.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Pixel {
    /// Column, 0 at the left edge.
    pub x: u32,
    /// Row, 0 at the top edge.
    pub y: u32,
}

impl Pixel {
    /// Packs a raster coordinate.
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// A normalized RGBA palette entry (each channel in `[0, 1]`).
///
/// Alpha is always 1.0 in this design: layers paint over each other fully
/// opaque, and no blending is modeled.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PaletteColor {
    /// Red channel, normalized.
    pub r: f32,
    /// Green channel, normalized.
    pub g: f32,
    /// Blue channel, normalized.
    pub b: f32,
    /// Alpha channel; always 1.0 here.
    pub a: f32,
}

impl PaletteColor {
    /// Normalizes an 8-bit source color into an opaque palette entry.
    pub fn opaque(rgb: Rgb) -> Self {
        Self {
            r: f32::from(rgb.r) / 255.0,
            g: f32::from(rgb.g) / 255.0,
            b: f32::from(rgb.b) / 255.0,
            a: 1.0,
        }
    }
}

/// A stable, 0-based palette index. Index identity is never reassigned
/// after the palette is created.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct PaletteIndex(pub u16);

impl PaletteIndex {
    /// The index widened for slice access.
    pub fn as_usize(self) -> usize {
        usize::from(self.0)
    }
}

impl std::fmt::Display for PaletteIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validates that a name is usable as a glyph name.
///
/// The font-assembly collaborator feeds these straight into a glyph-order
/// table, so empty or whitespace-only names are rejected up front.
pub(crate) fn validate_glyph_name(name: &str) -> GlyphStackResult<()> {
    if name.trim().is_empty() {
        return Err(GlyphStackError::input("glyph name must be non-empty"));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
