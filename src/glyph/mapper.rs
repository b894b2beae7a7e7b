use kurbo::Rect;

use crate::foundation::error::{GlyphStackError, GlyphStackResult};

/// Pure raster-to-font-unit coordinate transform.
///
/// Maps a pixel coordinate to the axis-aligned font-unit square it covers:
///
/// ```text
/// left   = x * scale_factor + x_offset
/// right  = left + scale_factor
/// bottom = (image_height - 1 - y) * scale_factor + y_offset
/// top    = bottom + scale_factor
/// ```
///
/// The vertical flip is mandatory: raster rows grow downward from the top,
/// font space grows upward from the baseline.
///
/// Exactly one mapper is constructed per composite glyph and the same
/// instance is shared by every layer build and the metrics computation.
/// That sharing is what keeps all layers of one composite in the same
/// coordinate system; per-layer "compensation" offsets, spacer pixels and
/// coordinate snapping are the bug class this rules out.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CoordinateMapper {
    scale_factor: f64,
    x_offset: f64,
    y_offset: f64,
    image_height: u32,
}

impl CoordinateMapper {
    /// Validates the transform parameters; scale and height must be
    /// positive.
    pub fn new(
        scale_factor: f64,
        x_offset: f64,
        y_offset: f64,
        image_height: u32,
    ) -> GlyphStackResult<Self> {
        if !(scale_factor > 0.0) {
            return Err(GlyphStackError::input(format!(
                "scale factor must be > 0, got {scale_factor}"
            )));
        }
        if image_height == 0 {
            return Err(GlyphStackError::input("image height must be > 0"));
        }
        Ok(Self {
            scale_factor,
            x_offset,
            y_offset,
            image_height,
        })
    }

    /// Font-unit rectangle covered by the pixel at `(x, y)`. Pure and
    /// stateless: identical inputs give byte-identical rectangles.
    ///
    /// `y` must be within the image height the mapper was built with;
    /// rows outside it have no defined flipped coordinate.
    pub fn map(&self, x: u32, y: u32) -> Rect {
        let left = f64::from(x) * self.scale_factor + self.x_offset;
        let bottom = f64::from(self.flip_y(y)) * self.scale_factor + self.y_offset;
        Rect::new(left, bottom, left + self.scale_factor, bottom + self.scale_factor)
    }

    /// Raster row `y` expressed in bottom-up rows. `y` must be within the
    /// image height.
    pub fn flip_y(&self, y: u32) -> u32 {
        debug_assert!(
            y < self.image_height,
            "row {y} outside image height {}",
            self.image_height
        );
        self.image_height - 1 - y
    }

    /// Font units per pixel.
    pub fn scale_factor(&self) -> f64 {
        self.scale_factor
    }

    /// Horizontal font-unit offset.
    pub fn x_offset(&self) -> f64 {
        self.x_offset
    }

    /// Vertical font-unit offset.
    pub fn y_offset(&self) -> f64 {
        self.y_offset
    }

    /// Height of the raster this mapper flips against.
    pub fn image_height(&self) -> u32 {
        self.image_height
    }
}

#[cfg(test)]
#[path = "../../tests/unit/glyph/mapper.rs"]
mod tests;
