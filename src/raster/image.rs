use crate::foundation::{
    core::{Pixel, Rgb},
    error::{GlyphStackError, GlyphStackResult},
};

/// An immutable, decoded source raster: a row-major RGB grid plus the
/// designated background color.
///
/// By convention the background is the pixel at the origin, which is what
/// every source asset in practice encodes (sprite sheets on a solid
/// backdrop). Use [`RasterImage::with_background`] when the convention does
/// not hold. The core never parses a bitmap container itself; decode with
/// the `image` crate (or anything else) and hand the grid over.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct RasterImage {
    width: u32,
    height: u32,
    pixels: Vec<Rgb>,
    background: Rgb,
}

impl RasterImage {
    /// Builds an image from a row-major pixel grid. The background color is
    /// taken from the origin pixel.
    pub fn new(width: u32, height: u32, pixels: Vec<Rgb>) -> GlyphStackResult<Self> {
        if width == 0 || height == 0 {
            return Err(GlyphStackError::input(format!(
                "raster dimensions must be positive, got {width}x{height}"
            )));
        }
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(GlyphStackError::input(format!(
                "raster pixel count {} does not match {width}x{height} = {expected}",
                pixels.len()
            )));
        }
        let background = pixels[0];
        Ok(Self {
            width,
            height,
            pixels,
            background,
        })
    }

    /// Same as [`RasterImage::new`] but with an explicit background color.
    pub fn with_background(
        width: u32,
        height: u32,
        pixels: Vec<Rgb>,
        background: Rgb,
    ) -> GlyphStackResult<Self> {
        let mut img = Self::new(width, height, pixels)?;
        img.background = background;
        Ok(img)
    }

    /// Converts an already-decoded `image` crate buffer.
    pub fn from_rgb8(src: &image::RgbImage) -> GlyphStackResult<Self> {
        let pixels = src
            .pixels()
            .map(|p| Rgb::new(p.0[0], p.0[1], p.0[2]))
            .collect();
        Self::new(src.width(), src.height(), pixels)
    }

    /// Image width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The designated background color; pixels of this color are invisible.
    pub fn background(&self) -> Rgb {
        self.background
    }

    /// Color at `(x, y)`. Panics on out-of-bounds coordinates; callers only
    /// ever iterate coordinates produced from this image's own extent.
    pub fn get(&self, x: u32, y: u32) -> Rgb {
        assert!(x < self.width && y < self.height, "pixel out of bounds");
        self.pixels[y as usize * self.width as usize + x as usize]
    }

    /// All non-background pixels with their colors, in scan order
    /// (row-major, top row first).
    pub fn visible_pixels(&self) -> impl Iterator<Item = (Pixel, Rgb)> + '_ {
        (0..self.height).flat_map(move |y| {
            (0..self.width).filter_map(move |x| {
                let rgb = self.get(x, y);
                (rgb != self.background).then_some((Pixel::new(x, y), rgb))
            })
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/image.rs"]
mod tests;
