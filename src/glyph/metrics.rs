use kurbo::Rect;

use crate::{foundation::core::Pixel, glyph::mapper::CoordinateMapper};

/// Shared horizontal metrics for one composite glyph: the advance width and
/// the font-unit bounding box of the union of all visible pixels.
///
/// Computed exactly once per raster and reused verbatim by every layer
/// glyph and the composite. Recomputing per layer is how advance widths
/// drift between layers, so the pipeline never does it.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GlyphMetrics {
    /// Horizontal cursor advance in font units.
    pub advance_width: f64,
    /// Font-unit bounding box of the visible pixel union.
    pub bounds: Rect,
}

/// Computes metrics from the union of all visible pixels through the same
/// mapper the layers are built with.
///
/// `advance = (max_x - min_x + 2) * scale + 2 * side_bearing`: the pixel
/// span, one extra pixel of slack, and a bearing on each side.
///
/// An empty union is degenerate but valid (a fully transparent glyph, not
/// an error): the bounds fall back to the whole scaled image extent at the
/// configured offsets and the advance to `image_width * scale +
/// 2 * side_bearing`.
pub fn compute_metrics(
    visible: &[Pixel],
    mapper: &CoordinateMapper,
    image_width: u32,
    side_bearing: f64,
) -> GlyphMetrics {
    let scale = mapper.scale_factor();

    if visible.is_empty() {
        let left = mapper.x_offset();
        let bottom = mapper.y_offset();
        let w = f64::from(image_width) * scale;
        let h = f64::from(mapper.image_height()) * scale;
        return GlyphMetrics {
            advance_width: w + 2.0 * side_bearing,
            bounds: Rect::new(left, bottom, left + w, bottom + h),
        };
    }

    let mut min_x = u32::MAX;
    let mut max_x = 0u32;
    let mut min_y = u32::MAX;
    let mut max_y = 0u32;
    for p in visible {
        min_x = min_x.min(p.x);
        max_x = max_x.max(p.x);
        min_y = min_y.min(p.y);
        max_y = max_y.max(p.y);
    }

    // Raster min_y is the topmost row, which flips to the highest font row.
    let left = f64::from(min_x) * scale + mapper.x_offset();
    let right = f64::from(max_x + 1) * scale + mapper.x_offset();
    let bottom = f64::from(mapper.flip_y(max_y)) * scale + mapper.y_offset();
    let top = f64::from(mapper.flip_y(min_y) + 1) * scale + mapper.y_offset();

    GlyphMetrics {
        advance_width: f64::from(max_x - min_x + 2) * scale + 2.0 * side_bearing,
        bounds: Rect::new(left, bottom, right, top),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/glyph/metrics.rs"]
mod tests;
