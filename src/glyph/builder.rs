use kurbo::{BezPath, Rect};

use crate::{foundation::core::Pixel, glyph::mapper::CoordinateMapper};

/// One monochrome layer outline: an ordered list of closed rectangle
/// contours plus the advance width shared by every layer of the composite.
/// Immutable once built.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Glyph {
    /// Closed rectangle contours, in build order.
    pub contours: Vec<Rect>,
    /// Advance width in font units, shared across the composite.
    pub advance_width: f64,
}

impl Glyph {
    /// A glyph with zero contours: valid, draws nothing. This is what an
    /// empty color group builds into.
    pub fn empty(advance_width: f64) -> Self {
        Self {
            contours: Vec::new(),
            advance_width,
        }
    }

    /// Whether the glyph draws nothing.
    pub fn is_empty(&self) -> bool {
        self.contours.is_empty()
    }

    /// Renders the contour list as closed subpaths, one
    /// move/line/line/line/close sequence per rectangle. This is the pen
    /// sequence the font-assembly collaborator replays into its outline
    /// table.
    pub fn to_bez_path(&self) -> BezPath {
        let mut path = BezPath::new();
        for r in &self.contours {
            path.move_to((r.x0, r.y0));
            path.line_to((r.x1, r.y0));
            path.line_to((r.x1, r.y1));
            path.line_to((r.x0, r.y1));
            path.close_path();
        }
        path
    }
}

/// Builds one layer glyph from a color group's pixel list, one rectangle
/// per pixel in the group's scan order, all through the shared mapper.
///
/// No merging of adjacent or overlapping rectangles happens here: under a
/// nonzero winding fill, same-orientation axis-aligned rectangles union
/// correctly as-is, so simplification would only ever be a size
/// optimization.
pub fn build_layer(pixels: &[Pixel], mapper: &CoordinateMapper, advance_width: f64) -> Glyph {
    let contours = pixels.iter().map(|p| mapper.map(p.x, p.y)).collect();
    Glyph {
        contours,
        advance_width,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/glyph/builder.rs"]
mod tests;
