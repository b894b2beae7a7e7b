//! Glyphstack compiles a small indexed-color raster image into a
//! multi-layer vector glyph set for a color-font layering table: an ordered
//! palette plus stacked monochrome rectangle outlines per visible
//! character (the COLR/CPAL model).
//!
//! # Pipeline overview
//!
//! 1. **Classify**: `RasterImage + ClassifyPolicy -> Classification`
//!    (which visible pixel belongs to which color group)
//! 2. **Build**: one `Glyph` per group, one rectangle contour per pixel,
//!    all through a single shared `CoordinateMapper`
//! 3. **Measure**: `GlyphMetrics` once, from the union of all visible
//!    pixels, reused verbatim by every layer
//! 4. **Stack**: `Palette` + `CompositeGlyph` in the caller's explicit
//!    bottom-to-top order
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **One mapper per composite**: every layer of one composite is built
//!   against the identical `CoordinateMapper` instance, so layers cannot
//!   drift apart in coordinate space.
//! - **Fatal errors only**: a run produces one immutable, fully consistent
//!   result set or fails outright; there is no partial output.
//! - **No file formats**: bitmap decoding and font-container serialization
//!   belong to external collaborators; the boundary types are plain data.
//!
//! A run is a one-shot batch transform: load a [`RasterImage`], describe
//! the variant in a [`CompileConfig`], call [`compile_glyph_set`].
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod classify;
mod compile;
mod foundation;
mod glyph;
mod raster;
mod stack;

pub use classify::classifier::{
    Classification, ColorGroup, OTHER_GROUP_LABEL, classify,
};
pub use classify::policy::{ClassifyPolicy, DistinctOrder, FallbackPolicy, TargetColor};
pub use compile::config::{
    BaseLayer, CompileConfig, CompileConfigBuilder, DEFAULT_SIDE_BEARING, StackingOrder,
};
pub use compile::pipeline::{GlyphSet, compile_glyph_set};
pub use foundation::core::{BezPath, PaletteColor, PaletteIndex, Pixel, Point, Rect, Rgb};
pub use foundation::error::{GlyphStackError, GlyphStackResult};
pub use glyph::builder::{Glyph, build_layer};
pub use glyph::mapper::CoordinateMapper;
pub use glyph::metrics::{GlyphMetrics, compute_metrics};
pub use raster::image::RasterImage;
pub use stack::assemble::{
    AssembledStack, BaseLayerGlyph, BuiltLayer, CompositeGlyph, LayerAssignment, NamedGlyph,
    Palette, assemble_stack,
};
