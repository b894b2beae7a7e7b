use std::collections::BTreeMap;

use crate::{
    classify::policy::ClassifyPolicy,
    foundation::{
        core::PaletteIndex,
        error::{GlyphStackError, GlyphStackResult},
    },
};

/// Default side bearing, in font units, added on each side of the tight
/// pixel bounds when computing the advance width.
pub const DEFAULT_SIDE_BEARING: f64 = 50.0;

/// Bottom-to-top stacking order for the composite's layers.
///
/// The order is always the caller's explicit choice; the pipeline never
/// infers one. `Classification` opts into the classification's own
/// deterministic creation order, which is the only workable choice for
/// auto-distinct policies whose labels are not known up front.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub enum StackingOrder {
    /// Stack layers in classification creation order.
    Classification,
    /// Stack exactly these labels, bottom first. Must be a permutation of
    /// the classified layer labels.
    Explicit(Vec<String>),
}

/// Optional layer containing every visible pixel, placed underneath all
/// color layers and painted with an existing palette entry.
#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
pub struct BaseLayer {
    /// Existing palette entry the base layer paints with.
    pub palette_index: PaletteIndex,
}

/// The single parameterized configuration driving one pipeline run.
///
/// Everything the duplicated per-variant scripts used to hard-code lives
/// here: the coordinate transform, the classification policy, the stacking
/// order and the palette bookkeeping.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct CompileConfig {
    /// Name of the composite glyph; layer glyphs are named
    /// `{glyph_name}.{label}`.
    pub glyph_name: String,
    /// Font units per pixel. Must be positive.
    pub scale_factor: f64,
    /// Horizontal font-unit offset applied to every mapped rectangle.
    pub x_offset: f64,
    /// Vertical font-unit offset applied to every mapped rectangle.
    pub y_offset: f64,
    /// Per-side padding folded into the advance width.
    pub side_bearing: f64,
    /// How visible pixels are partitioned into layers.
    pub policy: ClassifyPolicy,
    /// Bottom-to-top composite layer order.
    pub stacking: StackingOrder,
    /// Reassigns a layer label to an existing palette entry; sharing one
    /// entry between layers is legal.
    #[serde(default)]
    pub palette_overrides: BTreeMap<String, PaletteIndex>,
    /// Optional all-pixels layer below everything.
    #[serde(default)]
    pub base_layer: Option<BaseLayer>,
}

impl CompileConfig {
    /// Rejects non-positive scale, non-finite offsets or bearing, empty
    /// glyph names and invalid policies before any work happens.
    pub fn validate(&self) -> GlyphStackResult<()> {
        crate::foundation::core::validate_glyph_name(&self.glyph_name)?;
        if !(self.scale_factor > 0.0) {
            return Err(GlyphStackError::input(format!(
                "scale factor must be > 0, got {}",
                self.scale_factor
            )));
        }
        if !self.side_bearing.is_finite() || self.side_bearing < 0.0 {
            return Err(GlyphStackError::input(format!(
                "side bearing must be finite and >= 0, got {}",
                self.side_bearing
            )));
        }
        if !self.x_offset.is_finite() || !self.y_offset.is_finite() {
            return Err(GlyphStackError::input("offsets must be finite"));
        }
        self.policy.validate()?;
        Ok(())
    }
}

/// Fluent builder for [`CompileConfig`]; `build` validates.
pub struct CompileConfigBuilder {
    glyph_name: String,
    scale_factor: f64,
    x_offset: f64,
    y_offset: f64,
    side_bearing: f64,
    policy: ClassifyPolicy,
    stacking: StackingOrder,
    palette_overrides: BTreeMap<String, PaletteIndex>,
    base_layer: Option<BaseLayer>,
}

impl CompileConfigBuilder {
    /// Starts from the required knobs; everything else gets defaults.
    pub fn new(glyph_name: impl Into<String>, scale_factor: f64, policy: ClassifyPolicy) -> Self {
        Self {
            glyph_name: glyph_name.into(),
            scale_factor,
            x_offset: 0.0,
            y_offset: 0.0,
            side_bearing: DEFAULT_SIDE_BEARING,
            policy,
            stacking: StackingOrder::Classification,
            palette_overrides: BTreeMap::new(),
            base_layer: None,
        }
    }

    /// Font-unit offsets applied to every mapped rectangle.
    pub fn offsets(mut self, x: f64, y: f64) -> Self {
        self.x_offset = x;
        self.y_offset = y;
        self
    }

    /// Per-side advance-width padding in font units.
    pub fn side_bearing(mut self, bearing: f64) -> Self {
        self.side_bearing = bearing;
        self
    }

    /// Bottom-to-top composite layer order.
    pub fn stacking(mut self, stacking: StackingOrder) -> Self {
        self.stacking = stacking;
        self
    }

    /// Points a layer label at an existing palette entry.
    pub fn palette_override(mut self, label: impl Into<String>, index: PaletteIndex) -> Self {
        self.palette_overrides.insert(label.into(), index);
        self
    }

    /// Adds an all-pixels layer below everything, painted with
    /// `palette_index`.
    pub fn base_layer(mut self, palette_index: PaletteIndex) -> Self {
        self.base_layer = Some(BaseLayer { palette_index });
        self
    }

    /// Finishes and validates the configuration.
    pub fn build(self) -> GlyphStackResult<CompileConfig> {
        let config = CompileConfig {
            glyph_name: self.glyph_name,
            scale_factor: self.scale_factor,
            x_offset: self.x_offset,
            y_offset: self.y_offset,
            side_bearing: self.side_bearing,
            policy: self.policy,
            stacking: self.stacking,
            palette_overrides: self.palette_overrides,
            base_layer: self.base_layer,
        };
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compile/config.rs"]
mod tests;
