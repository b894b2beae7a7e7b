use rayon::prelude::*;

use crate::{
    classify::classifier::classify,
    compile::config::{CompileConfig, StackingOrder},
    foundation::error::GlyphStackResult,
    glyph::{
        builder::build_layer,
        mapper::CoordinateMapper,
        metrics::{GlyphMetrics, compute_metrics},
    },
    raster::image::RasterImage,
    stack::assemble::{
        AssembledStack, BaseLayerGlyph, BuiltLayer, CompositeGlyph, NamedGlyph, Palette,
        assemble_stack,
    },
};

/// Everything one run produces, fully built and immutable, ready for the
/// font-assembly collaborator: the named layer glyphs in glyph order, the
/// palette, the composite, and the shared metrics they were built with.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct GlyphSet {
    /// Layer glyphs in glyph order (base layer first when present).
    pub glyphs: Vec<NamedGlyph>,
    /// Palette entries in creation order.
    pub palette: Palette,
    /// The composite glyph referencing layers and palette entries.
    pub composite: CompositeGlyph,
    /// The shared metrics every glyph was built with.
    pub metrics: GlyphMetrics,
}

/// Compiles one raster into one composite glyph's layer set.
///
/// raster -> classify -> (build layers in parallel, compute metrics once)
/// -> stack. Exactly one [`CoordinateMapper`] is constructed here and the
/// same instance feeds every layer build and the metrics computation, so
/// all layers of the composite share one coordinate system by
/// construction. Metrics are likewise computed once, from the union of all
/// visible pixels, and stamped verbatim onto every glyph.
#[tracing::instrument(skip(image, config), fields(glyph = %config.glyph_name))]
pub fn compile_glyph_set(
    image: &RasterImage,
    config: &CompileConfig,
) -> GlyphStackResult<GlyphSet> {
    config.validate()?;

    let mapper = CoordinateMapper::new(
        config.scale_factor,
        config.x_offset,
        config.y_offset,
        image.height(),
    )?;

    let classification = classify(image, &config.policy)?;
    let metrics = compute_metrics(
        &classification.visible,
        &mapper,
        image.width(),
        config.side_bearing,
    );

    // Groups are disjoint and the mapper is stateless, so the per-group
    // builds are a fork-join; the indexed collect restores creation order.
    let layers: Vec<BuiltLayer> = classification
        .groups
        .par_iter()
        .map(|group| BuiltLayer {
            label: group.label.clone(),
            color: group.color,
            glyph: build_layer(&group.pixels, &mapper, metrics.advance_width),
        })
        .collect();

    let order: Vec<String> = match &config.stacking {
        StackingOrder::Classification => layers.iter().map(|l| l.label.clone()).collect(),
        StackingOrder::Explicit(labels) => labels.clone(),
    };

    let base_layer = config.base_layer.map(|base| BaseLayerGlyph {
        glyph: build_layer(&classification.visible, &mapper, metrics.advance_width),
        palette_index: base.palette_index,
    });

    let AssembledStack {
        glyphs,
        palette,
        composite,
    } = assemble_stack(
        &config.glyph_name,
        &layers,
        &order,
        &config.palette_overrides,
        base_layer,
    )?;

    tracing::debug!(
        layers = layers.len(),
        advance = metrics.advance_width,
        "compiled glyph set"
    );

    Ok(GlyphSet {
        glyphs,
        palette,
        composite,
        metrics,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/compile/pipeline.rs"]
mod tests;
