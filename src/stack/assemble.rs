use std::collections::BTreeMap;

use crate::{
    foundation::{
        core::{PaletteColor, PaletteIndex, Rgb},
        error::{GlyphStackError, GlyphStackResult},
    },
    glyph::builder::Glyph,
};

/// An ordered list of RGBA palette entries. Indices are 0-based in
/// creation order and are the sole identity of an entry: they are never
/// reassigned after creation.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Palette {
    entries: Vec<PaletteColor>,
}

impl Palette {
    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the palette has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries, in creation order.
    pub fn entries(&self) -> &[PaletteColor] {
        &self.entries
    }

    /// Entry at `index`, if it exists.
    pub fn get(&self, index: PaletteIndex) -> Option<PaletteColor> {
        self.entries.get(index.as_usize()).copied()
    }

    fn push(&mut self, color: PaletteColor) -> PaletteIndex {
        self.entries.push(color);
        PaletteIndex((self.entries.len() - 1) as u16)
    }

    fn contains(&self, index: PaletteIndex) -> bool {
        index.as_usize() < self.entries.len()
    }
}

/// A layer glyph with the name it will carry in the output glyph order.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct NamedGlyph {
    /// Output glyph name, `{glyph}.{label}` for layers.
    pub name: String,
    /// The layer outline.
    pub glyph: Glyph,
}

/// One layer reference of a composite: which glyph, tinted by which
/// palette entry. Several layers may legally share one palette index.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LayerAssignment {
    /// Name of the layer glyph to draw.
    pub glyph_name: String,
    /// Palette entry the layer is tinted with.
    pub palette_index: PaletteIndex,
}

/// The visible-character definition: an ordered bottom-to-top list of layer
/// assignments. Owns no geometry itself; later layers paint over earlier
/// ones, fully opaque.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CompositeGlyph {
    /// The composite's own glyph name.
    pub name: String,
    /// Layer assignments, bottom first.
    pub layers: Vec<LayerAssignment>,
}

/// One classified group's built layer, in classification creation order.
#[derive(Clone, Debug)]
pub struct BuiltLayer {
    /// The group's layer label.
    pub label: String,
    /// The group's target color.
    pub color: Rgb,
    /// The built layer outline.
    pub glyph: Glyph,
}

/// Optional all-visible-pixels layer placed underneath every color layer.
#[derive(Clone, Debug)]
pub struct BaseLayerGlyph {
    /// Outline covering every visible pixel.
    pub glyph: Glyph,
    /// Existing palette entry the base layer paints with.
    pub palette_index: PaletteIndex,
}

/// Assembled output of one run: the layer glyphs in glyph order, the
/// palette, and the composite referencing both.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct AssembledStack {
    /// Layer glyphs in glyph order.
    pub glyphs: Vec<NamedGlyph>,
    /// Palette entries in creation order.
    pub palette: Palette,
    /// The composite referencing the layers.
    pub composite: CompositeGlyph,
}

/// Assembles palette, named layer glyphs and the composite from classified
/// layers plus the caller's explicit bottom-to-top stacking order.
///
/// `order` must be a permutation of the layer labels: the stacking order is
/// always supplied, never inferred. `palette_overrides` reassigns a label
/// to an existing palette entry (sharing entries between layers is legal);
/// an index outside the palette, a label unknown to the classification, a
/// label stacked twice or missing, and a duplicate generated glyph name are
/// all build errors.
pub fn assemble_stack(
    glyph_name: &str,
    layers: &[BuiltLayer],
    order: &[String],
    palette_overrides: &BTreeMap<String, PaletteIndex>,
    base_layer: Option<BaseLayerGlyph>,
) -> GlyphStackResult<AssembledStack> {
    crate::foundation::core::validate_glyph_name(glyph_name)?;

    // Palette entries in group-creation order; default assignment is
    // label -> its own entry.
    let mut palette = Palette::default();
    let mut assignment: BTreeMap<&str, PaletteIndex> = BTreeMap::new();
    for layer in layers {
        let index = palette.push(PaletteColor::opaque(layer.color));
        assignment.insert(&layer.label, index);
    }

    for (label, &index) in palette_overrides {
        if !assignment.contains_key(label.as_str()) {
            return Err(GlyphStackError::build(format!(
                "palette override for unknown layer label '{label}'"
            )));
        }
        if !palette.contains(index) {
            return Err(GlyphStackError::build(format!(
                "palette index {index} for layer '{label}' is out of range (palette has {} entries)",
                palette.len()
            )));
        }
        assignment.insert(label, index);
    }

    validate_stacking_order(layers, order)?;

    let mut composite_layers = Vec::with_capacity(order.len() + 1);
    let mut glyphs = Vec::with_capacity(layers.len() + 1);

    if let Some(base) = base_layer {
        if !palette.contains(base.palette_index) {
            return Err(GlyphStackError::build(format!(
                "base layer palette index {} is out of range (palette has {} entries)",
                base.palette_index,
                palette.len()
            )));
        }
        let name = format!("{glyph_name}.base");
        composite_layers.push(LayerAssignment {
            glyph_name: name.clone(),
            palette_index: base.palette_index,
        });
        glyphs.push(NamedGlyph {
            name,
            glyph: base.glyph,
        });
    }

    // Glyph order follows creation order; the composite follows the
    // caller's stacking order.
    for layer in layers {
        glyphs.push(NamedGlyph {
            name: format!("{glyph_name}.{}", layer.label),
            glyph: layer.glyph.clone(),
        });
    }
    for label in order {
        composite_layers.push(LayerAssignment {
            glyph_name: format!("{glyph_name}.{label}"),
            palette_index: assignment[label.as_str()],
        });
    }

    let composite = CompositeGlyph {
        name: glyph_name.to_string(),
        layers: composite_layers,
    };

    let mut seen = std::collections::BTreeSet::new();
    for name in glyphs
        .iter()
        .map(|g| g.name.as_str())
        .chain([composite.name.as_str()])
    {
        if !seen.insert(name) {
            return Err(GlyphStackError::build(format!(
                "duplicate glyph name '{name}' in output set"
            )));
        }
    }

    tracing::debug!(
        glyphs = glyphs.len(),
        palette = palette.len(),
        composite_layers = composite.layers.len(),
        "assembled layer stack"
    );

    Ok(AssembledStack {
        glyphs,
        palette,
        composite,
    })
}

fn validate_stacking_order(layers: &[BuiltLayer], order: &[String]) -> GlyphStackResult<()> {
    let mut remaining: BTreeMap<&str, usize> = BTreeMap::new();
    for layer in layers {
        *remaining.entry(layer.label.as_str()).or_insert(0) += 1;
    }
    for label in order {
        match remaining.get_mut(label.as_str()) {
            Some(n) if *n > 0 => *n -= 1,
            Some(_) => {
                return Err(GlyphStackError::build(format!(
                    "stacking order lists layer '{label}' more than once"
                )));
            }
            None => {
                return Err(GlyphStackError::build(format!(
                    "stacking order names unknown layer '{label}'"
                )));
            }
        }
    }
    if let Some((label, _)) = remaining.iter().find(|(_, n)| **n > 0) {
        return Err(GlyphStackError::build(format!(
            "stacking order is missing layer '{label}'"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/stack/assemble.rs"]
mod tests;
