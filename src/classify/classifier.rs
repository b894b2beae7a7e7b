use std::collections::BTreeMap;

use crate::{
    classify::policy::{ClassifyPolicy, DistinctOrder, FallbackPolicy, TargetColor},
    foundation::{
        core::{Pixel, Rgb},
        error::{GlyphStackError, GlyphStackResult},
    },
    raster::image::RasterImage,
};

/// Label of the group created by [`FallbackPolicy::SeparateOtherGroup`].
pub const OTHER_GROUP_LABEL: &str = "other";

/// One named color group: a target color and the scan-order list of pixels
/// assigned to it. Produced once by classification and never mutated.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct ColorGroup {
    /// Layer label this group's glyph is named after.
    pub label: String,
    /// The group's target color.
    pub color: Rgb,
    /// Assigned pixels, in scan order.
    pub pixels: Vec<Pixel>,
}

/// Classifier output: groups in creation order, plus the scan-order union
/// of every visible pixel.
///
/// The groups partition the visible pixels: their lists are pairwise
/// disjoint and their union equals `visible`. That is structural (a single
/// first-match-wins pass with an explicit fallback bucket), not incidental.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Classification {
    /// Color groups in creation order.
    pub groups: Vec<ColorGroup>,
    /// Union of all non-background pixels, in scan order.
    pub visible: Vec<Pixel>,
}

impl Classification {
    /// Total pixel count across all groups. Equals `visible.len()` by the
    /// partition invariant.
    pub fn classified_count(&self) -> usize {
        self.groups.iter().map(|g| g.pixels.len()).sum()
    }
}

/// Partitions an image's visible (non-background) pixels into color groups
/// per the policy. Pure in `(image, policy)`; the running largest-group
/// bookkeeping used by the merge fallback lives in a local accumulator.
#[tracing::instrument(skip(image, policy))]
pub fn classify(
    image: &RasterImage,
    policy: &ClassifyPolicy,
) -> GlyphStackResult<Classification> {
    policy.validate()?;
    let result = match policy {
        ClassifyPolicy::ExactSet { targets, fallback } => {
            classify_exact(image, targets, *fallback)?
        }
        ClassifyPolicy::AutoDistinct { order } => classify_distinct(image, *order),
    };

    tracing::debug!(
        visible = result.visible.len(),
        groups = result.groups.len(),
        "classified raster"
    );
    debug_assert_eq!(result.classified_count(), result.visible.len());
    Ok(result)
}

fn classify_exact(
    image: &RasterImage,
    targets: &[TargetColor],
    fallback: Option<FallbackPolicy>,
) -> GlyphStackResult<Classification> {
    let mut groups: Vec<ColorGroup> = targets
        .iter()
        .map(|t| ColorGroup {
            label: t.label.clone(),
            color: t.rgb,
            pixels: Vec::new(),
        })
        .collect();
    let mut other: Option<ColorGroup> = None;
    let mut visible = Vec::new();

    for (pixel, rgb) in image.visible_pixels() {
        visible.push(pixel);

        if let Some(idx) = groups.iter().position(|g| g.color == rgb) {
            groups[idx].pixels.push(pixel);
            continue;
        }

        match fallback {
            None => {
                return Err(GlyphStackError::classification(format!(
                    "pixel ({}, {}) has color {rgb} which matches no target and no fallback policy is configured",
                    pixel.x, pixel.y
                )));
            }
            Some(FallbackPolicy::MergeIntoLargestGroup) => {
                // Earliest target wins ties, so scan in list order with a
                // strict `>`.
                let mut idx = 0;
                for (i, g) in groups.iter().enumerate() {
                    if g.pixels.len() > groups[idx].pixels.len() {
                        idx = i;
                    }
                }
                groups[idx].pixels.push(pixel);
            }
            Some(FallbackPolicy::SeparateOtherGroup) => {
                other
                    .get_or_insert_with(|| ColorGroup {
                        label: OTHER_GROUP_LABEL.to_string(),
                        color: rgb,
                        pixels: Vec::new(),
                    })
                    .pixels
                    .push(pixel);
            }
        }
    }

    if let Some(other) = other {
        groups.push(other);
    }
    Ok(Classification { groups, visible })
}

fn classify_distinct(image: &RasterImage, order: DistinctOrder) -> Classification {
    // BTreeMap keys give the ascending-RGB order for free; pixel lists stay
    // in scan order because the scan itself is row-major.
    let mut by_color: BTreeMap<Rgb, Vec<Pixel>> = BTreeMap::new();
    let mut visible = Vec::new();

    for (pixel, rgb) in image.visible_pixels() {
        visible.push(pixel);
        by_color.entry(rgb).or_default().push(pixel);
    }

    let mut entries: Vec<(Rgb, Vec<Pixel>)> = by_color.into_iter().collect();
    if order == DistinctOrder::DescendingFrequency {
        entries.sort_by_key(|(rgb, pixels)| (std::cmp::Reverse(pixels.len()), *rgb));
    }

    let groups = entries
        .into_iter()
        .enumerate()
        .map(|(i, (color, pixels))| ColorGroup {
            label: format!("color{:02}", i + 1),
            color,
            pixels,
        })
        .collect();
    Classification { groups, visible }
}

#[cfg(test)]
#[path = "../../tests/unit/classify/classifier.rs"]
mod tests;
