use crate::foundation::{
    core::Rgb,
    error::{GlyphStackError, GlyphStackResult},
};

/// One target color of an exact-set policy, with the layer label its glyph
/// will be named after (`{glyph}.{label}`).
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct TargetColor {
    /// Layer label; must be non-empty.
    pub label: String,
    /// The exact color this target matches.
    pub rgb: Rgb,
}

impl TargetColor {
    /// Pairs a label with its target color.
    pub fn new(label: impl Into<String>, rgb: Rgb) -> Self {
        Self {
            label: label.into(),
            rgb,
        }
    }
}

/// What to do with a visible pixel whose color matches no exact-set target.
///
/// Silently dropping pixels is not an option: the partition invariant says
/// every visible pixel lands in exactly one group.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum FallbackPolicy {
    /// Append the pixel to whichever target group holds the most pixels at
    /// that moment (ties go to the earliest target in list order).
    MergeIntoLargestGroup,
    /// Collect unmatched pixels into a dedicated group labeled `other`,
    /// keyed by the first unmatched color encountered.
    SeparateOtherGroup,
}

/// Deterministic total order for auto-distinct group creation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum DistinctOrder {
    /// Ascending `(r, g, b)` tuple order.
    AscendingRgb,
    /// Most-populated color first; frequency ties broken by ascending RGB
    /// so the order stays total.
    DescendingFrequency,
}

/// How visible pixels are partitioned into color groups.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub enum ClassifyPolicy {
    /// A fixed, ordered list of target colors. Pixels matching none of them
    /// go through `fallback`; with no fallback configured an unmatched
    /// color is a classification error naming that color.
    ExactSet {
        /// Ordered target colors; earlier targets win first-match.
        targets: Vec<TargetColor>,
        /// What happens to pixels matching no target.
        fallback: Option<FallbackPolicy>,
    },
    /// Every distinct non-background color becomes its own group, labeled
    /// `color01`, `color02`, ... in the chosen order.
    AutoDistinct {
        /// Group creation order.
        order: DistinctOrder,
    },
}

impl ClassifyPolicy {
    /// An exact-set policy over `targets` with the given fallback.
    pub fn exact(targets: Vec<TargetColor>, fallback: Option<FallbackPolicy>) -> Self {
        Self::ExactSet { targets, fallback }
    }

    /// An auto-distinct policy with the given creation order.
    pub fn auto(order: DistinctOrder) -> Self {
        Self::AutoDistinct { order }
    }

    /// Rejects empty target lists, empty labels and duplicate target
    /// colors (a duplicate would make first-match-wins ambiguous).
    pub fn validate(&self) -> GlyphStackResult<()> {
        if let Self::ExactSet { targets, .. } = self {
            if targets.is_empty() {
                return Err(GlyphStackError::input(
                    "exact-set policy needs at least one target color",
                ));
            }
            for t in targets {
                if t.label.trim().is_empty() {
                    return Err(GlyphStackError::input(format!(
                        "target color {} has an empty label",
                        t.rgb
                    )));
                }
            }
            for (i, t) in targets.iter().enumerate() {
                if targets[..i].iter().any(|prev| prev.rgb == t.rgb) {
                    return Err(GlyphStackError::input(format!(
                        "target color {} listed more than once",
                        t.rgb
                    )));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/classify/policy.rs"]
mod tests;
