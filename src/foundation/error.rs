/// Crate-wide result alias.
pub type GlyphStackResult<T> = Result<T, GlyphStackError>;

/// Error taxonomy for the glyph compilation pipeline.
///
/// Every variant is fatal to the run that raised it: downstream font
/// assembly needs a fully consistent palette/layer set, so there is no
/// partial or best-effort output. Messages carry the precise offending
/// value (color, index, name) so callers can report it verbatim.
#[derive(thiserror::Error, Debug)]
pub enum GlyphStackError {
    /// Malformed or missing raster data, or non-positive mapper parameters.
    #[error("input error: {0}")]
    Input(String),

    /// A pixel color matched no target and no fallback policy was configured.
    #[error("classification error: {0}")]
    Classification(String),

    /// Palette index out of range, duplicate glyph name, or an invalid
    /// stacking order, detected at assembly time.
    #[error("build error: {0}")]
    Build(String),

    /// Anything raised by a collaborator crate (image conversion, etc.).
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GlyphStackError {
    /// Shorthand for an [`GlyphStackError::Input`] with a formatted message.
    pub fn input(msg: impl Into<String>) -> Self {
        Self::Input(msg.into())
    }

    /// Shorthand for a [`GlyphStackError::Classification`] with a formatted
    /// message.
    pub fn classification(msg: impl Into<String>) -> Self {
        Self::Classification(msg.into())
    }

    /// Shorthand for a [`GlyphStackError::Build`] with a formatted message.
    pub fn build(msg: impl Into<String>) -> Self {
        Self::Build(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
