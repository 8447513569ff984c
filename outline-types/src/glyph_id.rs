//! Glyph Identifiers
//!
//! Glyphs are addressed by their position in the font's glyph list. We
//! choose to represent that index as a distinct type.

/// A glyph identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct GlyphId(u32);

impl GlyphId {
    /// Construct a new `GlyphId`.
    pub const fn new(raw: u32) -> Self {
        GlyphId(raw)
    }

    /// The identifier as a u32.
    pub const fn to_u32(self) -> u32 {
        self.0
    }
}
