//! Grapheme segmentation into column-addressed glyphs.

use crate::unicode::width::{WidthMethod, display_width, display_width_char};
use unicode_segmentation::UnicodeSegmentation;

/// Layout of one glyph (grapheme cluster) within a line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GlyphInfo {
    pub byte_offset: usize,
    pub byte_len: usize,
    /// 1-based display column of the glyph's first cell.
    pub column: usize,
    /// Number of display columns the glyph covers (always >= 1).
    pub width: usize,
}

impl GlyphInfo {
    /// Last display column covered by this glyph.
    #[must_use]
    pub const fn last_column(&self) -> usize {
        self.column + self.width - 1
    }
}

/// Lay out a line's glyphs on display columns.
///
/// Tabs expand to the next multiple of `tab_width`. Glyphs that measure
/// zero columns still take one, so every glyph owns at least one column.
#[must_use]
pub fn glyph_layout(s: &str, tab_width: usize, method: WidthMethod) -> Vec<GlyphInfo> {
    let tab_width = tab_width.max(1);
    let mut infos = Vec::with_capacity(s.len());
    let mut col = 0usize;

    for (byte_offset, grapheme) in s.grapheme_indices(true) {
        let mut chars = grapheme.chars();
        let width = match (chars.next(), chars.next()) {
            (Some('\t'), None) => tab_width - (col % tab_width),
            (Some(c), None) => display_width_char(c, method).max(1),
            _ => display_width(grapheme, method).max(1),
        };

        infos.push(GlyphInfo {
            byte_offset,
            byte_len: grapheme.len(),
            column: col + 1,
            width,
        });
        col += width;
    }

    infos
}
