//! A laid-out line: text plus the display column of every glyph.

use crate::unicode::{GlyphInfo, WidthMethod, glyph_layout};

/// One line of a document, segmented into column-addressed glyphs.
///
/// The text never includes the line terminator.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Line {
    text: String,
    glyphs: Vec<GlyphInfo>,
}

/// A glyph as seen at a display column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Glyph<'a> {
    text: &'a str,
    /// 1-based first display column of the glyph.
    pub column: usize,
    /// Display columns covered.
    pub width: usize,
}

impl<'a> Glyph<'a> {
    /// The grapheme cluster's text.
    #[must_use]
    pub const fn as_str(&self) -> &'a str {
        self.text
    }

    /// The glyph's base character.
    ///
    /// A paren followed by combining marks is still that paren.
    #[must_use]
    pub fn character(&self) -> char {
        self.text.chars().next().unwrap_or('\0')
    }
}

impl Line {
    /// Lay out `text` with the given tab width and width method.
    #[must_use]
    pub fn new(text: impl Into<String>, tab_width: usize, method: WidthMethod) -> Self {
        let text = text.into();
        let glyphs = glyph_layout(&text, tab_width, method);
        Self { text, glyphs }
    }

    /// Lay out `text` with a tab width of 4 and wcwidth semantics.
    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, 4, WidthMethod::WcWidth)
    }

    /// The line's text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Total display width in columns. Blank lines have width 0.
    #[must_use]
    pub fn display_width(&self) -> usize {
        self.glyphs.last().map_or(0, GlyphInfo::last_column)
    }

    /// True when the line has no glyphs.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Number of glyphs on the line.
    #[must_use]
    pub fn glyph_count(&self) -> usize {
        self.glyphs.len()
    }

    /// The glyph covering display column `col` (1-based).
    ///
    /// Any column inside a multi-column glyph resolves to that glyph.
    #[must_use]
    pub fn glyph_at_column(&self, col: usize) -> Option<Glyph<'_>> {
        if col == 0 {
            return None;
        }
        let idx = self.glyphs.partition_point(|g| g.last_column() < col);
        self.glyphs.get(idx).map(|info| self.glyph(info))
    }

    /// Iterate over all glyphs left to right.
    pub fn glyphs(&self) -> impl DoubleEndedIterator<Item = Glyph<'_>> + '_ {
        self.glyphs.iter().map(|info| self.glyph(info))
    }

    /// Byte offset in [`Line::text`] where the glyph at `col` starts, or the
    /// text length when `col` is past the end.
    #[must_use]
    pub fn byte_offset_at_column(&self, col: usize) -> usize {
        let idx = self.glyphs.partition_point(|g| g.last_column() < col.max(1));
        self.glyphs
            .get(idx)
            .map_or(self.text.len(), |info| info.byte_offset)
    }

    fn glyph(&self, info: &GlyphInfo) -> Glyph<'_> {
        Glyph {
            text: &self.text[info.byte_offset..info.byte_offset + info.byte_len],
            column: info.column,
            width: info.width,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_line() {
        let line = Line::plain("");
        assert!(line.is_blank());
        assert_eq!(line.display_width(), 0);
        assert_eq!(line.glyph_at_column(1), None);
    }

    #[test]
    fn test_glyph_at_column_ascii() {
        let line = Line::plain("f(x)");
        let g = line.glyph_at_column(2).unwrap();
        assert_eq!(g.character(), '(');
        assert_eq!(g.column, 2);
        assert_eq!(line.glyph_at_column(0), None);
        assert_eq!(line.glyph_at_column(5), None);
    }

    #[test]
    fn test_glyph_at_column_inside_wide_glyph() {
        let line = Line::plain("a漢)");
        assert_eq!(line.display_width(), 4);
        let left = line.glyph_at_column(2).unwrap();
        let right = line.glyph_at_column(3).unwrap();
        assert_eq!(left, right);
        assert_eq!(left.as_str(), "漢");
        assert_eq!(line.glyph_at_column(4).unwrap().character(), ')');
    }

    #[test]
    fn test_tab_expansion_width() {
        let line = Line::new("\t(", 8, WidthMethod::WcWidth);
        assert_eq!(line.display_width(), 9);
        assert_eq!(line.glyph_at_column(5).unwrap().as_str(), "\t");
        assert_eq!(line.glyph_at_column(9).unwrap().character(), '(');
    }

    #[test]
    fn test_combining_mark_keeps_base_character() {
        let line = Line::plain("(\u{0301}x");
        assert_eq!(line.glyph_count(), 2);
        assert_eq!(line.glyph_at_column(1).unwrap().character(), '(');
    }

    #[test]
    fn test_byte_offset_at_column() {
        let line = Line::plain("漢(x");
        assert_eq!(line.byte_offset_at_column(1), 0);
        assert_eq!(line.byte_offset_at_column(3), "漢".len());
        assert_eq!(line.byte_offset_at_column(40), line.text().len());
    }

    #[test]
    fn test_glyphs_reverse_iteration() {
        let line = Line::plain("(a)");
        let rev: Vec<char> = line.glyphs().rev().map(|g| g.character()).collect();
        assert_eq!(rev, vec![')', 'a', '(']);
    }
}
