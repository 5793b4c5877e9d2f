//! Documents: the line store a scan reads from.
//!
//! The scanner only needs [`Document`]. Two implementations ship with the
//! crate: [`TextDocument`], a rope-backed editable buffer, and
//! [`LineDocument`], a fixed list of pre-laid-out lines.

use crate::text::line::Line;
use crate::text::rope::RopeWrapper;
use crate::unicode::WidthMethod;
use std::borrow::Cow;

/// Default tab width for new documents.
pub const DEFAULT_TAB_WIDTH: usize = 4;

/// Read-only line access by 1-based row.
pub trait Document {
    /// Number of lines in the document.
    fn line_count(&self) -> usize;

    /// The line at 1-based `row`, or `None` outside `1..=line_count()`.
    fn line_at(&self, row: usize) -> Option<Cow<'_, Line>>;
}

/// Rope-backed text document.
///
/// Lines are laid out on demand; the rope keeps edits O(log n).
#[derive(Clone, Debug)]
pub struct TextDocument {
    rope: RopeWrapper,
    tab_width: usize,
    width_method: WidthMethod,
    revision: u64,
}

impl Default for TextDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl TextDocument {
    /// Create an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::with_text("")
    }

    /// Create a document with initial text.
    #[must_use]
    pub fn with_text(text: &str) -> Self {
        Self {
            rope: RopeWrapper::from_str(text),
            tab_width: DEFAULT_TAB_WIDTH,
            width_method: WidthMethod::default(),
            revision: 0,
        }
    }

    /// Set tab width (clamped to at least 1).
    pub fn set_tab_width(&mut self, width: usize) {
        self.tab_width = width.max(1);
    }

    /// Get tab width.
    #[must_use]
    pub fn tab_width(&self) -> usize {
        self.tab_width
    }

    /// Set width calculation method.
    pub fn set_width_method(&mut self, method: WidthMethod) {
        self.width_method = method;
    }

    /// Get width calculation method.
    #[must_use]
    pub fn width_method(&self) -> WidthMethod {
        self.width_method
    }

    /// Replace the whole text.
    pub fn set_text(&mut self, text: &str) {
        self.rope.replace(text);
        self.bump_revision();
    }

    /// Insert `text` before the glyph at display column `col` of `row`.
    ///
    /// A column past the end of the line appends to it. Rows outside the
    /// document are ignored.
    pub fn insert(&mut self, row: usize, col: usize, text: &str) {
        let char_offset = match self.line_at(row) {
            Some(line) => {
                let byte = line.byte_offset_at_column(col);
                line.text()[..byte].chars().count()
            }
            None => return,
        };
        let line_start = self.rope.line_to_char(row - 1);
        self.rope.insert(line_start + char_offset, text);
        self.bump_revision();
    }

    /// Remove the line at `row`, including its terminator.
    pub fn remove_line(&mut self, row: usize) {
        if row == 0 || row > self.line_count() {
            return;
        }
        let start = self.rope.line_to_char(row - 1);
        let end = self.rope.line_to_char(row);
        self.rope.remove(start..end);
        self.bump_revision();
    }

    /// Text of the line at `row`, without its terminator.
    #[must_use]
    pub fn line_text(&self, row: usize) -> Option<String> {
        row.checked_sub(1).and_then(|idx| self.rope.line_text(idx))
    }

    /// Revision counter, incremented on every content change.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Convert to plain string.
    #[must_use]
    pub fn to_string(&self) -> String {
        self.rope.to_string()
    }

    fn bump_revision(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

impl Document for TextDocument {
    fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    fn line_at(&self, row: usize) -> Option<Cow<'_, Line>> {
        let text = self.line_text(row)?;
        Some(Cow::Owned(Line::new(text, self.tab_width, self.width_method)))
    }
}

/// A document made of already laid-out lines.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LineDocument {
    lines: Vec<Line>,
}

impl LineDocument {
    /// Build from lines, laid out with the default tab width.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        lines.into_iter().map(Line::plain).collect()
    }

    /// Append a line.
    pub fn push(&mut self, line: Line) {
        self.lines.push(line);
    }
}

impl FromIterator<Line> for LineDocument {
    fn from_iter<T: IntoIterator<Item = Line>>(iter: T) -> Self {
        Self {
            lines: iter.into_iter().collect(),
        }
    }
}

impl Document for LineDocument {
    fn line_count(&self) -> usize {
        self.lines.len()
    }

    fn line_at(&self, row: usize) -> Option<Cow<'_, Line>> {
        row.checked_sub(1)
            .and_then(|idx| self.lines.get(idx))
            .map(Cow::Borrowed)
    }
}
