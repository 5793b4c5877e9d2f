//! Rope wrapper using the ropey crate.

use ropey::Rope;

/// Wrapper around ropey::Rope with line-oriented convenience methods.
///
/// Line indices here are 0-based; the 1-based row convention lives in
/// [`TextDocument`](super::TextDocument).
#[derive(Clone, Debug, Default)]
pub struct RopeWrapper {
    rope: Rope,
}

impl RopeWrapper {
    /// Create a rope from a string.
    #[must_use]
    pub fn from_str(s: &str) -> Self {
        Self {
            rope: Rope::from_str(s),
        }
    }

    /// Get the number of characters.
    #[must_use]
    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    /// Get the number of lines.
    #[must_use]
    pub fn len_lines(&self) -> usize {
        self.rope.len_lines()
    }

    /// Get a line's text without its terminator.
    #[must_use]
    pub fn line_text(&self, idx: usize) -> Option<String> {
        let line = self.rope.get_line(idx)?;
        let mut text = line.to_string();
        if text.ends_with('\n') {
            text.pop();
            if text.ends_with('\r') {
                text.pop();
            }
        }
        Some(text)
    }

    /// Char index at the start of a line (clamped to the end of the rope).
    #[must_use]
    pub fn line_to_char(&self, line_idx: usize) -> usize {
        if line_idx >= self.len_lines() {
            self.len_chars()
        } else {
            self.rope.line_to_char(line_idx)
        }
    }

    /// Insert text at a character position. Out-of-range positions are ignored.
    pub fn insert(&mut self, char_idx: usize, text: &str) {
        if char_idx <= self.len_chars() {
            self.rope.insert(char_idx, text);
        }
    }

    /// Remove a range of characters, clamped to the rope.
    pub fn remove(&mut self, range: std::ops::Range<usize>) {
        let end = range.end.min(self.len_chars());
        let start = range.start.min(end);
        self.rope.remove(start..end);
    }

    /// Replace the entire contents.
    pub fn replace(&mut self, text: &str) {
        self.rope = Rope::from_str(text);
    }

    /// Convert to string.
    #[must_use]
    pub fn to_string(&self) -> String {
        self.rope.to_string()
    }
}
