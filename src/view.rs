//! Cursor positions and the visible row window.

/// A 1-based (row, display column) position in a document.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// The rows currently rendered plus the cursor inside the document.
///
/// `first_visible_row..=last_visible_row` is inclusive. When the document
/// is empty `last_visible_row` may be smaller than `first_visible_row`,
/// which leaves nothing to scan.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub first_visible_row: usize,
    pub last_visible_row: usize,
    pub cursor: Position,
}

impl Viewport {
    /// Create a viewport from an explicit row range.
    #[must_use]
    pub const fn new(first_visible_row: usize, last_visible_row: usize, cursor: Position) -> Self {
        Self {
            first_visible_row,
            last_visible_row,
            cursor,
        }
    }

    /// Create a viewport the way a scrolled frame reports it.
    ///
    /// `scroll_offset` is the number of rows scrolled off the top and
    /// `height` the frame height in rows. The last visible row never goes
    /// past the end of the document.
    #[must_use]
    pub fn from_scroll(
        scroll_offset: usize,
        height: usize,
        line_count: usize,
        cursor: Position,
    ) -> Self {
        Self {
            first_visible_row: scroll_offset + 1,
            last_visible_row: (scroll_offset + height).min(line_count),
            cursor,
        }
    }

    /// Number of rows in the window.
    #[must_use]
    pub fn height(&self) -> usize {
        (self.last_visible_row + 1).saturating_sub(self.first_visible_row)
    }

    /// Whether `row` is rendered.
    #[must_use]
    pub fn contains_row(&self, row: usize) -> bool {
        (self.first_visible_row..=self.last_visible_row).contains(&row)
    }

    /// Same window with the cursor moved.
    #[must_use]
    pub const fn with_cursor(self, cursor: Position) -> Self {
        Self { cursor, ..self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_scroll_clamps_to_document() {
        let vp = Viewport::from_scroll(10, 24, 20, Position::new(12, 1));
        assert_eq!(vp.first_visible_row, 11);
        assert_eq!(vp.last_visible_row, 20);
        assert_eq!(vp.height(), 10);
    }

    #[test]
    fn test_from_scroll_full_frame() {
        let vp = Viewport::from_scroll(0, 24, 1000, Position::new(1, 1));
        assert_eq!((vp.first_visible_row, vp.last_visible_row), (1, 24));
        assert!(vp.contains_row(24));
        assert!(!vp.contains_row(25));
    }

    #[test]
    fn test_empty_window() {
        let vp = Viewport::from_scroll(0, 24, 0, Position::new(1, 1));
        assert_eq!(vp.height(), 0);
        assert!(!vp.contains_row(1));
    }

    #[test]
    fn test_position_ordering() {
        assert!(Position::new(1, 9) < Position::new(2, 1));
        assert!(Position::new(3, 2) < Position::new(3, 4));
    }
}
