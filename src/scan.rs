//! Enclosing parenthesis scan.
//!
//! From the cursor, two independent balance scans run over the visible
//! rows: one backward for the nearest unmatched `(`, one forward for the
//! nearest unmatched `)`. Neither scan leaves the viewport, so the cost is
//! bounded by the visible text rather than the document size.
//!
//! A visited line wider than the configured maximum aborts the whole scan
//! and yields [`MatchResult::UNSET`], even when the other direction already
//! found its paren.
//!
//! # Examples
//!
//! ```
//! use paren_hl::{LineDocument, Position, Scanner, Viewport};
//!
//! let doc = LineDocument::from_lines(["foo(bar(baz)qux)end"]);
//! let viewport = Viewport::new(1, 1, Position::new(1, 10));
//!
//! let found = Scanner::default().scan(&doc, &viewport);
//! assert_eq!(found.open, Some(Position::new(1, 8)));
//! assert_eq!(found.close, Some(Position::new(1, 12)));
//! ```

use crate::log::{LogLevel, emit_log_with};
use crate::text::{Document, Line};
use crate::view::{Position, Viewport};

/// Lines wider than this many columns abort a scan unless configured otherwise.
pub const DEFAULT_MAX_LINE_WIDTH: usize = 500;

/// Positions of the enclosing pair around the cursor.
///
/// Either half may be missing. A present half always points at a real
/// paren glyph.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct MatchResult {
    /// The unmatched `(` left of the cursor.
    pub open: Option<Position>,
    /// The unmatched `)` at or right of the cursor.
    pub close: Option<Position>,
}

impl MatchResult {
    /// Nothing found in either direction.
    pub const UNSET: Self = Self {
        open: None,
        close: None,
    };

    /// True when neither half was found.
    #[must_use]
    pub const fn is_unset(&self) -> bool {
        self.open.is_none() && self.close.is_none()
    }

    /// True when both halves were found.
    #[must_use]
    pub const fn is_pair(&self) -> bool {
        self.open.is_some() && self.close.is_some()
    }

    /// The found positions lying on `row`, open first.
    pub fn positions_on_row(&self, row: usize) -> impl Iterator<Item = Position> {
        [self.open, self.close]
            .into_iter()
            .flatten()
            .filter(move |pos| pos.row == row)
    }
}

/// Scanner configured with a line width cutoff.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Scanner {
    max_line_width: usize,
}

impl Default for Scanner {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_LINE_WIDTH)
    }
}

impl Scanner {
    /// Create a scanner that gives up on lines wider than `max_line_width`.
    #[must_use]
    pub const fn new(max_line_width: usize) -> Self {
        Self { max_line_width }
    }

    /// The configured cutoff.
    #[must_use]
    pub const fn max_line_width(&self) -> usize {
        self.max_line_width
    }

    /// Find the enclosing pair for the viewport's cursor.
    pub fn scan<D>(&self, document: &D, viewport: &Viewport) -> MatchResult
    where
        D: Document + ?Sized,
    {
        find_enclosing_parens(document, viewport, self.max_line_width)
    }
}

/// Outcome of one directional scan.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Sweep {
    Found(Position),
    Exhausted,
    /// A line over the width cutoff was reached.
    TooWide,
}

/// Find the nearest unmatched `(` before the cursor and `)` at or after it,
/// within the viewport's rows.
pub fn find_enclosing_parens<D>(document: &D, viewport: &Viewport, max_line_width: usize) -> MatchResult
where
    D: Document + ?Sized,
{
    let open = match sweep_backward(document, viewport, max_line_width) {
        Sweep::Found(pos) => Some(pos),
        Sweep::Exhausted => None,
        Sweep::TooWide => return MatchResult::UNSET,
    };
    let close = match sweep_forward(document, viewport, max_line_width) {
        Sweep::Found(pos) => Some(pos),
        Sweep::Exhausted => None,
        Sweep::TooWide => return MatchResult::UNSET,
    };
    MatchResult { open, close }
}

/// Width of a line worth scanning: `Ok(None)` for blank or missing rows,
/// `Err` when the line breaks the cutoff.
fn scannable_width(line: Option<&Line>, row: usize, max_line_width: usize) -> Result<Option<usize>, ()> {
    let width = line.map_or(0, Line::display_width);
    if width == 0 {
        return Ok(None);
    }
    if width > max_line_width {
        emit_log_with(LogLevel::Debug, || {
            format!("paren scan aborted: row {row} is {width} columns wide (max {max_line_width})")
        });
        return Err(());
    }
    Ok(Some(width))
}

fn sweep_backward<D>(document: &D, viewport: &Viewport, max_line_width: usize) -> Sweep
where
    D: Document + ?Sized,
{
    let cursor = viewport.cursor;
    let first_row = viewport.first_visible_row.max(1);
    let mut balance: i64 = 0;

    for row in (first_row..=cursor.row).rev() {
        let line = document.line_at(row);
        let width = match scannable_width(line.as_deref(), row, max_line_width) {
            Ok(Some(width)) => width,
            Ok(None) => continue,
            Err(()) => return Sweep::TooWide,
        };
        let Some(line) = line else { continue };

        let mut col = if row == cursor.row {
            if cursor.col <= 1 {
                continue;
            }
            (cursor.col - 1).min(width)
        } else {
            width
        };

        while col > 0 {
            let Some(glyph) = line.glyph_at_column(col) else {
                break;
            };
            match glyph.character() {
                '(' if balance == 0 => return Sweep::Found(Position::new(row, glyph.column)),
                '(' => balance += 1,
                ')' => balance -= 1,
                _ => {}
            }
            col = glyph.column - 1;
        }
    }

    Sweep::Exhausted
}

fn sweep_forward<D>(document: &D, viewport: &Viewport, max_line_width: usize) -> Sweep
where
    D: Document + ?Sized,
{
    let cursor = viewport.cursor;
    let mut balance: i64 = 0;

    for row in cursor.row.max(1)..=viewport.last_visible_row {
        let line = document.line_at(row);
        let width = match scannable_width(line.as_deref(), row, max_line_width) {
            Ok(Some(width)) => width,
            Ok(None) => continue,
            Err(()) => return Sweep::TooWide,
        };
        let Some(line) = line else { continue };

        let mut col = if row == cursor.row { cursor.col.max(1) } else { 1 };

        while col <= width {
            let Some(glyph) = line.glyph_at_column(col) else {
                break;
            };
            match glyph.character() {
                ')' if balance == 0 => return Sweep::Found(Position::new(row, glyph.column)),
                ')' => balance -= 1,
                '(' => balance += 1,
                _ => {}
            }
            col = glyph.column + glyph.width;
        }
    }

    Sweep::Exhausted
}
