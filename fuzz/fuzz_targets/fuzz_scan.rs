//! Fuzz target for the enclosing paren scan.
//!
//! Arbitrary text, viewport, and cutoff must never panic, and any half that
//! is found must sit on a paren inside the window.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use paren_hl::{Document, Position, Scanner, TextDocument, Viewport};

#[derive(Debug, Arbitrary)]
struct Input<'a> {
    text: &'a str,
    first_row: u8,
    rows: u8,
    cursor_row: u8,
    cursor_col: u16,
    max_width: u16,
    tab_width: u8,
}

fuzz_target!(|input: Input<'_>| {
    let mut doc = TextDocument::with_text(input.text);
    doc.set_tab_width(usize::from(input.tab_width));

    let first = usize::from(input.first_row);
    let last = first + usize::from(input.rows);
    let cursor = Position::new(usize::from(input.cursor_row), usize::from(input.cursor_col));
    let viewport = Viewport::new(first, last, cursor);

    let found = Scanner::new(usize::from(input.max_width)).scan(&doc, &viewport);

    for (pos, want) in [(found.open, '('), (found.close, ')')] {
        let Some(pos) = pos else { continue };
        assert!(viewport.contains_row(pos.row));
        let line = doc.line_at(pos.row).expect("found row exists");
        let glyph = line.glyph_at_column(pos.col).expect("found column exists");
        assert_eq!(glyph.column, pos.col);
        assert_eq!(glyph.character(), want);
    }
});
