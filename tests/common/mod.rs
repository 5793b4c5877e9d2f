//! Shared helpers for paren_hl integration tests.

#![allow(clippy::pedantic)] // Test infra prioritizes clarity over pedantry
#![allow(dead_code)] // Each test binary uses a different subset

use paren_hl::{Document, Line, LogLevel, MatchResult, Position, TextDocument};
use std::sync::Once;

/// Marks the cursor in fixture text. Removed before the document is built.
pub const CURSOR: char = '|';

/// Install a tracing subscriber once per test binary and route crate logs
/// through it.
pub fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .try_init();
        paren_hl::set_log_callback(|level, msg| match level {
            LogLevel::Debug => tracing::debug!("{msg}"),
            LogLevel::Info => tracing::info!("{msg}"),
            LogLevel::Warn => tracing::warn!("{msg}"),
            LogLevel::Error => tracing::error!("{msg}"),
        });
    });
}

/// Build a document from fixture text and return the marked cursor.
///
/// The cursor sits on the glyph right after the marker.
pub fn fixture(src: &str) -> (TextDocument, Position) {
    let mut cursor = None;
    let mut text = String::with_capacity(src.len());

    for (idx, raw) in src.split('\n').enumerate() {
        if idx > 0 {
            text.push('\n');
        }
        if let Some(at) = raw.find(CURSOR) {
            let prefix = &raw[..at];
            let col = Line::plain(prefix).display_width() + 1;
            cursor = Some(Position::new(idx + 1, col));
            text.push_str(prefix);
            text.push_str(&raw[at + CURSOR.len_utf8()..]);
        } else {
            text.push_str(raw);
        }
    }

    let cursor = cursor.expect("fixture needs a cursor marker");
    (TextDocument::with_text(&text), cursor)
}

/// Render the document with `[` `]` around each matched paren.
pub fn render_marks<D: Document + ?Sized>(doc: &D, found: &MatchResult) -> String {
    let mut out = Vec::new();
    for row in 1..=doc.line_count() {
        let line = doc.line_at(row).expect("row in range");
        let marked: Vec<usize> = found.positions_on_row(row).map(|p| p.col).collect();
        let mut rendered = String::new();
        for glyph in line.glyphs() {
            if marked.contains(&glyph.column) {
                rendered.push('[');
                rendered.push_str(glyph.as_str());
                rendered.push(']');
            } else {
                rendered.push_str(glyph.as_str());
            }
        }
        out.push(rendered);
    }
    out.join("\n")
}
