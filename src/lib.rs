//! `paren_hl` - enclosing parenthesis highlighting for text editors.
//!
//! For a cursor inside the visible window of a document, finds the nearest
//! unmatched `(` before it and the nearest unmatched `)` at or after it,
//! looking only at the rows on screen. A [`ParenHighlighter`] decides when
//! to re-scan from host events and tells the renderer which columns to
//! mark.

// Crate-level lint configuration
#![forbid(unsafe_code)]
#![allow(clippy::module_name_repetitions)] // Allow scan::Scanner etc
#![allow(clippy::missing_errors_doc)] // Docs WIP
#![allow(clippy::missing_panics_doc)] // Docs WIP
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::inherent_to_string)] // to_string methods are convenient
#![allow(clippy::should_implement_trait)] // from_str naming is intentional
#![allow(clippy::cast_possible_truncation)] // Intentional color channel casts
#![allow(clippy::cast_sign_loss)] // Intentional color channel casts
#![allow(clippy::collapsible_if)] // Sometimes nested ifs are clearer

pub mod color;
pub mod config;
pub mod error;
pub mod log;
pub mod render;
pub mod scan;
pub mod style;
pub mod text;
pub mod tracker;
pub mod unicode;
pub mod view;

// Re-export core types at crate root
pub use color::Rgba;
pub use config::{ConfigStore, HIGHLIGHT_BG_SETTING, MAX_LINE_LENGTH_SETTING, Settings};
pub use error::{Error, Result};
pub use log::{LogLevel, clear_log_callback, emit_log, set_log_callback};
pub use render::{AssociateStyle, ColumnHighlight, StyleProvider, apply_highlights, attributes_for_row};
pub use scan::{DEFAULT_MAX_LINE_WIDTH, MatchResult, Scanner, find_enclosing_parens};
pub use style::{Style, TextAttributes};
pub use text::{Document, Glyph, Line, LineDocument, TextDocument};
pub use tracker::{
    BufferKind, DirtyState, EventKind, EventOutcome, HostEvent, ModifyScope, ParenHighlighter,
    ViewInfo,
};
pub use unicode::WidthMethod;
pub use view::{Position, Viewport};
