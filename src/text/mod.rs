//! Line-oriented text storage for paren scans.
//!
//! Key types:
//!
//! - [`Document`]: read-only access to 1-based rows, the only thing a scan needs
//! - [`TextDocument`]: rope-backed editable document
//! - [`LineDocument`]: fixed list of pre-laid-out lines
//! - [`Line`] / [`Glyph`]: a line's glyphs addressed by display column
//!
//! # Examples
//!
//! ```
//! use paren_hl::{Document, TextDocument};
//!
//! let mut doc = TextDocument::with_text("call(a, b)\n");
//! assert_eq!(doc.line_count(), 2);
//!
//! let line = doc.line_at(1).unwrap();
//! assert_eq!(line.glyph_at_column(5).unwrap().character(), '(');
//!
//! doc.insert(1, 1, "re");
//! assert_eq!(doc.line_text(1).unwrap(), "recall(a, b)");
//! ```

mod document;
mod line;
mod rope;

pub use document::{DEFAULT_TAB_WIDTH, Document, LineDocument, TextDocument};
pub use line::{Glyph, Line};
pub use rope::RopeWrapper;
