//! Unicode utilities for glyph segmentation and display width.

mod grapheme;
mod width;

pub use grapheme::{GlyphInfo, glyph_layout};
pub use width::{WidthMethod, display_width, display_width_char};
