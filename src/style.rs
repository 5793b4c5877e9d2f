//! Render attributes for highlighted columns.
//!
//! - [`TextAttributes`]: Bitflags for bold, underline, inverse, etc.
//! - [`Style`]: Colors plus attributes, combinable with [`Style::merge`]
//!
//! A paren highlight never replaces what a column already shows; it is
//! merged on top of the column's existing style.
//!
//! # Examples
//!
//! ```
//! use paren_hl::{Rgba, Style, TextAttributes};
//!
//! let syntax = Style::fg(Rgba::RED);
//! let shown = syntax.merge(Style::bold().with_inverse());
//!
//! assert_eq!(shown.fg, Some(Rgba::RED));
//! assert!(shown.attributes.contains(TextAttributes::BOLD | TextAttributes::INVERSE));
//! ```

use crate::color::Rgba;
use bitflags::bitflags;

bitflags! {
    /// Text rendering attributes.
    ///
    /// Attributes combine with bitwise OR. Not all terminals support all
    /// attributes.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
    pub struct TextAttributes: u8 {
        /// Bold/increased intensity.
        const BOLD          = 0x01;
        /// Dim/decreased intensity.
        const DIM           = 0x02;
        /// Italic (not widely supported).
        const ITALIC        = 0x04;
        /// Underlined text.
        const UNDERLINE     = 0x08;
        /// Blinking text (rarely supported).
        const BLINK         = 0x10;
        /// Swapped foreground/background.
        const INVERSE       = 0x20;
        /// Hidden/invisible text.
        const HIDDEN        = 0x40;
        /// Strikethrough text.
        const STRIKETHROUGH = 0x80;
    }
}

/// Text style: optional colors plus attributes.
///
/// `None` for a color means "leave whatever is underneath".
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Style {
    /// Foreground color (None = unchanged).
    pub fg: Option<Rgba>,
    /// Background color (None = unchanged).
    pub bg: Option<Rgba>,
    /// Text rendering attributes.
    pub attributes: TextAttributes,
}

impl Style {
    /// Empty style with no colors or attributes.
    pub const NONE: Self = Self::with_only(TextAttributes::empty());

    const fn with_only(attributes: TextAttributes) -> Self {
        Self {
            fg: None,
            bg: None,
            attributes,
        }
    }

    /// Create a style with only foreground color.
    #[must_use]
    pub const fn fg(color: Rgba) -> Self {
        Self::NONE.with_fg(color)
    }

    /// Create a style with only background color.
    #[must_use]
    pub const fn bg(color: Rgba) -> Self {
        Self::NONE.with_bg(color)
    }

    /// Create a bold style.
    #[must_use]
    pub const fn bold() -> Self {
        Self::with_only(TextAttributes::BOLD)
    }

    /// Create an underline style.
    #[must_use]
    pub const fn underline() -> Self {
        Self::with_only(TextAttributes::UNDERLINE)
    }

    /// Create an inverse (swapped fg/bg) style.
    #[must_use]
    pub const fn inverse() -> Self {
        Self::with_only(TextAttributes::INVERSE)
    }

    /// Return a new style with the specified foreground color.
    #[must_use]
    pub const fn with_fg(self, color: Rgba) -> Self {
        Self {
            fg: Some(color),
            ..self
        }
    }

    /// Return a new style with the specified background color.
    #[must_use]
    pub const fn with_bg(self, color: Rgba) -> Self {
        Self {
            bg: Some(color),
            ..self
        }
    }

    /// Return a new style with the specified attributes added.
    #[must_use]
    pub const fn with_attributes(self, attrs: TextAttributes) -> Self {
        Self {
            attributes: self.attributes.union(attrs),
            ..self
        }
    }

    /// Return a new style with the bold attribute added.
    #[must_use]
    pub const fn with_bold(self) -> Self {
        self.with_attributes(TextAttributes::BOLD)
    }

    /// Return a new style with the inverse attribute added.
    #[must_use]
    pub const fn with_inverse(self) -> Self {
        self.with_attributes(TextAttributes::INVERSE)
    }

    /// Check if this style has any non-default properties.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fg.is_none() && self.bg.is_none() && self.attributes.is_empty()
    }

    /// Merge two styles, with `other` taking precedence for set colors.
    /// Attributes are OR-ed together.
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        Self {
            fg: other.fg.or(self.fg),
            bg: other.bg.or(self.bg),
            attributes: self.attributes | other.attributes,
        }
    }
}
