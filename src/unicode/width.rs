//! Display width calculation for terminal rendering.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Width calculation method for ambiguous-width characters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WidthMethod {
    /// POSIX-like wcwidth: ambiguous width = 1.
    #[default]
    WcWidth,
    /// Unicode East Asian Width: ambiguous width = 2.
    Unicode,
}

/// Get the display width of a string in terminal columns.
#[must_use]
pub fn display_width(s: &str, method: WidthMethod) -> usize {
    match method {
        WidthMethod::WcWidth => UnicodeWidthStr::width(s),
        WidthMethod::Unicode => UnicodeWidthStr::width_cjk(s),
    }
}

/// Get the display width of a character in terminal columns.
///
/// Single-char glyphs are laid out through here. ASCII printable
/// characters (0x20-0x7E) take a fast path and are always width 1.
#[inline]
#[must_use]
pub fn display_width_char(c: char, method: WidthMethod) -> usize {
    if c.is_ascii() && (' '..='~').contains(&c) {
        return 1;
    }
    if c < ' ' {
        return 0;
    }
    match method {
        WidthMethod::WcWidth => UnicodeWidthChar::width(c).unwrap_or(0),
        WidthMethod::Unicode => UnicodeWidthChar::width_cjk(c).unwrap_or(0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_width() {
        assert_eq!(display_width("(a b)", WidthMethod::WcWidth), 5);
        assert_eq!(display_width_char(')', WidthMethod::WcWidth), 1);
    }

    #[test]
    fn test_cjk_width() {
        assert_eq!(display_width("漢字", WidthMethod::WcWidth), 4);
        assert_eq!(display_width_char('漢', WidthMethod::WcWidth), 2);
    }

    #[test]
    fn test_control_is_zero_width() {
        assert_eq!(display_width_char('\u{7}', WidthMethod::WcWidth), 0);
    }

    #[test]
    fn test_width_methods() {
        // Circled digit one (U+2460) is ambiguous width.
        let ch = '①';
        assert_eq!(display_width_char(ch, WidthMethod::WcWidth), 1);
        assert_eq!(display_width_char(ch, WidthMethod::Unicode), 2);
    }
}
