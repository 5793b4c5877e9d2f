//! Turning a match into per-column highlight instructions.
//!
//! The highlighter does not draw. For each row about to be rendered it
//! hands back the columns to mark and the style to merge into them; the
//! host combines that with whatever the columns already show.

use crate::color::Rgba;
use crate::config::{ConfigStore, HIGHLIGHT_BG_SETTING};
use crate::log::{LogLevel, emit_log_with};
use crate::scan::MatchResult;
use crate::style::Style;

/// Supplies the style used to mark matched parens.
pub trait StyleProvider {
    /// The "associate" style merged into a matched paren's column.
    fn associate(&self) -> Style;
}

impl StyleProvider for Style {
    fn associate(&self) -> Style {
        *self
    }
}

/// Default highlight style: bold + inverse, or a background color when one
/// is configured.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AssociateStyle {
    style: Style,
}

impl Default for AssociateStyle {
    fn default() -> Self {
        Self {
            style: Style::bold().with_inverse(),
        }
    }
}

impl AssociateStyle {
    /// Highlight with a background color instead of inverse video.
    #[must_use]
    pub fn with_background(bg: Rgba) -> Self {
        Self {
            style: Style::bg(bg).with_bold(),
        }
    }

    /// Build from `paren-hl-highlight-bg`, falling back to the default when
    /// the setting is missing or not a color.
    #[must_use]
    pub fn from_settings<S>(store: &S) -> Self
    where
        S: ConfigStore + ?Sized,
    {
        let Some(raw) = store.get(HIGHLIGHT_BG_SETTING) else {
            return Self::default();
        };
        match Rgba::parse_hex(raw) {
            Ok(bg) => {
                emit_log_with(LogLevel::Debug, || format!("paren highlight background {bg}"));
                Self::with_background(bg)
            }
            Err(err) => {
                emit_log_with(LogLevel::Warn, || format!("{HIGHLIGHT_BG_SETTING}: {err}"));
                Self::default()
            }
        }
    }
}

impl StyleProvider for AssociateStyle {
    fn associate(&self) -> Style {
        self.style
    }
}

/// A style to merge into one display column of the row being drawn.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColumnHighlight {
    /// 1-based display column.
    pub column: usize,
    pub style: Style,
}

/// Highlights for `row`: one per matched paren on that row, open first.
#[must_use]
pub fn attributes_for_row(found: &MatchResult, row: usize, style: Style) -> Vec<ColumnHighlight> {
    found
        .positions_on_row(row)
        .map(|pos| ColumnHighlight {
            column: pos.col,
            style,
        })
        .collect()
}

/// Merge highlights into a row's existing per-column styles.
///
/// `cells[0]` is column 1. Highlights past the end of `cells` are ignored.
pub fn apply_highlights(cells: &mut [Style], highlights: &[ColumnHighlight]) {
    for hl in highlights {
        if let Some(cell) = hl
            .column
            .checked_sub(1)
            .and_then(|idx| cells.get_mut(idx))
        {
            *cell = cell.merge(hl.style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::style::TextAttributes;
    use crate::view::Position;

    fn found(open: (usize, usize), close: (usize, usize)) -> MatchResult {
        MatchResult {
            open: Some(Position::new(open.0, open.1)),
            close: Some(Position::new(close.0, close.1)),
        }
    }

    #[test]
    fn test_both_halves_on_one_row() {
        let hl = attributes_for_row(&found((3, 2), (3, 7)), 3, Style::bold());
        let cols: Vec<_> = hl.iter().map(|h| h.column).collect();
        assert_eq!(cols, vec![2, 7]);
        assert!(hl.iter().all(|h| h.style == Style::bold()));
    }

    #[test]
    fn test_only_matching_row_gets_highlights() {
        let result = found((1, 4), (5, 1));
        assert_eq!(attributes_for_row(&result, 1, Style::bold()).len(), 1);
        assert!(attributes_for_row(&result, 2, Style::bold()).is_empty());
        assert_eq!(attributes_for_row(&result, 5, Style::bold())[0].column, 1);
    }

    #[test]
    fn test_unset_result_has_no_highlights() {
        assert!(attributes_for_row(&MatchResult::UNSET, 1, Style::bold()).is_empty());
    }

    #[test]
    fn test_apply_highlights_merges() {
        let mut cells = vec![Style::fg(Rgba::RED); 4];
        let highlights = [
            ColumnHighlight {
                column: 2,
                style: Style::inverse(),
            },
            ColumnHighlight {
                column: 9,
                style: Style::inverse(),
            },
            ColumnHighlight {
                column: 0,
                style: Style::inverse(),
            },
        ];
        apply_highlights(&mut cells, &highlights);

        assert_eq!(cells[0], Style::fg(Rgba::RED));
        assert_eq!(cells[1].fg, Some(Rgba::RED));
        assert!(cells[1].attributes.contains(TextAttributes::INVERSE));
        assert_eq!(cells[3], Style::fg(Rgba::RED));
    }

    #[test]
    fn test_associate_style_from_settings() {
        let mut settings = Settings::new();
        assert_eq!(AssociateStyle::from_settings(&settings), AssociateStyle::default());

        settings.set(HIGHLIGHT_BG_SETTING, "#102030");
        let style = AssociateStyle::from_settings(&settings).associate();
        assert_eq!(style.bg, Some(Rgba::from_rgb_u8(0x10, 0x20, 0x30)));
        assert!(style.attributes.contains(TextAttributes::BOLD));

        settings.set(HIGHLIGHT_BG_SETTING, "purple");
        assert_eq!(AssociateStyle::from_settings(&settings), AssociateStyle::default());
    }

    #[test]
    fn test_configured_background_is_logged() {
        let _guard = crate::log::test_support::lock();
        let seen = crate::log::test_support::capture();
        let mut settings = Settings::new();
        settings.set(HIGHLIGHT_BG_SETTING, "#3A3A5C");
        let _ = AssociateStyle::from_settings(&settings);
        crate::log::clear_log_callback();

        let seen = seen.lock().unwrap();
        assert!(
            seen.iter()
                .any(|(level, msg)| *level == LogLevel::Debug && msg.ends_with("#3a3a5c"))
        );
    }

    #[test]
    fn test_fixed_style_provider() {
        let provider = Style::underline();
        assert_eq!(provider.associate(), Style::underline());
    }
}
