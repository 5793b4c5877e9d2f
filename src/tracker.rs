//! Event handling: deciding when to re-scan.
//!
//! [`ParenHighlighter`] is the single context object a host keeps per
//! editor. It owns the settings, the dirty state, and the last match.
//! The host feeds it [`HostEvent`]s together with the current document and
//! viewport and gets back an [`EventOutcome`].
//!
//! | event             | view filter        | effect                                  |
//! |-------------------|--------------------|-----------------------------------------|
//! | `CursorMoved`     | any file view      | mark dirty                              |
//! | `BufferModified`  | active file view   | mark dirty, scan now                    |
//! | `PreRenderLine`   | active file view   | scan if dirty, mark clean, highlight row|
//!
//! Scans run to completion inside [`ParenHighlighter::handle_event`].
//!
//! # Examples
//!
//! ```
//! use paren_hl::{HostEvent, ParenHighlighter, Position, TextDocument, ViewInfo, Viewport};
//!
//! let doc = TextDocument::with_text("print(x)");
//! let viewport = Viewport::from_scroll(0, 24, 1, Position::new(1, 7));
//! let view = ViewInfo::active_file();
//!
//! let mut hl = ParenHighlighter::new();
//! hl.handle_event(&doc, &viewport, &HostEvent::cursor_moved(view));
//! let out = hl.handle_event(&doc, &viewport, &HostEvent::pre_render_line(view, 1));
//!
//! assert!(out.rescanned);
//! let cols: Vec<_> = out.highlights.iter().map(|h| h.column).collect();
//! assert_eq!(cols, vec![6, 8]);
//! ```

use crate::config::{ConfigStore, Settings, ensure_defaults, max_line_width};
use crate::log::{LogLevel, emit_log_with};
use crate::render::{AssociateStyle, ColumnHighlight, StyleProvider, attributes_for_row};
use crate::scan::{MatchResult, Scanner};
use crate::style::Style;
use crate::text::Document;
use crate::view::Viewport;
use std::fmt;

/// Whether the stored match may be stale.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DirtyState {
    #[default]
    Clean,
    Dirty,
}

/// What kind of buffer a view shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BufferKind {
    /// A regular text file.
    File,
    /// Anything else: logs, prompts, scratch output.
    Special,
}

/// The view an event originated from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewInfo {
    pub kind: BufferKind,
    /// Whether this view has focus.
    pub active: bool,
}

impl ViewInfo {
    /// The focused file view.
    #[must_use]
    pub const fn active_file() -> Self {
        Self {
            kind: BufferKind::File,
            active: true,
        }
    }

    /// A file view without focus.
    #[must_use]
    pub const fn background_file() -> Self {
        Self {
            kind: BufferKind::File,
            active: false,
        }
    }

    /// A non-file view.
    #[must_use]
    pub const fn special(active: bool) -> Self {
        Self {
            kind: BufferKind::Special,
            active,
        }
    }

    #[must_use]
    pub const fn is_file(&self) -> bool {
        matches!(self.kind, BufferKind::File)
    }

    #[must_use]
    pub const fn is_active_file(&self) -> bool {
        self.active && self.is_file()
    }
}

/// Which part of the buffer an edit touched.
///
/// Only reported in diagnostics; every scan starts from scratch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModifyScope {
    Line(usize),
    Lines { first: usize, last: usize },
    Whole,
}

impl fmt::Display for ModifyScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Line(row) => write!(f, "row {row}"),
            Self::Lines { first, last } => write!(f, "rows {first}-{last}"),
            Self::Whole => f.write_str("whole buffer"),
        }
    }
}

/// What happened in the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventKind {
    CursorMoved,
    BufferModified { scope: ModifyScope },
    PreRenderLine { row: usize },
}

/// A host notification tagged with its originating view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HostEvent {
    pub view: ViewInfo,
    pub kind: EventKind,
}

impl HostEvent {
    #[must_use]
    pub const fn cursor_moved(view: ViewInfo) -> Self {
        Self {
            view,
            kind: EventKind::CursorMoved,
        }
    }

    #[must_use]
    pub const fn buffer_modified(view: ViewInfo, scope: ModifyScope) -> Self {
        Self {
            view,
            kind: EventKind::BufferModified { scope },
        }
    }

    #[must_use]
    pub const fn pre_render_line(view: ViewInfo, row: usize) -> Self {
        Self {
            view,
            kind: EventKind::PreRenderLine { row },
        }
    }
}

/// Result of handling one event.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EventOutcome {
    /// A scan ran while handling the event.
    pub rescanned: bool,
    /// Columns to highlight on the row being drawn (pre-render only).
    pub highlights: Vec<ColumnHighlight>,
}

impl EventOutcome {
    const IGNORED: Self = Self {
        rescanned: false,
        highlights: Vec::new(),
    };
}

/// Per-editor highlighting context.
pub struct ParenHighlighter<S = Settings> {
    settings: S,
    state: DirtyState,
    last_match: MatchResult,
    configured_style: AssociateStyle,
    settings_touched: bool,
    style_provider: Option<Box<dyn StyleProvider>>,
}

impl ParenHighlighter<Settings> {
    /// Boot with an empty settings store.
    #[must_use]
    pub fn new() -> Self {
        Self::boot(Settings::new())
    }
}

impl Default for ParenHighlighter<Settings> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> ParenHighlighter<S>
where
    S: ConfigStore,
{
    /// Boot over an existing settings store, seeding missing defaults.
    #[must_use]
    pub fn boot(mut settings: S) -> Self {
        ensure_defaults(&mut settings);
        let configured_style = AssociateStyle::from_settings(&settings);
        Self {
            settings,
            state: DirtyState::Clean,
            last_match: MatchResult::UNSET,
            configured_style,
            settings_touched: false,
            style_provider: None,
        }
    }

    /// Use a custom highlight style source instead of the configured one.
    #[must_use]
    pub fn with_style_provider<P>(mut self, provider: P) -> Self
    where
        P: StyleProvider + 'static,
    {
        self.style_provider = Some(Box::new(provider));
        self
    }

    /// Current dirty state.
    #[must_use]
    pub fn state(&self) -> DirtyState {
        self.state
    }

    /// Result of the most recent scan.
    #[must_use]
    pub fn last_match(&self) -> &MatchResult {
        &self.last_match
    }

    #[must_use]
    pub fn settings(&self) -> &S {
        &self.settings
    }

    /// Mutable settings. Style settings are re-read on the next highlight.
    pub fn settings_mut(&mut self) -> &mut S {
        self.settings_touched = true;
        &mut self.settings
    }

    /// Force the next pre-render to re-scan.
    pub fn mark_dirty(&mut self) {
        self.state = DirtyState::Dirty;
    }

    /// Scan now and store the result. Does not change the dirty state.
    pub fn rescan<D>(&mut self, document: &D, viewport: &Viewport) -> MatchResult
    where
        D: Document + ?Sized,
    {
        let scanner = Scanner::new(max_line_width(&self.settings));
        self.last_match = scanner.scan(document, viewport);
        emit_log_with(LogLevel::Debug, || {
            format!(
                "paren scan rows {}-{} from {:?}: {:?}",
                viewport.first_visible_row, viewport.last_visible_row, viewport.cursor, self.last_match
            )
        });
        self.last_match
    }

    /// Highlights for `row` from the stored match.
    pub fn highlights_for_row(&mut self, row: usize) -> Vec<ColumnHighlight> {
        let style = self.highlight_style();
        attributes_for_row(&self.last_match, row, style)
    }

    /// Handle one host event.
    pub fn handle_event<D>(&mut self, document: &D, viewport: &Viewport, event: &HostEvent) -> EventOutcome
    where
        D: Document + ?Sized,
    {
        match event.kind {
            EventKind::CursorMoved => {
                if event.view.is_file() {
                    self.mark_dirty();
                }
                EventOutcome::IGNORED
            }
            EventKind::BufferModified { scope } => {
                if !event.view.is_active_file() {
                    return EventOutcome::IGNORED;
                }
                emit_log_with(LogLevel::Debug, || format!("buffer modified ({scope}), rescanning"));
                self.mark_dirty();
                self.rescan(document, viewport);
                EventOutcome {
                    rescanned: true,
                    highlights: Vec::new(),
                }
            }
            EventKind::PreRenderLine { row } => {
                if !event.view.is_active_file() {
                    return EventOutcome::IGNORED;
                }
                let rescanned = self.state == DirtyState::Dirty;
                if rescanned {
                    self.rescan(document, viewport);
                    self.state = DirtyState::Clean;
                }
                EventOutcome {
                    rescanned,
                    highlights: self.highlights_for_row(row),
                }
            }
        }
    }

    fn highlight_style(&mut self) -> Style {
        if let Some(provider) = &self.style_provider {
            return provider.associate();
        }
        if self.settings_touched {
            self.configured_style = AssociateStyle::from_settings(&self.settings);
            self.settings_touched = false;
        }
        self.configured_style.associate()
    }
}

impl<S: fmt::Debug> fmt::Debug for ParenHighlighter<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParenHighlighter")
            .field("settings", &self.settings)
            .field("state", &self.state)
            .field("last_match", &self.last_match)
            .field("custom_style", &self.style_provider.is_some())
            .finish_non_exhaustive()
    }
}
