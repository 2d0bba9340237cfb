//! Entry list widget — the scrollable middle pane.
//!
//! Shows either the entries of the active category or, while a query is
//! typed, the ranked search results with their score and match type.
//!
//! # Navigation (when pane is focused)
//!
//! | Key | Action |
//! |-----|--------|
//! | `↑` / `k` | Move cursor up one row (scrolls view if needed) |
//! | `↓` / `j` | Move cursor down one row |
//! | `PageUp` / `Ctrl+u` | Move up one page |
//! | `PageDown` / `Ctrl+d` | Move down one page |
//! | `g` / `G` | Jump to the first / last row |
//!
//! # Scroll semantics
//!
//! `offset` = index of the first visible row. `cursor` = absolute index into
//! `rows`. The cursor is always kept within the visible window.

use std::cell::Cell;

use crate::event::{AppEvent, Direction};
use crate::theme::Theme;
use astrolex_core::{GlossaryEntry, MatchType, SearchResult};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, StatefulWidget, Widget,
    },
};

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

/// One row of the list: an entry, plus its score when it came from a search.
#[derive(Debug, Clone, Copy)]
pub struct EntryRow {
    pub entry: &'static GlossaryEntry,
    pub hit: Option<(u8, MatchType)>,
}

impl From<&'static GlossaryEntry> for EntryRow {
    fn from(entry: &'static GlossaryEntry) -> Self {
        Self { entry, hit: None }
    }
}

impl From<SearchResult<'static>> for EntryRow {
    fn from(result: SearchResult<'static>) -> Self {
        Self {
            entry: result.entry,
            hit: Some((result.relevance, result.match_type)),
        }
    }
}

pub struct EntryListState {
    pub rows: Vec<EntryRow>,
    /// Pane title, e.g. the category name or the active query.
    pub title: String,
    /// Absolute index into `rows` of the highlighted row.
    pub cursor: usize,
    /// Index of the first visible row.
    pub offset: usize,
    /// Cached from the last render so `handle()` can page by screenfuls.
    last_height: Cell<usize>,
}

impl Default for EntryListState {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            title: "Entries".to_string(),
            cursor: 0,
            offset: 0,
            last_height: Cell::new(20),
        }
    }
}

impl EntryListState {
    /// Replace the rows and move the cursor back to the top.
    pub fn set_rows(&mut self, title: impl Into<String>, rows: Vec<EntryRow>) {
        self.title = title.into();
        self.rows = rows;
        self.cursor = 0;
        self.offset = 0;
    }

    pub fn selected(&self) -> Option<&'static GlossaryEntry> {
        self.rows.get(self.cursor).map(|row| row.entry)
    }

    /// Move the cursor onto the entry with `id`. Returns `false` when absent.
    pub fn select_id(&mut self, id: &str) -> bool {
        let Some(pos) = self.rows.iter().position(|row| row.entry.id == id) else {
            return false;
        };
        self.cursor = pos;
        self.follow_cursor();
        true
    }

    fn height(&self) -> usize {
        self.last_height.get().max(1)
    }

    /// Pull the window so the cursor is visible.
    fn follow_cursor(&mut self) {
        let height = self.height();
        if self.cursor < self.offset {
            self.offset = self.cursor;
        } else if self.cursor >= self.offset + height {
            self.offset = self.cursor + 1 - height;
        }
    }

    /// Handle a navigation event from the app shell.
    pub fn handle(&mut self, event: &AppEvent) {
        let total = self.rows.len();
        if total == 0 {
            return;
        }
        let last = total - 1;

        match event {
            AppEvent::Nav(Direction::Up) => {
                self.cursor = self.cursor.saturating_sub(1);
            }
            AppEvent::Nav(Direction::Down) => {
                self.cursor = (self.cursor + 1).min(last);
            }
            AppEvent::ScrollUp => {
                self.cursor = self.cursor.saturating_sub(self.height());
            }
            AppEvent::ScrollDown => {
                self.cursor = (self.cursor + self.height()).min(last);
            }
            AppEvent::ScrollToTop => self.cursor = 0,
            AppEvent::ScrollToBottom => self.cursor = last,
            _ => return,
        }
        self.follow_cursor();
        tracing::debug!(cursor = self.cursor, offset = self.offset, "list: moved");
    }
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

pub struct EntryList<'a> {
    state: &'a EntryListState,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> EntryList<'a> {
    pub fn new(state: &'a EntryListState, focused: bool, theme: &'a Theme) -> Self {
        Self { state, focused, theme }
    }
}

impl Widget for EntryList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            self.theme.border_focused
        } else {
            self.theme.border_unfocused
        };

        let title = format!("{} ({})", self.state.title, self.state.rows.len());
        let block = Block::bordered().title(title).border_style(border_style);
        let inner = block.inner(area);
        block.render(area, buf);

        let height = inner.height as usize;
        self.state.last_height.set(height);

        let total = self.state.rows.len();
        if total == 0 {
            Paragraph::new(Line::from(Span::styled("no matching entries", self.theme.muted)))
                .render(inner, buf);
            return;
        }

        let start = self.state.offset.min(total);
        let end = (start + height).min(total);

        let lines: Vec<Line<'static>> = self.state.rows[start..end]
            .iter()
            .enumerate()
            .map(|(row, entry_row)| {
                let mut line = render_row(entry_row, self.theme);
                if start + row == self.state.cursor {
                    let modifier = if self.focused {
                        Modifier::REVERSED
                    } else {
                        Modifier::BOLD
                    };
                    line = line.patch_style(Style::default().add_modifier(modifier));
                }
                line
            })
            .collect();

        // 1-column scrollbar strip inside the borders
        let text_area = Rect { width: inner.width.saturating_sub(1), ..inner };
        let sb_area = Rect {
            x: inner.right().saturating_sub(1),
            width: 1,
            ..inner
        };

        Paragraph::new(lines).render(text_area, buf);

        let mut sb_state = ScrollbarState::new(total)
            .position(start)
            .viewport_content_length(height);
        StatefulWidget::render(
            Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(None)
                .end_symbol(None),
            sb_area,
            buf,
            &mut sb_state,
        );
    }
}

// ---------------------------------------------------------------------------
// Row rendering
// ---------------------------------------------------------------------------

fn render_row(row: &EntryRow, theme: &Theme) -> Line<'static> {
    let mut spans: Vec<Span<'static>> = Vec::new();

    if let Some((relevance, match_type)) = row.hit {
        spans.push(Span::styled(
            format!("{relevance:>3} {:<10} ", match_type.to_string()),
            theme.match_style(match_type),
        ));
    }

    spans.push(Span::raw(row.entry.term.to_string()));
    spans.push(Span::styled(format!("  {}", row.entry.category), theme.muted));

    Line::from(spans)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
