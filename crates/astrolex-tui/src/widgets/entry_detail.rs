//! Entry detail widget — the right-hand pane showing the selected entry.
//!
//! Known terms inside the definition are cross-linked: the [`CrossLinker`]
//! wraps every match in private marker characters, and [`link_spans`] turns
//! the marked text back into spans styled with `theme.link`.

use crate::event::{AppEvent, Direction};
use crate::theme::Theme;
use astrolex_core::{search::CrossLinker, Glossary, GlossaryEntry};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget, Wrap},
};

const LINK_OPEN: char = '\u{1}';
const LINK_CLOSE: char = '\u{2}';
const PAGE_STEP: u16 = 10;

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct EntryDetailState {
    /// Vertical scroll in lines.
    pub scroll: u16,
    /// Random picks from the entry's category, redrawn on `r`.
    pub see_also: Vec<&'static GlossaryEntry>,
    pub show_etymology: bool,
}

impl EntryDetailState {
    pub fn handle(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Nav(Direction::Up) => self.scroll = self.scroll.saturating_sub(1),
            AppEvent::Nav(Direction::Down) => self.scroll = self.scroll.saturating_add(1),
            AppEvent::ScrollUp => self.scroll = self.scroll.saturating_sub(PAGE_STEP),
            AppEvent::ScrollDown => self.scroll = self.scroll.saturating_add(PAGE_STEP),
            AppEvent::ScrollToTop => self.scroll = 0,
            _ => {}
        }
    }
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

pub struct EntryDetail<'a> {
    entry: Option<&'a GlossaryEntry>,
    state: &'a EntryDetailState,
    glossary: &'a Glossary<'a>,
    linker: &'a CrossLinker<'a>,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> EntryDetail<'a> {
    pub fn new(
        entry: Option<&'a GlossaryEntry>,
        state: &'a EntryDetailState,
        glossary: &'a Glossary<'a>,
        linker: &'a CrossLinker<'a>,
        focused: bool,
        theme: &'a Theme,
    ) -> Self {
        Self { entry, state, glossary, linker, focused, theme }
    }

    fn lines(&self, entry: &GlossaryEntry) -> Vec<Line<'static>> {
        let theme = self.theme;
        let mut lines = Vec::new();

        let mut heading = vec![Span::styled(entry.term.to_string(), theme.heading)];
        if let Some(category) = self.glossary.category_by_id(entry.category) {
            heading.push(Span::raw("  "));
            heading.push(Span::styled(
                category.name.to_string(),
                theme.category_style(category.color),
            ));
        }
        lines.push(Line::from(heading));
        lines.push(Line::default());

        let marked = self
            .linker
            .link_with(entry.definition, |e| format!("{LINK_OPEN}{}{LINK_CLOSE}", e.term));
        lines.push(Line::from(link_spans(&marked, theme)));

        if self.state.show_etymology {
            if let Some(etymology) = entry.etymology {
                lines.push(Line::default());
                lines.push(Line::from(Span::styled("Etymology", theme.label)));
                lines.push(Line::from(etymology.to_string()));
            }
            if !entry.examples.is_empty() {
                lines.push(Line::default());
                lines.push(Line::from(Span::styled("Examples", theme.label)));
                for example in entry.examples {
                    lines.push(Line::from(format!("  • {example}")));
                }
            }
        }

        lines.push(Line::default());
        lines.push(label_line(
            "Tags",
            entry.tags.iter().map(|t| format!("#{t}")).collect(),
            theme,
        ));

        let related = self.glossary.related_entries(entry.id);
        lines.push(label_line(
            "Related",
            related.iter().map(|e| e.term.to_string()).collect(),
            theme,
        ));
        lines.push(label_line(
            "See also",
            self.state.see_also.iter().map(|e| e.term.to_string()).collect(),
            theme,
        ));

        lines
    }
}

impl Widget for EntryDetail<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            self.theme.border_focused
        } else {
            self.theme.border_unfocused
        };
        let block = Block::bordered().title("Entry").border_style(border_style);

        let lines = match self.entry {
            Some(entry) => self.lines(entry),
            None => vec![Line::from(Span::styled("no entry selected", self.theme.muted))],
        };

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((self.state.scroll, 0))
            .render(area, buf);
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// `Label: a, b, c`, or `Label: none` when `items` is empty.
fn label_line(label: &str, items: Vec<String>, theme: &Theme) -> Line<'static> {
    let value = if items.is_empty() {
        Span::styled("none", theme.muted)
    } else {
        Span::raw(items.join(", "))
    };
    Line::from(vec![Span::styled(format!("{label}: "), theme.label), value])
}

/// Split marker-delimited text into plain and link-styled spans.
///
/// Markers can nest when a later term matched inside an earlier link; any
/// text inside at least one open marker is styled as a link.
pub fn link_spans(marked: &str, theme: &Theme) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    let mut current = String::new();
    let mut depth = 0usize;

    let mut flush = |current: &mut String, depth: usize| {
        if current.is_empty() {
            return;
        }
        let text = std::mem::take(current);
        if depth > 0 {
            spans.push(Span::styled(text, theme.link));
        } else {
            spans.push(Span::raw(text));
        }
    };

    for c in marked.chars() {
        match c {
            LINK_OPEN => {
                flush(&mut current, depth);
                depth += 1;
            }
            LINK_CLOSE => {
                flush(&mut current, depth);
                depth = depth.saturating_sub(1);
            }
            _ => current.push(c),
        }
    }
    flush(&mut current, depth);
    spans
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
