//! Top-level application state and the main event loop.
//!
//! [`App::run`] sets up the terminal, drives the crossterm event loop, and
//! tears everything down cleanly on exit or panic.

use crate::{
    commands::{execute_command, Command},
    event::{self, AppEvent, Direction},
    theme::Theme,
    widgets::{
        category_tree::{CategoryTree, CategoryTreeState, ALL},
        command_bar::{CommandBar, CommandBarOutcome, CommandBarState},
        entry_detail::{EntryDetail, EntryDetailState},
        entry_list::{EntryList, EntryListState, EntryRow},
        help::HelpPopup,
        query_bar::{QueryBar, QueryBarState},
    },
};
use astrolex_core::{
    config::Config,
    index::TermIndex,
    search::{random_related, search, CrossLinker},
    Glossary, GlossaryEntry,
};
use crossterm::{
    event::{self as ct_event, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use rand::rngs::StdRng;
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction as LayoutDir, Layout, Rect},
    Frame, Terminal,
};
use std::{io, time::Duration};

// ---------------------------------------------------------------------------
// Focus
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Tree,
    List,
    Detail,
    QueryBar,
    /// Vim-style `:` command line is active.
    Command,
}

// ---------------------------------------------------------------------------
// AppState
// ---------------------------------------------------------------------------

pub struct AppState {
    pub glossary: Glossary<'static>,
    pub index: TermIndex<'static>,
    pub linker: CrossLinker<'static>,
    pub tree: CategoryTreeState,
    pub list: EntryListState,
    pub detail: EntryDetailState,
    pub query: QueryBarState,
    pub command_bar: CommandBarState,
    pub focus: Focus,
    /// Focus state before entering command mode, restored on exit.
    pub prev_focus: Focus,
    pub theme: Theme,
    pub config: Config,
    pub show_help: bool,
    pub quit: bool,
    rng: StdRng,
}

impl AppState {
    pub fn new(
        glossary: Glossary<'static>,
        config: Config,
        theme: Theme,
        rng: StdRng,
    ) -> anyhow::Result<Self> {
        let index = TermIndex::build(glossary.entries())?;
        let linker = CrossLinker::new(glossary.entries());
        let tree = CategoryTreeState::from_glossary(&glossary);
        let detail = EntryDetailState {
            show_etymology: config.ui.show_etymology,
            ..Default::default()
        };

        let mut state = Self {
            glossary,
            index,
            linker,
            tree,
            list: EntryListState::default(),
            detail,
            query: QueryBarState::default(),
            command_bar: CommandBarState::default(),
            focus: Focus::Tree,
            prev_focus: Focus::Tree,
            theme,
            config,
            show_help: false,
            quit: false,
            rng,
        };
        state.refresh_list();
        Ok(state)
    }

    pub fn selected(&self) -> Option<&'static GlossaryEntry> {
        self.list.selected()
    }

    /// Make `id` (a category id or [`ALL`]) the active filter and clear the
    /// query. Returns `false` for unknown categories.
    pub fn show_category(&mut self, id: &str) -> bool {
        if id != ALL && self.glossary.category_by_id(id).is_none() {
            return false;
        }
        if !self.tree.activate(id) {
            // Node hidden under a collapsed root
            self.tree.active = id.to_string();
        }
        self.query.clear();
        self.refresh_list();
        true
    }

    /// Rebuild the entry list from the query, or from the active category
    /// when the query is blank.
    pub fn refresh_list(&mut self) {
        let entries = self.glossary.entries();
        if !self.query.is_blank() {
            let rows = search(entries, &self.query.query)
                .into_iter()
                .map(EntryRow::from)
                .collect::<Vec<_>>();
            tracing::debug!(query = %self.query.query, hits = rows.len(), "search");
            self.list
                .set_rows(format!("Search: {}", self.query.query.trim()), rows);
        } else if self.tree.active == ALL {
            self.list
                .set_rows("All entries", entries.iter().map(EntryRow::from).collect());
        } else {
            let id = self.tree.active.clone();
            let title = self
                .glossary
                .category_by_id(&id)
                .map(|c| c.name.to_string())
                .unwrap_or_else(|| id.clone());
            let rows = self
                .glossary
                .entries_by_category(&id)
                .into_iter()
                .map(EntryRow::from)
                .collect();
            self.list.set_rows(title, rows);
        }
        self.refresh_detail();
    }

    /// Reset the detail pane for the newly selected entry.
    pub fn refresh_detail(&mut self) {
        self.detail.scroll = 0;
        self.shuffle_see_also();
    }

    pub fn shuffle_see_also(&mut self) {
        self.detail.see_also = match self.list.selected() {
            Some(entry) => random_related(
                self.glossary.entries(),
                entry,
                self.config.search.related_count,
                &mut self.rng,
            ),
            None => Vec::new(),
        };
        tracing::debug!(
            see_also = ?self.detail.see_also.iter().map(|e| e.id).collect::<Vec<_>>(),
            "see also drawn"
        );
    }

    /// First term the current query completes to.
    pub fn completion_hint(&self) -> Option<&'static str> {
        if self.query.is_blank() {
            return None;
        }
        self.index
            .complete(&self.query.query)
            .first()
            .map(|entry| entry.term)
    }
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

pub struct App {
    state: AppState,
}

impl App {
    pub fn new(state: AppState) -> Self {
        App { state }
    }

    /// Set up the terminal, run the event loop, and restore the terminal on exit.
    pub fn run(mut self) -> anyhow::Result<()> {
        install_panic_hook();

        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend)?;

        let result = self.event_loop(&mut terminal);

        // Always restore terminal, even if the loop returned an error
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = terminal.show_cursor();

        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        loop {
            {
                let s = &self.state;
                terminal.draw(|frame| draw(frame, s))?;
            }

            if self.state.quit {
                break;
            }

            if ct_event::poll(Duration::from_millis(16))? {
                match ct_event::read()? {
                    Event::Key(key) if key.kind == crossterm::event::KeyEventKind::Press => {
                        let raw = Event::Key(key);
                        // Use insert-mode mapping when a text widget is focused
                        let app_event = if is_insert_mode(self.state.focus) {
                            event::to_app_event_insert(raw)
                        } else {
                            event::to_app_event(raw)
                        };
                        if let Some(ev) = app_event {
                            tracing::debug!(focus = ?self.state.focus, event = ?ev, "key event");
                            self.handle(ev);
                        }
                    }
                    other => {
                        if let Some(ev) = event::to_app_event(other) {
                            self.handle(ev);
                        }
                    }
                }
            }
        }
        Ok(())
    }

    fn handle(&mut self, event: AppEvent) {
        let s = &mut self.state;

        // Help popup intercepts all events; only close keys pass through.
        if s.show_help {
            match event {
                AppEvent::Char('?') | AppEvent::Escape | AppEvent::Quit => {
                    tracing::debug!("help popup closed");
                    s.show_help = false;
                }
                _ => {}
            }
            return;
        }

        // Command mode intercepts all events.
        if s.focus == Focus::Command {
            match s.command_bar.handle(&event) {
                CommandBarOutcome::Editing => {}
                CommandBarOutcome::Cancelled => s.focus = s.prev_focus,
                CommandBarOutcome::Submitted(input) => match Command::parse(&input) {
                    Ok(cmd) => {
                        s.focus = s.prev_focus;
                        if let Err(msg) = execute_command(s, cmd) {
                            s.command_bar.error = Some(msg);
                            s.focus = Focus::Command;
                        }
                    }
                    // Empty input, just close
                    Err(msg) if msg.is_empty() => s.focus = s.prev_focus,
                    // Show the error; bar stays open
                    Err(msg) => s.command_bar.error = Some(msg),
                },
            }
            return;
        }

        match event {
            // Toggle help (only when not typing in the query bar)
            AppEvent::Char('?') if s.focus != Focus::QueryBar => {
                tracing::debug!("help popup opened");
                s.show_help = true;
            }

            // Enter command mode with `:` (not from the query bar)
            AppEvent::Char(':') if s.focus != Focus::QueryBar => {
                tracing::debug!(prev_focus = ?s.focus, "entering command mode");
                s.prev_focus = s.focus;
                s.command_bar.clear();
                s.focus = Focus::Command;
            }

            AppEvent::Quit => {
                tracing::debug!("quit");
                s.quit = true;
            }

            // Return focus from query bar to the results
            AppEvent::Escape => {
                if s.focus == Focus::QueryBar {
                    tracing::debug!("focus: QueryBar -> List");
                    s.focus = Focus::List;
                }
            }

            // Tab-cycle focus: Tree → List → Detail → QueryBar → Tree
            AppEvent::FocusNext => {
                let next = match s.focus {
                    Focus::Tree => Focus::List,
                    Focus::List => Focus::Detail,
                    Focus::Detail => Focus::QueryBar,
                    Focus::QueryBar | Focus::Command => Focus::Tree,
                };
                tracing::debug!(from = ?s.focus, to = ?next, "focus cycle");
                s.focus = next;
            }

            AppEvent::QueryFocus => {
                tracing::debug!("focus -> QueryBar");
                s.focus = Focus::QueryBar;
            }

            AppEvent::Shuffle => s.shuffle_see_also(),

            // Terminal resize is handled automatically by ratatui
            AppEvent::Resize(_, _) => {}

            other => dispatch_to_focused(s, other),
        }
    }
}

/// Returns true when the current focus is on a text-input widget, meaning
/// alphabetic keys should produce characters rather than trigger shortcuts.
fn is_insert_mode(focus: Focus) -> bool {
    matches!(focus, Focus::QueryBar | Focus::Command)
}

/// Move the list cursor and redraw the detail pane when the selection changed.
fn move_list(s: &mut AppState, event: &AppEvent) {
    let before = s.list.selected().map(|e| e.id);
    s.list.handle(event);
    if s.list.selected().map(|e| e.id) != before {
        s.refresh_detail();
    }
}

/// Route an event to the widget that owns the current focus.
fn dispatch_to_focused(s: &mut AppState, event: AppEvent) {
    match s.focus {
        Focus::Tree => {
            if s.tree.handle(&event).is_some() {
                s.query.clear();
                s.refresh_list();
            }
        }
        Focus::List => match event {
            AppEvent::Enter => s.focus = Focus::Detail,
            other => move_list(s, &other),
        },
        Focus::Detail => s.detail.handle(&event),
        Focus::QueryBar => match event {
            AppEvent::Enter => s.focus = Focus::List,
            // Up/down walk the results without leaving the query bar
            AppEvent::Nav(Direction::Up | Direction::Down) => move_list(s, &event),
            other => {
                if s.query.handle(&other) {
                    s.refresh_list();
                }
            }
        },
        Focus::Command => {} // handled before dispatch, should not reach here
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

fn draw(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Vertical: body | 3-line query bar
    let vert = Layout::default()
        .direction(LayoutDir::Vertical)
        .constraints([Constraint::Fill(1), Constraint::Length(3)])
        .split(area);

    // Horizontal body split: tree | list | detail
    let pct = state.config.ui.category_pane_width_pct;
    let horiz = Layout::default()
        .direction(LayoutDir::Horizontal)
        .constraints([
            Constraint::Percentage(pct),
            Constraint::Percentage(30),
            Constraint::Fill(1),
        ])
        .split(vert[0]);

    frame.render_widget(
        CategoryTree::new(&state.tree, state.focus == Focus::Tree, &state.theme),
        horiz[0],
    );
    frame.render_widget(
        EntryList::new(&state.list, state.focus == Focus::List, &state.theme),
        horiz[1],
    );
    frame.render_widget(
        EntryDetail::new(
            state.selected(),
            &state.detail,
            &state.glossary,
            &state.linker,
            state.focus == Focus::Detail,
            &state.theme,
        ),
        horiz[2],
    );
    let hint = state.completion_hint();
    frame.render_widget(
        QueryBar::new(&state.query, hint, state.focus == Focus::QueryBar, &state.theme),
        vert[1],
    );

    if state.show_help {
        frame.render_widget(HelpPopup::new(&state.theme), area);
    }

    // Command bar overlays the bottom row of the screen
    if state.focus == Focus::Command {
        let cmd_area = Rect { y: area.bottom() - 1, height: 1, ..area };
        frame.render_widget(CommandBar::new(&state.command_bar, &state.theme), cmd_area);
        let col = state.command_bar.cursor_col(cmd_area);
        frame.set_cursor_position((col, cmd_area.y));
        return; // cursor is set; skip query-bar cursor below
    }

    // Position the terminal cursor when the query bar is focused
    if state.focus == Focus::QueryBar {
        let qb = QueryBar::new(&state.query, hint, true, &state.theme);
        let (cx, cy) = qb.cursor_position(vert[1]);
        frame.set_cursor_position((cx, cy));
    }
}

// ---------------------------------------------------------------------------
// Terminal helpers
// ---------------------------------------------------------------------------

fn install_panic_hook() {
    let original = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original(info);
    }));
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
