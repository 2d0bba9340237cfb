//! astrolex TUI — ratatui application shell.

pub mod app;
pub mod commands;
pub mod event;
pub mod theme;
pub mod widgets;

pub use app::{App, AppState};

use astrolex_core::{config::Config, Glossary};
use rand::{rngs::StdRng, SeedableRng};

/// Start the TUI over the built-in glossary.
pub fn run(config: Config) -> anyhow::Result<()> {
    let theme = theme::Theme::load_default();
    let state = AppState::new(Glossary::builtin(), config, theme, StdRng::from_entropy())?;
    App::new(state).run()
}
