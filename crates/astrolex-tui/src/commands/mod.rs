//! `:` commands typed into the command bar.
//!
//! | Command | Action |
//! |---------|--------|
//! | `q`, `quit`, `q!`, `quit!` | Quit |
//! | `help` | Toggle the help popup |
//! | `theme <name>` | Switch theme (`default`, `gruvbox`) |
//! | `category <id>`, `cat <id>` | List a category's entries |
//! | `all` | List every entry |
//! | `shuffle` | Draw new "see also" entries |
//! | `etym` | Toggle etymology and examples in the detail pane |

use crate::{app::AppState, theme::Theme, widgets::category_tree::ALL};

// ---------------------------------------------------------------------------
// Command
// ---------------------------------------------------------------------------

/// A parsed, validated command ready to be executed by the app shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    Help,
    Theme(String),
    Category(String),
    All,
    Shuffle,
    Etymology,
}

impl Command {
    /// Parse a raw command string (the text after the `:` prefix).
    ///
    /// Returns `Ok(cmd)` on success, `Err(message)` on failure. An empty
    /// string returns `Err("")` as a sentinel meaning "close without acting".
    pub fn parse(input: &str) -> Result<Command, String> {
        let input = input.trim();
        if input.is_empty() {
            return Err(String::new());
        }

        let (word, rest) = input
            .split_once(char::is_whitespace)
            .map(|(w, r)| (w, r.trim()))
            .unwrap_or((input, ""));

        match word {
            "q" | "quit" | "q!" | "quit!" => Ok(Command::Quit),
            "help" => Ok(Command::Help),
            "all" => Ok(Command::All),
            "shuffle" => Ok(Command::Shuffle),
            "etym" | "etymology" => Ok(Command::Etymology),
            "theme" => {
                if rest.is_empty() {
                    Err("usage: theme <default|gruvbox>".to_string())
                } else {
                    Ok(Command::Theme(rest.to_string()))
                }
            }
            "category" | "cat" => {
                if rest.is_empty() {
                    Err("usage: category <id>".to_string())
                } else {
                    Ok(Command::Category(rest.to_string()))
                }
            }
            other => Err(format!("unknown command: {other}")),
        }
    }
}

/// Execute a parsed [`Command`] against the application state.
///
/// Returns an error message for the command bar when the command names
/// something that does not exist.
pub fn execute_command(s: &mut AppState, cmd: Command) -> Result<(), String> {
    tracing::debug!(command = ?cmd, "executing command");
    match cmd {
        Command::Quit => s.quit = true,
        Command::Help => s.show_help = !s.show_help,
        Command::Theme(name) => s.theme = Theme::by_name(&name),
        Command::Category(id) => {
            if !s.show_category(&id) {
                return Err(format!("no category with id '{id}'"));
            }
        }
        Command::All => {
            s.show_category(ALL);
        }
        Command::Shuffle => s.shuffle_see_also(),
        Command::Etymology => s.detail.show_etymology = !s.detail.show_etymology,
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
