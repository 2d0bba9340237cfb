//! Colour theme for the astrolex TUI.
//!
//! Themes are defined as TOML files. The default theme is embedded in the
//! binary via [`include_str!`] so the application works without any files on
//! disk. Call [`Theme::load_default`] at startup and pass the result through
//! the application as a shared reference.
//!
//! # Category colours
//!
//! Categories carry a web colour token such as `bg-blue-500`. The colour name
//! between the prefix and the shade is mapped onto a terminal colour; tokens
//! that do not resolve fall back to the theme's `categories.fallback` colour.

use astrolex_core::MatchType;
use config::{Config, File, FileFormat};
use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;

const DEFAULT_THEME_SRC: &str = include_str!("themes/default.toml");
const GRUVBOX_DARK_THEME_SRC: &str = include_str!("themes/gruvbox_dark.toml");

// ---------------------------------------------------------------------------
// Raw (serde) types — mirror the TOML structure
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct RawStyle {
    fg: Option<String>,
    bg: Option<String>,
    #[serde(default)]
    bold: bool,
    #[serde(default)]
    dim: bool,
    #[serde(default)]
    italic: bool,
    #[serde(default)]
    underlined: bool,
}

impl RawStyle {
    fn into_style(self) -> Style {
        let mut style = Style::default();
        if let Some(c) = self.fg.as_deref().and_then(parse_color) {
            style = style.fg(c);
        }
        if let Some(c) = self.bg.as_deref().and_then(parse_color) {
            style = style.bg(c);
        }
        if self.bold {
            style = style.add_modifier(Modifier::BOLD);
        }
        if self.dim {
            style = style.add_modifier(Modifier::DIM);
        }
        if self.italic {
            style = style.add_modifier(Modifier::ITALIC);
        }
        if self.underlined {
            style = style.add_modifier(Modifier::UNDERLINED);
        }
        style
    }
}

#[derive(Debug, Deserialize)]
struct RawBorders {
    focused: RawStyle,
    command_bar: RawStyle,
    unfocused: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawMatches {
    term: RawStyle,
    tag: RawStyle,
    definition: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawText {
    heading: RawStyle,
    label: RawStyle,
    muted: RawStyle,
    link: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawCategories {
    fallback: String,
}

#[derive(Debug, Deserialize)]
struct RawTheme {
    borders: RawBorders,
    matches: RawMatches,
    text: RawText,
    categories: RawCategories,
}

// ---------------------------------------------------------------------------
// Public Theme type
// ---------------------------------------------------------------------------

/// Application colour theme.
///
/// All styles are pre-resolved ratatui [`Style`] values — no allocation at
/// render time.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Border style for the currently focused pane.
    pub border_focused: Style,
    /// Border style for the command bar pane.
    pub border_command_bar: Style,
    /// Border style for unfocused panes.
    pub border_unfocused: Style,

    /// Score column styles in the result list, one per match type.
    pub match_term: Style,
    pub match_tag: Style,
    pub match_definition: Style,

    /// Entry term heading in the detail pane.
    pub heading: Style,
    /// Section labels in the detail pane ("Etymology", "Tags", ...).
    pub label: Style,
    /// De-emphasised text: completion hints, counts, placeholders.
    pub muted: Style,
    /// Cross-linked terms inside definitions.
    pub link: Style,

    category_fallback: Color,
}

impl Theme {
    /// Load and parse the embedded default theme.
    ///
    /// # Panics
    ///
    /// Panics if the embedded TOML is malformed; the `default_theme_loads`
    /// test guards against that.
    pub fn load_default() -> Self {
        Self::from_toml_str(DEFAULT_THEME_SRC).expect("embedded default theme must be valid TOML")
    }

    /// Load and parse the embedded Gruvbox Dark theme.
    ///
    /// # Panics
    ///
    /// Panics if the embedded TOML is malformed.
    pub fn load_gruvbox_dark() -> Self {
        Self::from_toml_str(GRUVBOX_DARK_THEME_SRC)
            .expect("embedded gruvbox dark theme must be valid TOML")
    }

    /// Resolve a theme by name, falling back to the default theme.
    pub fn by_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "gruvbox" | "gruvbox_dark" | "gruvbox-dark" => Self::load_gruvbox_dark(),
            _ => Self::load_default(),
        }
    }

    /// Parse a theme from a TOML string.
    ///
    /// Unknown keys are ignored so user themes stay forward-compatible.
    pub fn from_toml_str(src: &str) -> anyhow::Result<Self> {
        let raw: RawTheme = Config::builder()
            .add_source(File::from_str(src, FileFormat::Toml))
            .build()?
            .try_deserialize()?;

        Ok(Self {
            border_focused: raw.borders.focused.into_style(),
            border_command_bar: raw.borders.command_bar.into_style(),
            border_unfocused: raw.borders.unfocused.into_style(),
            match_term: raw.matches.term.into_style(),
            match_tag: raw.matches.tag.into_style(),
            match_definition: raw.matches.definition.into_style(),
            heading: raw.text.heading.into_style(),
            label: raw.text.label.into_style(),
            muted: raw.text.muted.into_style(),
            link: raw.text.link.into_style(),
            category_fallback: parse_color(&raw.categories.fallback).unwrap_or(Color::Gray),
        })
    }

    pub fn match_style(&self, match_type: MatchType) -> Style {
        match match_type {
            MatchType::Term => self.match_term,
            MatchType::Tag => self.match_tag,
            MatchType::Definition => self.match_definition,
        }
    }

    /// Foreground style for a category colour token such as `bg-blue-500`.
    pub fn category_style(&self, token: &str) -> Style {
        let color = token_color_name(token)
            .and_then(parse_color)
            .unwrap_or(self.category_fallback);
        Style::default().fg(color)
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Extract `blue` from `bg-blue-500` (or `text-blue-500`, or bare `blue`).
fn token_color_name(token: &str) -> Option<&str> {
    let mut parts = token.split('-');
    match (parts.next(), parts.next()) {
        (Some("bg" | "text"), Some(name)) => Some(name),
        (Some(name), _) if !name.is_empty() => Some(name),
        _ => None,
    }
}

/// Parse a colour name into a ratatui [`Color`].
///
/// Accepts:
/// - Named terminal colours (case-insensitive): `red`, `dark_gray`, etc.
///   `purple` is an alias of `magenta`.
/// - Hex RGB: `#rrggbb`
/// - 256-colour indexed: `indexed:N`
fn parse_color(s: &str) -> Option<Color> {
    match s.to_ascii_lowercase().as_str() {
        "black" => Some(Color::Black),
        "red" => Some(Color::Red),
        "green" => Some(Color::Green),
        "yellow" => Some(Color::Yellow),
        "blue" => Some(Color::Blue),
        "magenta" | "purple" => Some(Color::Magenta),
        "cyan" => Some(Color::Cyan),
        "gray" | "grey" => Some(Color::Gray),
        "dark_gray" | "darkgray" | "dark_grey" | "darkgrey" => Some(Color::DarkGray),
        "light_red" => Some(Color::LightRed),
        "light_green" => Some(Color::LightGreen),
        "light_yellow" => Some(Color::LightYellow),
        "light_blue" => Some(Color::LightBlue),
        "light_magenta" => Some(Color::LightMagenta),
        "light_cyan" => Some(Color::LightCyan),
        "white" => Some(Color::White),
        s if s.starts_with('#') && s.len() == 7 => {
            let r = u8::from_str_radix(&s[1..3], 16).ok()?;
            let g = u8::from_str_radix(&s[3..5], 16).ok()?;
            let b = u8::from_str_radix(&s[5..7], 16).ok()?;
            Some(Color::Rgb(r, g, b))
        }
        s if s.starts_with("indexed:") => {
            let n: u8 = s["indexed:".len()..].parse().ok()?;
            Some(Color::Indexed(n))
        }
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
