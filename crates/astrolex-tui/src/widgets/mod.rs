//! Ratatui widgets for the astrolex TUI.

pub mod category_tree;
pub mod command_bar;
pub mod entry_detail;
pub mod entry_list;
pub mod help;
pub mod query_bar;
