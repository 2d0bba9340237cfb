//! astrolex — astrology glossary browser, search and cross-linker.
//!
//! The glossary layers live in `astrolex-core` and are re-exported here so
//! integration tests and the binary import a single crate. The [`cli`] module
//! holds the non-interactive subcommands; the TUI lives in `astrolex-tui`.
//!
//! # Architecture
//!
//! ```text
//! Data ──► Query ──► Search ──┬──► cli (stdout)
//!              └──► Index ───┴──► TUI
//! ```

pub mod cli;

pub use astrolex_core::*;
