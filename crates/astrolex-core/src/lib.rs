//! astrolex-core — astrology glossary core library.
//!
//! This crate exposes the glossary layers as public modules, plus the shared
//! types used across all of them.
//!
//! # Architecture
//!
//! ```text
//! Data ──► Query ──┐
//!   │              ├──► front ends (TUI, CLI)
//!   └──► Search ───┤
//!   └──► Index ────┘
//! Chart (independent placeholder)
//! ```
//!
//! Everything is synchronous and works over immutable, compiled-in data.

pub mod chart;
pub mod config;
pub mod data;
pub mod error;
pub mod index;
pub mod query;
pub mod search;
pub mod types;

pub use error::{Error, Result};
pub use query::Glossary;
pub use types::{GlossaryCategory, GlossaryEntry, MatchType, SearchResult};
