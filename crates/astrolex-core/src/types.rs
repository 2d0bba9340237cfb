//! Core types for astrolex-core.
//!
//! This module defines the records shared across all layers: the
//! [`GlossaryEntry`] and [`GlossaryCategory`] reference data, and the
//! per-query [`SearchResult`] with its [`MatchType`].
//!
//! Reference data is built from `&'static str` so the whole data set can live
//! in a `static` and be borrowed for the lifetime of the process.

use serde::Serialize;

/// One glossary record: a term and its metadata.
///
/// The list fields are never optional; an empty slice means "none given".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GlossaryEntry {
    /// Unique key, also used as the link anchor (`#entry-{id}`).
    pub id: &'static str,
    /// Display term, e.g. `"First House"`.
    pub term: &'static str,
    pub definition: &'static str,
    /// Id of the owning [`GlossaryCategory`]. Not checked at runtime.
    pub category: &'static str,
    /// Ids of related entries. Ids that do not resolve are dropped on lookup.
    #[serde(skip_serializing_if = "is_empty")]
    pub related_terms: &'static [&'static str],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etymology: Option<&'static str>,
    #[serde(skip_serializing_if = "is_empty")]
    pub examples: &'static [&'static str],
    #[serde(skip_serializing_if = "is_empty")]
    pub tags: &'static [&'static str],
}

/// A grouping label for entries (e.g. "Planets", "Zodiac Signs").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GlossaryCategory {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// Display colour token, e.g. `"bg-blue-500"`.
    pub color: &'static str,
}

/// Which part of an entry satisfied the search query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchType {
    Term,
    Definition,
    Tag,
}

impl std::fmt::Display for MatchType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchType::Term => write!(f, "term"),
            MatchType::Definition => write!(f, "definition"),
            MatchType::Tag => write!(f, "tag"),
        }
    }
}

/// A scored reference to one entry, produced per query and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SearchResult<'a> {
    pub entry: &'a GlossaryEntry,
    /// Score of the highest-priority rule the entry satisfied (50–100).
    pub relevance: u8,
    pub match_type: MatchType,
}

fn is_empty(list: &&'static [&'static str]) -> bool {
    list.is_empty()
}
