//! Search layer — relevance ranking, prose cross-linking and related picks.
//!
//! Ranking is a fixed cascade of substring rules. Each entry is scored by the
//! first rule it satisfies and the results are stable-sorted by score, so ties
//! keep collection order:
//!
//! | Rule | Score | Match type |
//! |------|-------|------------|
//! | term equals query | 100 | term |
//! | term starts with query | 90 | term |
//! | term contains query | 80 | term |
//! | a tag equals query | 70 | tag |
//! | a tag contains query | 60 | tag |
//! | definition contains query | 50 | definition |

use crate::types::{GlossaryEntry, MatchType, SearchResult};
use rand::{seq::SliceRandom, Rng};
use regex::{NoExpand, Regex};
use serde::Deserialize;

pub const SCORE_TERM_EXACT: u8 = 100;
pub const SCORE_TERM_PREFIX: u8 = 90;
pub const SCORE_TERM_CONTAINS: u8 = 80;
pub const SCORE_TAG_EXACT: u8 = 70;
pub const SCORE_TAG_CONTAINS: u8 = 60;
pub const SCORE_DEFINITION: u8 = 50;

// ---------------------------------------------------------------------------
// Ranking
// ---------------------------------------------------------------------------

/// Score every entry against `query` and return matches, best first.
///
/// The query is trimmed and lowercased; a blank query returns no results.
pub fn search<'a>(entries: &'a [GlossaryEntry], query: &str) -> Vec<SearchResult<'a>> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }

    let mut results: Vec<SearchResult<'a>> = entries
        .iter()
        .filter_map(|entry| {
            score(entry, &query).map(|(relevance, match_type)| SearchResult {
                entry,
                relevance,
                match_type,
            })
        })
        .collect();

    // `sort_by` is stable: equal scores keep collection order.
    results.sort_by(|a, b| b.relevance.cmp(&a.relevance));
    tracing::trace!(query = %query, hits = results.len(), "search");
    results
}

/// Apply the rule cascade to one entry. `query` must already be normalised.
pub fn score(entry: &GlossaryEntry, query: &str) -> Option<(u8, MatchType)> {
    let term = entry.term.to_lowercase();
    if term == query {
        return Some((SCORE_TERM_EXACT, MatchType::Term));
    }
    if term.starts_with(query) {
        return Some((SCORE_TERM_PREFIX, MatchType::Term));
    }
    if term.contains(query) {
        return Some((SCORE_TERM_CONTAINS, MatchType::Term));
    }

    let tags: Vec<String> = entry.tags.iter().map(|tag| tag.to_lowercase()).collect();
    if tags.iter().any(|tag| tag == query) {
        return Some((SCORE_TAG_EXACT, MatchType::Tag));
    }
    if tags.iter().any(|tag| tag.contains(query)) {
        return Some((SCORE_TAG_CONTAINS, MatchType::Tag));
    }

    if entry.definition.to_lowercase().contains(query) {
        return Some((SCORE_DEFINITION, MatchType::Definition));
    }
    None
}

// ---------------------------------------------------------------------------
// Cross-linking
// ---------------------------------------------------------------------------

/// How [`cross_link`] renders a link: `<a href="{href_prefix}{id}" class="{class}">{term}</a>`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LinkStyle {
    #[serde(default = "default_href_prefix")]
    pub href_prefix: String,
    #[serde(default = "default_class")]
    pub class: String,
}

fn default_href_prefix() -> String { "#entry-".to_string() }
fn default_class() -> String { "text-primary-600 hover:underline".to_string() }

impl Default for LinkStyle {
    fn default() -> Self {
        Self {
            href_prefix: default_href_prefix(),
            class: default_class(),
        }
    }
}

impl LinkStyle {
    pub fn render(&self, entry: &GlossaryEntry) -> String {
        format!(
            r#"<a href="{}{}" class="{}">{}</a>"#,
            self.href_prefix, entry.id, self.class, entry.term
        )
    }
}

/// Whole-word, case-insensitive term patterns compiled once per entry set.
///
/// Word characters are ASCII `[0-9A-Za-z_]`, so a term next to a non-ASCII
/// letter still counts as a whole word (`Sunå` links `Sun`).
///
/// Patterns are applied in entry order and each pass rewrites the output of
/// the previous one, so a later term can match inside an earlier link
/// (including its href). That overlap is left as is.
#[derive(Debug)]
pub struct CrossLinker<'a> {
    patterns: Vec<(&'a GlossaryEntry, Regex)>,
}

impl<'a> CrossLinker<'a> {
    pub fn new(entries: &'a [GlossaryEntry]) -> Self {
        let patterns = entries
            .iter()
            .filter(|entry| !entry.term.is_empty())
            .filter_map(|entry| {
                // ASCII word boundaries: letters like `å` or `é` end a word.
                let pattern = format!(r"(?i)(?-u:\b){}(?-u:\b)", regex::escape(entry.term));
                match Regex::new(&pattern) {
                    Ok(re) => Some((entry, re)),
                    Err(err) => {
                        tracing::warn!(id = entry.id, error = %err, "skipping unlinkable term");
                        None
                    }
                }
            })
            .collect();
        Self { patterns }
    }

    /// Replace every occurrence of every term with `render(entry)`.
    pub fn link_with<F>(&self, text: &str, mut render: F) -> String
    where
        F: FnMut(&GlossaryEntry) -> String,
    {
        let mut linked = text.to_string();
        for (entry, re) in &self.patterns {
            let replacement = render(entry);
            linked = re.replace_all(&linked, NoExpand(&replacement)).into_owned();
        }
        linked
    }

    pub fn link(&self, text: &str, style: &LinkStyle) -> String {
        self.link_with(text, |entry| style.render(entry))
    }
}

/// Rewrite `text` so every known term becomes a link to its entry.
pub fn cross_link(text: &str, entries: &[GlossaryEntry], style: &LinkStyle) -> String {
    CrossLinker::new(entries).link(text, style)
}

/// [`cross_link`] with a caller-supplied replacement for each entry.
pub fn cross_link_with<F>(text: &str, entries: &[GlossaryEntry], render: F) -> String
where
    F: FnMut(&GlossaryEntry) -> String,
{
    CrossLinker::new(entries).link_with(text, render)
}

// ---------------------------------------------------------------------------
// Related picks
// ---------------------------------------------------------------------------

/// Up to `count` other entries from `current`'s category, in random order.
pub fn random_related<'a, R>(
    entries: &'a [GlossaryEntry],
    current: &GlossaryEntry,
    count: usize,
    rng: &mut R,
) -> Vec<&'a GlossaryEntry>
where
    R: Rng + ?Sized,
{
    let mut candidates: Vec<&'a GlossaryEntry> = entries
        .iter()
        .filter(|entry| entry.category == current.category && entry.id != current.id)
        .collect();
    candidates.shuffle(rng);
    candidates.truncate(count);
    candidates
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
