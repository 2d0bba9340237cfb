#![allow(unused)]
//! Search layer integration harness.
//!
//! # What this covers
//!
//! - **Rule cascade**: each of the six scoring rules (exact term, term prefix,
//!   term substring, exact tag, tag substring, definition substring) is hit by
//!   at least one query against the built-in glossary, and an entry is scored
//!   by the first rule it satisfies only.
//! - **Normalisation**: queries are trimmed and case-folded; blank queries
//!   return nothing.
//! - **Stable ordering**: equal scores keep collection order.
//! - **Property: ranking**: for random queries and fragments of glossary
//!   words, the results equal an independent recomputation: each entry gets
//!   the highest of the six rule scores it meets, non-matching entries are
//!   dropped, and the rest are stably sorted by relevance.
//! - **Property: no fabrication**: every result refers to an entry of the
//!   searched collection, and no entry appears twice.
//!
//! # What this does NOT cover
//!
//! - Term completion (see the `index` unit tests)
//! - Rendering of results (see cli_harness)
//!
//! # Running
//!
//! ```sh
//! cargo test --test search_harness
//! ```

mod common;
use common::*;

use astrolex_core::{
    search::{score, search},
    Glossary, GlossaryEntry, MatchType,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;

fn ids(query: &str) -> Vec<(&'static str, u8)> {
    search(Glossary::builtin().entries(), query)
        .into_iter()
        .map(|r| (r.entry.id, r.relevance))
        .collect()
}

// ---------------------------------------------------------------------------
// Rule cascade
// ---------------------------------------------------------------------------

#[rstest]
#[case::exact_term("Sun", "sun", 100, MatchType::Term)]
#[case::exact_term_any_case("nATAL cHART", "natal-chart", 100, MatchType::Term)]
#[case::term_prefix("first", "first-house", 90, MatchType::Term)]
#[case::term_substring("house", "first-house", 80, MatchType::Term)]
#[case::exact_tag("fire", "aries", 70, MatchType::Tag)]
#[case::tag_substring("emotion", "moon", 60, MatchType::Tag)]
#[case::definition("satellite", "moon", 50, MatchType::Definition)]
fn top_hit_per_rule(
    #[case] query: &str,
    #[case] id: &str,
    #[case] relevance: u8,
    #[case] match_type: MatchType,
) {
    let results = search(Glossary::builtin().entries(), query);
    let top = results.first().expect("at least one result");
    assert_hit!(top, id, relevance, match_type);
}

#[test]
fn first_ranks_term_prefix_above_definition() {
    assert_eq!(ids("first"), vec![("first-house", 90), ("aries", 50)]);
}

#[test]
fn higher_rule_wins_over_lower_rules() {
    // "identity" is a tag of sun and first-house and also appears in the
    // first-house definition; the tag rule wins.
    let results = search(Glossary::builtin().entries(), "identity");
    assert_eq!(results.len(), 2);
    assert_hit!(results[0], "sun", 70, MatchType::Tag);
    assert_hit!(results[1], "first-house", 70, MatchType::Tag);
}

#[test]
fn ties_keep_collection_order() {
    let results = search(Glossary::builtin().entries(), "the");
    let got: Vec<&str> = results.iter().map(|r| r.entry.id).collect();
    assert_eq!(got, BUILTIN_IDS.to_vec());
    assert!(results.iter().all(|r| r.relevance == 50));
}

#[test]
fn ar_spreads_across_rules() {
    assert_eq!(
        ids("ar"),
        vec![
            ("aries", 90),
            ("natal-chart", 80),
            ("first-house", 60),
            ("sun", 50),
            ("moon", 50),
            ("conjunction", 50),
        ]
    );
}

// ---------------------------------------------------------------------------
// Normalisation
// ---------------------------------------------------------------------------

#[rstest]
#[case("")]
#[case(" ")]
#[case("\t\n")]
fn blank_query_returns_nothing(#[case] query: &str) {
    assert!(search(Glossary::builtin().entries(), query).is_empty());
}

#[test]
fn query_is_trimmed() {
    assert_eq!(ids("  moon  "), ids("moon"));
    assert_eq!(ids("  moon  ")[0], ("moon", 100));
}

#[test]
fn no_match_returns_nothing() {
    assert!(search(Glossary::builtin().entries(), "zzz").is_empty());
}

#[test]
fn custom_entries_follow_same_rules() {
    let entries = leak_entries(vec![
        GlossaryEntryBuilder::new("mars", "Mars")
            .definition("The red planet.")
            .tags(["action"])
            .build(),
        GlossaryEntryBuilder::new("marsh", "Marshland")
            .definition("Not astrology.")
            .build(),
    ]);
    let results = search(entries, "mars");
    assert_hit!(results[0], "mars", 100, MatchType::Term);
    assert_hit!(results[1], "marsh", 90, MatchType::Term);

    let results = search(entries, "act");
    assert_eq!(results.len(), 1);
    assert_hit!(results[0], "mars", 60, MatchType::Tag);
}

#[test]
fn term_prefix_outranks_exact_tag_on_the_same_entry() {
    let entries = leak_entries(vec![
        GlossaryEntryBuilder::new("retrograde", "Retrograde")
            .definition("Apparent backward motion of Mars or any other planet.")
            .tags(["mars", "motion"])
            .build(),
        GlossaryEntryBuilder::new("mars-return", "Mars Return")
            .definition("The planet comes back to its natal place.")
            .tags(["mars", "cycle"])
            .build(),
        GlossaryEntryBuilder::new("solar-return", "Solar Return")
            .definition("Cast for the yearly return; Mars is read last.")
            .build(),
    ]);

    let results = search(entries, "MARS");
    assert_eq!(results.len(), 3);
    assert_hit!(results[0], "mars-return", 90, MatchType::Term);
    assert_hit!(results[1], "retrograde", 70, MatchType::Tag);
    assert_hit!(results[2], "solar-return", 50, MatchType::Definition);

    let results = search(entries, "return");
    assert_eq!(results.len(), 2);
    assert_hit!(results[0], "mars-return", 80, MatchType::Term);
    assert_hit!(results[1], "solar-return", 80, MatchType::Term);
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

/// Every condition an entry meets, checked on its own; the best one wins.
fn best_condition(entry: &GlossaryEntry, query: &str) -> Option<(u8, MatchType)> {
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        return None;
    }
    let term = entry.term.to_lowercase();
    let tags: Vec<String> = entry.tags.iter().map(|t| t.to_lowercase()).collect();
    let definition = entry.definition.to_lowercase();
    [
        (term == q, 100, MatchType::Term),
        (term.starts_with(&q), 90, MatchType::Term),
        (term.contains(&q), 80, MatchType::Term),
        (tags.iter().any(|t| *t == q), 70, MatchType::Tag),
        (tags.iter().any(|t| t.contains(&q)), 60, MatchType::Tag),
        (definition.contains(&q), 50, MatchType::Definition),
    ]
    .into_iter()
    .filter(|&(met, _, _)| met)
    .map(|(_, relevance, kind)| (relevance, kind))
    .max_by_key(|&(relevance, _)| relevance)
}

/// Random text, or a slice of a word taken from the built-in glossary so the
/// higher rules get exercised too.
fn query_strategy() -> impl Strategy<Value = String> {
    let words: Vec<String> = Glossary::builtin()
        .entries()
        .iter()
        .flat_map(|e| {
            std::iter::once(e.term)
                .chain(e.tags.iter().copied())
                .chain(e.definition.split_whitespace())
        })
        .map(str::to_string)
        .collect();
    prop_oneof![
        "[a-zA-Z -]{0,8}",
        (prop::sample::select(words), 0usize..3, 1usize..14, any::<bool>()).prop_map(
            |(word, skip, keep, shout)| {
                let cut: String = word.chars().skip(skip).take(keep).collect();
                if shout { format!(" {} ", cut.to_uppercase()) } else { cut }
            }
        ),
    ]
}

proptest! {
    #[test]
    fn results_match_independent_ranking(query in query_strategy()) {
        let entries = Glossary::builtin().entries();
        let results = search(entries, &query);
        assert_ranked!(results);

        let mut expected: Vec<(&str, u8, MatchType)> = entries
            .iter()
            .filter_map(|e| best_condition(e, &query).map(|(rel, kind)| (e.id, rel, kind)))
            .collect();
        expected.sort_by(|a, b| b.1.cmp(&a.1));
        let actual: Vec<(&str, u8, MatchType)> = results
            .iter()
            .map(|r| (r.entry.id, r.relevance, r.match_type))
            .collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn results_never_fabricate_or_repeat(query in "[a-z]{1,4}") {
        let entries = Glossary::builtin().entries();
        let results = search(entries, &query);
        let mut seen = std::collections::HashSet::new();
        for r in &results {
            prop_assert!(entries.iter().any(|e| std::ptr::eq(e, r.entry)));
            prop_assert!(seen.insert(r.entry.id), "duplicate {}", r.entry.id);
        }
        // Every entry that scores is returned.
        let scoring = entries.iter().filter(|e| score(e, &query).is_some()).count();
        prop_assert_eq!(results.len(), scoring);
    }
}
