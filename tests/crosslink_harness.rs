#![allow(unused)]
//! Cross-linking and related-pick integration harness.
//!
//! # What this covers
//!
//! - **Whole words only**: terms are matched case-insensitively on ASCII word
//!   boundaries; partial words are left alone, while a neighbouring non-ASCII
//!   letter does not block a match.
//! - **Every occurrence**: a term that appears several times is linked each
//!   time.
//! - **Overlapping terms**: passes run in collection order over the output of
//!   the previous pass, so a shorter term can re-link inside a longer term's
//!   replacement. The result depends on collection order.
//! - **Link style**: `[links]` in `config.toml` changes the rendered anchor.
//! - **Property: unmatched prose is untouched**: lorem text never containing a
//!   term comes back byte-for-byte.
//! - **Related picks**: same category, never the current entry, at most
//!   `count`, deterministic for a seeded rng.
//!
//! # What this does NOT cover
//!
//! - The TUI's marker-based highlighting (see the `entry_detail` widget tests)
//!
//! # Running
//!
//! ```sh
//! cargo test --test crosslink_harness
//! ```

mod common;
use common::*;

use astrolex_core::{
    config::Config,
    search::{cross_link, cross_link_with, random_related, CrossLinker, LinkStyle},
    Glossary,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rand::{rngs::StdRng, SeedableRng};
use rstest::rstest;

fn bracket(text: &str, entries: &[astrolex_core::GlossaryEntry]) -> String {
    cross_link_with(text, entries, |e| format!("[{}]", e.id))
}

// ---------------------------------------------------------------------------
// Matching
// ---------------------------------------------------------------------------

#[rstest]
#[case::plain("the moon rises", "the [moon] rises")]
#[case::capitalised("Moon", "[moon]")]
#[case::shouting("MOON!", "[moon]!")]
#[case::punctuation("(moon), moon.", "([moon]), [moon].")]
#[case::prefix_word("moonlight", "moonlight")]
#[case::suffix_word("honeymoon", "honeymoon")]
#[case::hyphenated("moon-sign", "[moon]-sign")]
#[case::underscore("moon_sign", "moon_sign")]
#[case::non_ascii_suffix("Moonå", "[moon]å")]
#[case::non_ascii_prefix("émoon", "é[moon]")]
fn moon_matches_whole_words(#[case] text: &str, #[case] expected: &str) {
    let entries = &Glossary::builtin().entries()[1..2];
    assert_eq!(bracket(text, entries), expected);
}

#[test]
fn links_every_builtin_term_in_prose() {
    let text = "Aries rising with the Sun and Moon in conjunction across the first house \
                of a natal chart.";
    let out = cross_link(text, Glossary::builtin().entries(), &LinkStyle::default());
    for id in BUILTIN_IDS {
        assert_links!(out, id, 1);
    }
}

#[test]
fn repeated_term_is_linked_each_time() {
    let out = cross_link(
        "Sun, sun and SUN",
        Glossary::builtin().entries(),
        &LinkStyle::default(),
    );
    assert_links!(out, "sun", 3);
}

#[test]
fn matched_text_is_replaced_by_the_canonical_term() {
    let out = cross_link("sun", Glossary::builtin().entries(), &LinkStyle::default());
    insta::assert_snapshot!(out, @r##"<a href="#entry-sun" class="text-primary-600 hover:underline">Sun</a>"##);
}

#[test]
fn empty_text_stays_empty() {
    assert_eq!(
        cross_link("", Glossary::builtin().entries(), &LinkStyle::default()),
        ""
    );
}

#[test]
fn no_entries_leaves_text_alone() {
    assert_eq!(cross_link("Sun", &[], &LinkStyle::default()), "Sun");
}

#[test]
fn regex_metacharacters_in_terms_are_literal() {
    let entries = leak_entries(vec![
        GlossaryEntryBuilder::new("part", "Part (of) Fortune").build(),
        GlossaryEntryBuilder::new("dot", "A.C").build(),
    ]);
    assert_eq!(
        bracket("the Part (of) Fortune, ABC and A.C", entries),
        "the [part], ABC and [dot]"
    );
}

// ---------------------------------------------------------------------------
// Overlapping terms
// ---------------------------------------------------------------------------

#[test]
fn shorter_term_relinks_inside_longer_replacement() {
    let entries = leak_entries(overlapping_entries());
    assert_eq!(bracket("a full moon", entries), "a [full-[moon]]");
}

#[test]
fn overlap_depends_on_collection_order() {
    let mut reversed = overlapping_entries();
    reversed.reverse();
    let entries = leak_entries(reversed);
    assert_eq!(bracket("a full moon", entries), "a full [moon]");
}

#[test]
fn overlap_rewrites_inside_anchor_markup() {
    let entries = leak_entries(overlapping_entries());
    let out = cross_link("full moon", entries, &LinkStyle::default());
    // The Moon pass matches both the href tail and the anchor text.
    assert_links!(out, "moon", 2);
    assert_links!(out, "full-moon", 0);
}

// ---------------------------------------------------------------------------
// Link style
// ---------------------------------------------------------------------------

#[test]
fn link_style_from_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        "[links]\nhref_prefix = \"/glossary/\"\nclass = \"term\"\n",
    )
    .unwrap();
    let cfg = Config::load_from(&path).unwrap();

    let out = cross_link("Aries", Glossary::builtin().entries(), &cfg.links);
    assert_eq!(out, r#"<a href="/glossary/aries" class="term">Aries</a>"#);
}

#[test]
fn linker_reuse_matches_one_shot() {
    let entries = Glossary::builtin().entries();
    let linker = CrossLinker::new(entries);
    let style = LinkStyle::default();
    for text in ["The Sun", "first house cusp", "nothing here"] {
        assert_eq!(linker.link(text, &style), cross_link(text, entries, &style));
    }
}

// ---------------------------------------------------------------------------
// Unmatched prose
// ---------------------------------------------------------------------------

#[test]
fn inserted_term_in_lorem_is_linked_once() {
    let entries = leak_entries(unmatchable_entries());
    let text = format!("{} Node9 {}", lorem(6), lorem(6));
    let out = cross_link(&text, entries, &LinkStyle::default());
    assert_links!(out, "node-9", 1);
    assert_links!(out, "orb-7", 0);
}

proptest! {
    #[test]
    fn lorem_without_terms_is_unchanged(count in 0usize..40) {
        let entries = leak_entries(unmatchable_entries());
        let text = lorem(count);
        prop_assert_eq!(cross_link(&text, entries, &LinkStyle::default()), text);
    }
}

// ---------------------------------------------------------------------------
// Related picks
// ---------------------------------------------------------------------------

#[test]
fn related_picks_stay_in_category() {
    let glossary = Glossary::builtin();
    let sun = glossary.entry_by_id("sun").unwrap();
    let picks = random_related(glossary.entries(), sun, 3, &mut StdRng::seed_from_u64(42));
    assert_ids!(picks, ["moon"]);
}

#[test]
fn singleton_category_has_no_related_picks() {
    let glossary = Glossary::builtin();
    let aries = glossary.entry_by_id("aries").unwrap();
    assert!(random_related(glossary.entries(), aries, 3, &mut StdRng::seed_from_u64(1)).is_empty());
}

proptest! {
    #[test]
    fn related_picks_are_bounded_and_exclude_current(
        size in 1usize..15,
        current in 0usize..15,
        count in 0usize..6,
        seed in any::<u64>(),
    ) {
        let current = current % size;
        let entries: Vec<_> = (0..size)
            .map(|i| {
                GlossaryEntryBuilder::new(format!("e{i}"), format!("E{i}"))
                    .category(if i % 2 == 0 { "even" } else { "odd" })
                    .build()
            })
            .collect();
        let entries = leak_entries(entries);
        let me = &entries[current];

        let picks = random_related(entries, me, count, &mut StdRng::seed_from_u64(seed));
        let available = entries
            .iter()
            .filter(|e| e.category == me.category && e.id != me.id)
            .count();

        prop_assert_eq!(picks.len(), count.min(available));
        prop_assert!(picks.iter().all(|e| e.category == me.category && e.id != me.id));

        let again = random_related(entries, me, count, &mut StdRng::seed_from_u64(seed));
        prop_assert_eq!(picks, again);
    }
}
