//! Domain-specific assertion macros for astrolex harnesses.
//!
//! These wrap `pretty_assertions` and add failure messages that name the
//! glossary invariant that was violated.

// ---------------------------------------------------------------------------
// Entry list assertions
// ---------------------------------------------------------------------------

/// Assert that a list of entry references has exactly the given ids, in order.
///
/// ```rust
/// assert_ids!(glossary.entries_by_category("planets"), ["sun", "moon"]);
/// ```
#[macro_export]
macro_rules! assert_ids {
    ($entries:expr, [$($id:expr),* $(,)?]) => {{
        let actual: Vec<&str> = $entries.iter().map(|e| e.id).collect();
        let expected: Vec<&str> = vec![$($id),*];
        pretty_assertions::assert_eq!(actual, expected, "entry ids differ");
    }};
}

// ---------------------------------------------------------------------------
// Search assertions
// ---------------------------------------------------------------------------

/// Assert that search results are ordered by non-increasing relevance.
#[macro_export]
macro_rules! assert_ranked {
    ($results:expr) => {{
        let results = &$results;
        for pair in results.windows(2) {
            if pair[0].relevance < pair[1].relevance {
                panic!(
                    "assert_ranked! failed: {:?} ({}) ranked above {:?} ({})",
                    pair[0].entry.id, pair[0].relevance, pair[1].entry.id, pair[1].relevance
                );
            }
        }
    }};
}

/// Assert the id, relevance and match type of a search result.
#[macro_export]
macro_rules! assert_hit {
    ($result:expr, $id:expr, $relevance:expr, $match_type:expr) => {{
        let r = &$result;
        pretty_assertions::assert_eq!(
            (r.entry.id, r.relevance, r.match_type),
            ($id, $relevance, $match_type),
            "unexpected search hit"
        );
    }};
}

// ---------------------------------------------------------------------------
// Cross-link assertions
// ---------------------------------------------------------------------------

/// Assert that `text` links to the entry `id` exactly `count` times.
#[macro_export]
macro_rules! assert_links {
    ($text:expr, $id:expr, $count:expr) => {{
        let text: &str = &$text;
        let needle = format!("href=\"#entry-{}\"", $id);
        let found = text.matches(needle.as_str()).count();
        if found != $count {
            panic!(
                "assert_links! failed: expected {} link(s) to {:?}, found {}\n  text: {}",
                $count, $id, found, text
            );
        }
    }};
}
