//! Query engine — lookups, category filters and related-entry traversal.
//!
//! Every operation is total: absence is an empty `Vec` or `None`, never an
//! error. Results preserve the underlying collection order.

use crate::data;
use crate::types::{GlossaryCategory, GlossaryEntry};

/// A read-only view over a set of entries and categories.
///
/// [`Glossary::builtin`] views the compiled-in data set; tests and benches can
/// construct a view over their own fixtures with [`Glossary::new`].
#[derive(Debug, Clone, Copy)]
pub struct Glossary<'a> {
    entries: &'a [GlossaryEntry],
    categories: &'a [GlossaryCategory],
}

impl Glossary<'static> {
    /// The compiled-in glossary.
    pub fn builtin() -> Self {
        Self::new(data::ENTRIES, data::CATEGORIES)
    }
}

impl<'a> Glossary<'a> {
    pub fn new(entries: &'a [GlossaryEntry], categories: &'a [GlossaryCategory]) -> Self {
        Self { entries, categories }
    }

    pub fn entries(&self) -> &'a [GlossaryEntry] {
        self.entries
    }

    pub fn categories(&self) -> &'a [GlossaryCategory] {
        self.categories
    }

    /// All entries whose category equals `category_id`, in collection order.
    pub fn entries_by_category(&self, category_id: &str) -> Vec<&'a GlossaryEntry> {
        filter_by_category(self.entries, category_id)
    }

    /// The first entry with the given id.
    pub fn entry_by_id(&self, id: &str) -> Option<&'a GlossaryEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Resolve an entry's related ids in listed order.
    ///
    /// Ids that do not resolve are dropped silently; they are soft references.
    /// An unknown `id` yields an empty list.
    pub fn related_entries(&self, id: &str) -> Vec<&'a GlossaryEntry> {
        let Some(entry) = self.entry_by_id(id) else {
            return Vec::new();
        };
        entry
            .related_terms
            .iter()
            .filter_map(|related| self.entry_by_id(related))
            .collect()
    }

    pub fn category_by_id(&self, id: &str) -> Option<&'a GlossaryCategory> {
        self.categories.iter().find(|category| category.id == id)
    }

    /// Each category paired with the number of entries that reference it.
    pub fn category_counts(&self) -> Vec<(&'a GlossaryCategory, usize)> {
        self.categories
            .iter()
            .map(|category| {
                let count = self
                    .entries
                    .iter()
                    .filter(|entry| entry.category == category.id)
                    .count();
                (category, count)
            })
            .collect()
    }
}

/// Filter an arbitrary entry slice down to one category, preserving order.
pub fn filter_by_category<'a>(
    entries: &'a [GlossaryEntry],
    category_id: &str,
) -> Vec<&'a GlossaryEntry> {
    entries
        .iter()
        .filter(|entry| entry.category == category_id)
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
