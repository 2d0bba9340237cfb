//! Test builders — ergonomic constructors for `GlossaryEntry` and whole
//! glossaries.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. Owned strings are leaked to satisfy the `&'static str`
//! fields of the data model.

use astrolex_core::{GlossaryCategory, GlossaryEntry, Glossary};

/// Leak a `String` into a `&'static str`.
pub fn leak(s: impl Into<String>) -> &'static str {
    Box::leak(s.into().into_boxed_str())
}

/// Leak a list of strings into a `&'static [&'static str]`.
pub fn leak_list<I, S>(items: I) -> &'static [&'static str]
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let items: Vec<&'static str> = items.into_iter().map(leak).collect();
    Box::leak(items.into_boxed_slice())
}

// ---------------------------------------------------------------------------
// GlossaryEntryBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`GlossaryEntry`] test fixtures.
///
/// # Example
///
/// ```rust
/// let entry = GlossaryEntryBuilder::new("mars", "Mars")
///     .category("planets")
///     .tags(["action", "drive"])
///     .related(["aries"])
///     .build();
/// ```
pub struct GlossaryEntryBuilder {
    id: &'static str,
    term: &'static str,
    definition: &'static str,
    category: &'static str,
    related_terms: &'static [&'static str],
    etymology: Option<&'static str>,
    examples: &'static [&'static str],
    tags: &'static [&'static str],
}

impl GlossaryEntryBuilder {
    pub fn new(id: impl Into<String>, term: impl Into<String>) -> Self {
        Self {
            id: leak(id),
            term: leak(term),
            definition: "",
            category: "planets",
            related_terms: &[],
            etymology: None,
            examples: &[],
            tags: &[],
        }
    }

    pub fn definition(mut self, definition: impl Into<String>) -> Self {
        self.definition = leak(definition);
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = leak(category);
        self
    }

    pub fn related<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.related_terms = leak_list(ids);
        self
    }

    pub fn etymology(mut self, etymology: impl Into<String>) -> Self {
        self.etymology = Some(leak(etymology));
        self
    }

    pub fn examples<I, S>(mut self, examples: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.examples = leak_list(examples);
        self
    }

    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = leak_list(tags);
        self
    }

    pub fn build(self) -> GlossaryEntry {
        GlossaryEntry {
            id: self.id,
            term: self.term,
            definition: self.definition,
            category: self.category,
            related_terms: self.related_terms,
            etymology: self.etymology,
            examples: self.examples,
            tags: self.tags,
        }
    }
}

// ---------------------------------------------------------------------------
// Glossary construction
// ---------------------------------------------------------------------------

/// Build a category with a placeholder description and colour.
pub fn category(id: impl Into<String>, name: impl Into<String>) -> GlossaryCategory {
    GlossaryCategory {
        id: leak(id),
        name: leak(name),
        description: "test category",
        color: "bg-gray-500",
    }
}

/// Leak entries into a `'static` slice.
pub fn leak_entries(entries: Vec<GlossaryEntry>) -> &'static [GlossaryEntry] {
    Box::leak(entries.into_boxed_slice())
}

/// Build a `'static` glossary over custom entries and categories.
pub fn glossary(
    entries: Vec<GlossaryEntry>,
    categories: Vec<GlossaryCategory>,
) -> Glossary<'static> {
    Glossary::new(leak_entries(entries), Box::leak(categories.into_boxed_slice()))
}
