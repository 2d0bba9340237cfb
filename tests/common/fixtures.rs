//! Static fixtures used across harnesses.

use astrolex_core::chart::BirthData;
use astrolex_core::GlossaryEntry;
use fake::faker::lorem::en::Words;
use fake::Fake;

use super::builders::GlossaryEntryBuilder;

/// Every id in the built-in glossary, in data order.
pub const BUILTIN_IDS: &[&str] = &[
    "sun",
    "moon",
    "aries",
    "first-house",
    "conjunction",
    "natal-chart",
];

/// Every category id in the built-in glossary, in data order.
pub const BUILTIN_CATEGORY_IDS: &[&str] = &["planets", "signs", "houses", "aspects", "techniques"];

/// Two entries whose terms overlap: "Full Moon" contains "Moon".
pub fn overlapping_entries() -> Vec<GlossaryEntry> {
    vec![
        GlossaryEntryBuilder::new("full-moon", "Full Moon")
            .definition("The Moon opposite the Sun.")
            .build(),
        GlossaryEntryBuilder::new("moon", "Moon")
            .definition("Earth's satellite.")
            .build(),
    ]
}

/// Entries whose terms contain digits, so no generated lorem prose can
/// ever contain them.
pub fn unmatchable_entries() -> Vec<GlossaryEntry> {
    vec![
        GlossaryEntryBuilder::new("node-9", "Node9").build(),
        GlossaryEntryBuilder::new("orb-7", "Orb7").build(),
    ]
}

/// `count` random lorem words joined by spaces.
pub fn lorem(count: usize) -> String {
    let words: Vec<String> = Words(count..count + 1).fake();
    words.join(" ")
}

/// A complete, valid birth-data form.
pub fn sample_birth_data() -> BirthData {
    BirthData {
        name: "Ada Lovelace".to_string(),
        birth_date: "1815-12-10".to_string(),
        birth_time: "13:00".to_string(),
        birth_place: "London, Greater London, UK".to_string(),
        timezone: "Europe/London".to_string(),
    }
}
