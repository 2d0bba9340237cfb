//! Data store — the glossary reference data compiled into the binary.
//!
//! Both collections are plain `static` slices: they are built at compile time,
//! never mutated and never torn down. Collection order is meaningful; the
//! query and search layers preserve it.

use crate::types::{GlossaryCategory, GlossaryEntry};

/// All glossary categories, in display order.
pub static CATEGORIES: &[GlossaryCategory] = &[
    GlossaryCategory {
        id: "planets",
        name: "Planets",
        description: "The celestial bodies and their astrological meanings",
        color: "bg-blue-500",
    },
    GlossaryCategory {
        id: "signs",
        name: "Zodiac Signs",
        description: "The twelve astrological signs and their characteristics",
        color: "bg-purple-500",
    },
    GlossaryCategory {
        id: "houses",
        name: "Houses",
        description: "The twelve astrological houses and life areas",
        color: "bg-green-500",
    },
    GlossaryCategory {
        id: "aspects",
        name: "Aspects",
        description: "Angular relationships between planets",
        color: "bg-red-500",
    },
    GlossaryCategory {
        id: "techniques",
        name: "Techniques",
        description: "Astrological methods and practices",
        color: "bg-yellow-500",
    },
];

/// All glossary entries, in display order.
pub static ENTRIES: &[GlossaryEntry] = &[
    GlossaryEntry {
        id: "sun",
        term: "Sun",
        definition: "The central star of our solar system, representing the core self, ego, \
                     vitality, and life force in astrology. The Sun sign is determined by the \
                     zodiac sign the Sun was in at the time of birth.",
        category: "planets",
        related_terms: &["solar-return", "ego", "vitality"],
        etymology: Some("From Old English \"sunne\", related to Latin \"sol\""),
        examples: &[
            "A Leo Sun person tends to be confident and dramatic",
            "The Sun represents the father figure in traditional astrology",
        ],
        tags: &["core-self", "identity", "vitality", "masculine"],
    },
    GlossaryEntry {
        id: "moon",
        term: "Moon",
        definition: "Earth's natural satellite, representing emotions, intuition, the \
                     subconscious mind, and nurturing qualities in astrology. The Moon sign \
                     reflects one's emotional nature and inner world.",
        category: "planets",
        related_terms: &["emotions", "intuition", "cycles"],
        etymology: Some("From Old English \"mōna\", related to Proto-Germanic \"mēnô\""),
        examples: &[
            "A Cancer Moon person is deeply emotional and nurturing",
            "The Moon governs the tides and emotional cycles",
        ],
        tags: &["emotions", "intuition", "feminine", "cycles"],
    },
    GlossaryEntry {
        id: "aries",
        term: "Aries",
        definition: "The first sign of the zodiac, ruled by Mars. Aries is a cardinal fire sign \
                     known for leadership, initiative, courage, and pioneering spirit. Those \
                     born under this sign are often energetic and competitive.",
        category: "signs",
        related_terms: &["mars", "cardinal", "fire-element"],
        etymology: Some("From Latin \"ariēs\" meaning ram"),
        examples: &[
            "Aries season begins at the spring equinox",
            "An Aries rising person appears confident and assertive",
        ],
        tags: &["leadership", "initiative", "fire", "cardinal", "mars-ruled"],
    },
    GlossaryEntry {
        id: "first-house",
        term: "First House",
        definition: "The first of the twelve astrological houses, representing the self, \
                     identity, appearance, and first impressions. Also known as the Ascendant \
                     or Rising sign, it shows how others perceive you.",
        category: "houses",
        related_terms: &["ascendant", "rising-sign", "identity"],
        etymology: Some("From the concept of the \"house of self\" in traditional astrology"),
        examples: &[
            "The first house cusp is your rising sign",
            "Planets in the first house strongly influence your personality",
        ],
        tags: &["identity", "appearance", "first-impressions", "ascendant"],
    },
    GlossaryEntry {
        id: "conjunction",
        term: "Conjunction",
        definition: "An aspect formed when two planets are within 0-8 degrees of each other, \
                     creating a powerful blending of their energies. Conjunctions represent \
                     unity, new beginnings, and concentrated power.",
        category: "aspects",
        related_terms: &["aspects", "orb", "planetary-energy"],
        etymology: Some("From Latin \"conjunctio\" meaning joining together"),
        examples: &[
            "A Sun-Moon conjunction creates a New Moon",
            "Mars conjunct Venus blends passion with love",
        ],
        tags: &["unity", "power", "blending", "new-beginnings"],
    },
    GlossaryEntry {
        id: "natal-chart",
        term: "Natal Chart",
        definition: "A map of the heavens at the exact moment of birth, showing the positions \
                     of planets, signs, and houses. Also called a birth chart, it serves as the \
                     foundation for astrological interpretation.",
        category: "techniques",
        related_terms: &["birth-chart", "horoscope", "planetary-positions"],
        etymology: Some("From Latin \"natalis\" meaning of birth"),
        examples: &[
            "Your natal chart is calculated using birth date, time, and location",
            "The natal chart shows your cosmic blueprint",
        ],
        tags: &["birth", "foundation", "interpretation", "blueprint"],
    },
];

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn entry_ids_are_unique() {
        let ids: HashSet<_> = ENTRIES.iter().map(|e| e.id).collect();
        assert_eq!(ids.len(), ENTRIES.len());
    }

    #[test]
    fn category_ids_are_unique() {
        let ids: HashSet<_> = CATEGORIES.iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), CATEGORIES.len());
    }

    #[test]
    fn every_entry_references_a_known_category() {
        for entry in ENTRIES {
            assert!(
                CATEGORIES.iter().any(|c| c.id == entry.category),
                "entry {:?} has unknown category {:?}",
                entry.id,
                entry.category
            );
        }
    }

    #[test]
    fn definitions_are_single_spaced() {
        // Line continuations in the literals must not leave runs of spaces.
        for entry in ENTRIES {
            assert!(!entry.definition.contains("  "), "{}", entry.id);
        }
    }
}
