//! Term index — FST-backed prefix completion over entry terms.
//!
//! Keys are lowercased terms, values are positions in the entry slice the
//! index was built from. When two terms collide case-insensitively the first
//! entry wins.

use crate::error::Result;
use crate::types::GlossaryEntry;
use fst::{automaton::Str, Automaton, IntoStreamer, Map, Streamer};
use std::collections::BTreeMap;

pub struct TermIndex<'a> {
    map: Map<Vec<u8>>,
    entries: &'a [GlossaryEntry],
}

impl<'a> TermIndex<'a> {
    pub fn build(entries: &'a [GlossaryEntry]) -> Result<Self> {
        // fst requires keys in lexicographic order.
        let mut keys: BTreeMap<String, u64> = BTreeMap::new();
        for (pos, entry) in entries.iter().enumerate() {
            keys.entry(entry.term.to_lowercase()).or_insert(pos as u64);
        }
        let map = Map::from_iter(keys)?;
        Ok(Self { map, entries })
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Entries whose term starts with `prefix` (trimmed, case-insensitive),
    /// in lexicographic term order. A blank prefix completes nothing.
    pub fn complete(&self, prefix: &str) -> Vec<&'a GlossaryEntry> {
        let prefix = prefix.trim().to_lowercase();
        if prefix.is_empty() {
            return Vec::new();
        }

        let matcher = Str::new(&prefix).starts_with();
        let mut stream = self.map.search(matcher).into_stream();
        let mut out = Vec::new();
        while let Some((_, pos)) = stream.next() {
            if let Some(entry) = self.entries.get(pos as usize) {
                out.push(entry);
            }
        }
        out
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
