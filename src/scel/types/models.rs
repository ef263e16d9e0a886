//! Core data structures for cell dictionary components.
//!
//! This module defines the fundamental types used throughout the library:
//! - The fixed-offset file header and its metadata
//! - The pinyin syllable table
//! - Decoded words and per-file decoding statistics

use std::collections::HashMap;
use std::fmt;

/// Version byte that marks a file whose word list starts at the extended offset.
pub const EXTENDED_VERSION_SENTINEL: u8 = 0x45;

/// Location of the hanzi (word list) table.
///
/// The only known format discriminator is the version byte at offset 0x04:
/// files carrying [`EXTENDED_VERSION_SENTINEL`] keep their word list a little
/// further into the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HanziTable {
    Default,
    Extended,
}

impl HanziTable {
    /// Resolves the table location from the raw version byte.
    pub fn from_version(version: u8) -> Self {
        if version == EXTENDED_VERSION_SENTINEL {
            HanziTable::Extended
        } else {
            HanziTable::Default
        }
    }

    /// Absolute byte offset of the first word group.
    pub fn offset(&self) -> u64 {
        match self {
            HanziTable::Default => 0x2628,
            HanziTable::Extended => 0x26c4,
        }
    }
}

/// Descriptive text stored in the header.
///
/// Every field is best-effort: an unreadable window leaves it empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScelMetadata {
    pub name: String,
    pub category: String,
    pub description: String,
    pub samples: String,
}

/// Complete parsed header of a cell dictionary file.
#[derive(Debug, Clone)]
pub struct ScelHeader {
    /// Raw version byte from offset 0x04.
    pub version: u8,
    pub hanzi_table: HanziTable,
    /// Absolute offset of the pinyin syllable table.
    pub pinyin_table_offset: u32,
    /// Number of word groups in the hanzi table, as stored.
    pub word_group_count: i32,
    pub metadata: ScelMetadata,
}

impl ScelHeader {
    /// Number of groups the word-list decoder will attempt.
    ///
    /// A negative stored count means there is nothing to decode.
    pub fn group_budget(&self) -> u32 {
        u32::try_from(self.word_group_count).unwrap_or(0)
    }
}

/// Mapping from syllable index to pinyin syllable (e.g. `0x019d → "zhong"`).
#[derive(Debug, Clone, Default)]
pub struct PinyinDictionary {
    syllables: HashMap<u16, String>,
}

impl PinyinDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a syllable, replacing any earlier entry with the same index.
    pub fn insert(&mut self, index: u16, syllable: String) {
        self.syllables.insert(index, syllable);
    }

    /// Looks up one syllable. Unknown indexes resolve to `""`.
    pub fn syllable(&self, index: u16) -> &str {
        self.syllables.get(&index).map(String::as_str).unwrap_or("")
    }

    /// Joins the syllables for an index sequence with an apostrophe.
    pub fn reading(&self, indexes: &[u16]) -> String {
        indexes
            .iter()
            .map(|&idx| self.syllable(idx))
            .collect::<Vec<_>>()
            .join("'")
    }

    pub fn len(&self) -> usize {
        self.syllables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.syllables.is_empty()
    }
}

/// Header of one word group: a shared reading and the number of words using it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupHeader {
    pub entry_count: u16,
    pub pinyin_indexes: Vec<u16>,
}

impl GroupHeader {
    /// Number of hanzi characters every word in this group should have.
    pub fn expected_len(&self) -> usize {
        self.pinyin_indexes.len()
    }
}

/// A single decoded word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    pub hanzi: String,
    /// Syllables of the word's group joined with `'`.
    pub pinyin: String,
    pub weight: u64,
}

/// Counters collected while walking the word list of one file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecodeStats {
    /// Group headers actually read (at most the header's group budget).
    pub groups_read: u32,
    pub words_emitted: u64,
    /// Groups whose remaining entries were skipped after a length mismatch.
    pub groups_abandoned: u32,
}

impl fmt::Display for DecodeStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} groups, {} words, {} groups abandoned",
            self.groups_read, self.words_emitted, self.groups_abandoned
        )
    }
}
