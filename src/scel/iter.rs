//! Sequential iteration over the words of a cell dictionary.
//!
//! The hanzi table has no terminator. Decoding is driven by the header's
//! word group count, one tick per group no matter how many words the group
//! yields, and stops early when the byte source runs out.
//!
//! # Example
//! ```no_run
//! # use scel_reader::ScelReader;
//! let mut reader = ScelReader::open("words.scel").unwrap();
//! for word in reader.iter_words().unwrap() {
//!     let word = word.unwrap();
//!     println!("{}\t{}", word.hanzi, word.pinyin);
//! }
//! ```

use std::io::Read;
use log::{debug, trace};

use super::format::words::{self, EntryOutcome};
use super::types::error::{Result, ScelError};
use super::types::models::{DecodeStats, PinyinDictionary, Word};

/// The group whose entries are currently being yielded.
struct CurrentGroup {
    reading: String,
    expected_len: usize,
    remaining: u16,
}

/// Iterator over the words of one file.
///
/// Yields `Result<Word>`. Running out of bytes ends iteration quietly; any
/// other I/O failure is yielded once, after which the iterator is exhausted.
///
/// When a word's hanzi length disagrees with its group's syllable count the
/// rest of that group is skipped and decoding resumes from the current
/// stream position. This recovers from the known producer anomaly but does
/// not guarantee the stream is back in sync.
///
/// Created by [`ScelReader::iter_words()`](crate::ScelReader::iter_words).
pub struct WordIterator<'a, R: Read> {
    source: &'a mut R,
    dict: &'a PinyinDictionary,
    budget: u32,
    group: Option<CurrentGroup>,
    stats: DecodeStats,
    finished: bool,
}

impl<'a, R: Read> WordIterator<'a, R> {
    /// Creates an iterator over a source already positioned at the hanzi table.
    pub fn new(source: &'a mut R, dict: &'a PinyinDictionary, budget: u32) -> Self {
        Self {
            source,
            dict,
            budget,
            group: None,
            stats: DecodeStats::default(),
            finished: false,
        }
    }

    /// Counters for everything decoded so far.
    pub fn stats(&self) -> DecodeStats {
        self.stats
    }

    fn stop(&mut self, err: ScelError) -> Option<Result<Word>> {
        self.finished = true;
        self.group = None;
        if err.is_end_of_data() {
            debug!("Word list ended early: {} ({})", err, self.stats);
            None
        } else {
            Some(Err(err))
        }
    }
}

impl<'a, R: Read> Iterator for WordIterator<'a, R> {
    type Item = Result<Word>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.finished {
                return None;
            }

            // Yield the next entry of the current group
            if let Some(group) = &mut self.group {
                if group.remaining > 0 {
                    group.remaining -= 1;
                    match words::read_entry(&mut *self.source, group.expected_len) {
                        Ok(EntryOutcome::Word { hanzi, weight }) => {
                            self.stats.words_emitted += 1;
                            trace!("Word: {} [{}] weight={}", hanzi, group.reading, weight);
                            return Some(Ok(Word {
                                hanzi,
                                pinyin: group.reading.clone(),
                                weight,
                            }));
                        }
                        Ok(EntryOutcome::LengthMismatch { hanzi }) => {
                            debug!(
                                "Skipping rest of group '{}': '{}' has {} chars, expected {}",
                                group.reading,
                                hanzi,
                                hanzi.chars().count(),
                                group.expected_len
                            );
                            self.stats.groups_abandoned += 1;
                            self.group = None;
                            continue;
                        }
                        Err(e) => return self.stop(e),
                    }
                }
                self.group = None;
            }

            if self.budget == 0 {
                self.finished = true;
                debug!("Word list complete: {}", self.stats);
                return None;
            }
            self.budget -= 1;

            match words::read_group_header(&mut *self.source) {
                Ok(header) => {
                    self.stats.groups_read += 1;
                    self.group = Some(CurrentGroup {
                        reading: self.dict.reading(&header.pinyin_indexes),
                        expected_len: header.expected_len(),
                        remaining: header.entry_count,
                    });
                }
                Err(e) => return self.stop(e),
            }
        }
    }
}
