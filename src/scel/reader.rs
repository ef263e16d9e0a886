use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;
use log::info;

use super::format;
use super::iter::WordIterator;
use super::types::error::Result;
use super::types::models::*;
use super::utils;

/// The main reader for cell dictionary files.
///
/// Parses the header and the pinyin table up front; the word list is decoded
/// lazily through [`iter_words`](Self::iter_words).
///
/// Any `Read + Seek` source works, so in-memory buffers can stand in for files.
#[derive(Debug)]
pub struct ScelReader<R: Read + Seek> {
    source: R,
    pub header: ScelHeader,
    pub pinyin: PinyinDictionary,
}

impl ScelReader<BufReader<File>> {
    /// Open a cell dictionary from the given path.
    ///
    /// # Errors
    /// Returns an error if:
    /// - File cannot be opened
    /// - The pinyin table offset or word group count cannot be read
    /// - The pinyin table's entry count cannot be read
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        info!("Opening cell dictionary: {}", path.display());
        let file = File::open(path)?;
        Self::new(BufReader::new(file))
    }
}

impl<R: Read + Seek> ScelReader<R> {
    /// Parse the header and pinyin table of an already opened source.
    pub fn new(mut source: R) -> Result<Self> {
        let header = format::header::parse(&mut source)?;
        let pinyin = format::pinyin::parse(&mut source, &header)?;

        Ok(Self {
            source,
            header,
            pinyin,
        })
    }

    /// Returns an iterator over all words, restarting from the first group.
    pub fn iter_words(&mut self) -> Result<WordIterator<'_, R>> {
        utils::seek_to(&mut self.source, self.header.hanzi_table.offset())?;
        Ok(WordIterator::new(
            &mut self.source,
            &self.pinyin,
            self.header.group_budget(),
        ))
    }

    /// Convenience method: decode every word into memory.
    ///
    /// Use for testing or small dictionaries; conversion streams instead.
    pub fn words(&mut self) -> Result<Vec<Word>> {
        self.iter_words()?.collect()
    }
}
