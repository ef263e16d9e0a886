//! Pinyin syllable table parsing.
//!
//! # Table Structure
//! ```text
//! [4 bytes]  Entry count N (i32 LE)
//! N times:
//!   [2 bytes]  Syllable index (u16 LE)
//!   [2 bytes]  Syllable byte length L (u16 LE)
//!   [L bytes]  Syllable text (UTF-16LE)
//! ```

use std::io::{Read, Seek};
use log::{debug, info, warn};
use crate::scel::types::{
    error::Result,
    models::{PinyinDictionary, ScelHeader},
};
use crate::scel::utils;

/// Seeks to the pinyin table named by the header and loads it.
pub fn parse<R: Read + Seek>(source: &mut R, header: &ScelHeader) -> Result<PinyinDictionary> {
    utils::seek_to(source, u64::from(header.pinyin_table_offset))?;
    parse_table(source)
}

/// Loads a pinyin table from the current position.
///
/// Only the entry count is required. An entry that cannot be read ends the
/// table early and keeps what was already loaded.
pub fn parse_table<R: Read>(source: &mut R) -> Result<PinyinDictionary> {
    let declared = utils::read_i32(source)?;
    debug!("Pinyin table declares {} entries", declared);

    let mut dict = PinyinDictionary::new();
    for i in 0..declared.max(0) {
        match read_entry(source) {
            Ok((index, syllable)) => dict.insert(index, syllable),
            Err(e) => {
                warn!("Pinyin table ended at entry {} of {}: {}", i, declared, e);
                break;
            }
        }
    }

    info!("Loaded {} pinyin syllables", dict.len());
    Ok(dict)
}

fn read_entry<R: Read>(source: &mut R) -> Result<(u16, String)> {
    let index = utils::read_u16(source)?;
    let syllable = utils::read_string(source, "pinyin syllable")?;
    Ok((index, syllable))
}
