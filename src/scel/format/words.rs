//! Word list record parsing.
//!
//! The hanzi table is a run of word groups. Each group shares one pinyin
//! reading and carries one or more words:
//!
//! ```text
//! Group:
//!   [2 bytes]  Entry count (u16 LE)
//!   [2 bytes]  Index sequence byte length P (u16 LE)
//!   [P bytes]  P / 2 pinyin syllable indexes (u16 LE each)
//!   Entry count times:
//!     [2 bytes]  Hanzi byte length H (u16 LE)
//!     [H bytes]  Hanzi (UTF-16LE)
//!     [2 bytes]  Extension length (u16 LE, normally 0x0a)
//!     [8 bytes]  Weight (u64 LE)
//!     [2 bytes]  Reserved
//! ```
//!
//! These functions parse one piece at a time; [`WordIterator`](crate::scel::iter::WordIterator)
//! drives them.

use std::io::Read;
use log::trace;
use crate::scel::types::{error::Result, models::GroupHeader};
use crate::scel::utils;

/// Outcome of reading one entry inside a group.
#[derive(Debug, PartialEq, Eq)]
pub enum EntryOutcome {
    /// A complete word whose length matches the group's reading.
    Word { hanzi: String, weight: u64 },
    /// The hanzi length disagrees with the group's syllable count. Only the
    /// hanzi string has been consumed.
    LengthMismatch { hanzi: String },
}

/// Reads a group's entry count and pinyin index sequence.
pub fn read_group_header<R: Read>(source: &mut R) -> Result<GroupHeader> {
    let entry_count = utils::read_u16(source)?;
    let index_bytes = utils::read_u16(source)?;

    // An odd trailing byte is left in the stream.
    let pinyin_indexes = (0..index_bytes / 2)
        .map(|_| utils::read_u16(source))
        .collect::<Result<Vec<u16>>>()?;

    trace!("Group: {} entries, indexes {:?}", entry_count, pinyin_indexes);
    Ok(GroupHeader { entry_count, pinyin_indexes })
}

/// Reads one entry, checking its hanzi length against `expected_len`.
pub fn read_entry<R: Read>(source: &mut R, expected_len: usize) -> Result<EntryOutcome> {
    let hanzi = utils::read_string(source, "hanzi")?;
    if hanzi.chars().count() != expected_len {
        return Ok(EntryOutcome::LengthMismatch { hanzi });
    }

    let _extension_len = utils::read_u16(source)?;
    let weight = utils::read_u64(source)?;
    let mut reserved = [0u8; 2];
    source.read_exact(&mut reserved)?;

    Ok(EntryOutcome::Word { hanzi, weight })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn entry_bytes(hanzi: &str, weight: u64) -> Vec<u8> {
        let text: Vec<u8> = hanzi.encode_utf16().flat_map(u16::to_le_bytes).collect();
        let mut buf = (text.len() as u16).to_le_bytes().to_vec();
        buf.extend(text);
        buf.extend(10u16.to_le_bytes());
        buf.extend(weight.to_le_bytes());
        buf.extend([0, 0]);
        buf
    }

    #[test]
    fn reads_group_header() {
        let buf = vec![2, 0, 4, 0, 0x9d, 0x01, 0x5a, 0x00];
        let header = read_group_header(&mut Cursor::new(buf)).unwrap();
        assert_eq!(header.entry_count, 2);
        assert_eq!(header.pinyin_indexes, vec![0x19d, 0x5a]);
        assert_eq!(header.expected_len(), 2);
    }

    #[test]
    fn odd_index_byte_is_left_unread() {
        let mut cur = Cursor::new(vec![1, 0, 3, 0, 7, 0, 0xff]);
        let header = read_group_header(&mut cur).unwrap();
        assert_eq!(header.pinyin_indexes, vec![7]);
        assert_eq!(cur.position(), 6);
    }

    #[test]
    fn reads_matching_entry() {
        let mut cur = Cursor::new(entry_bytes("中国", 1234));
        let outcome = read_entry(&mut cur, 2).unwrap();
        assert_eq!(outcome, EntryOutcome::Word { hanzi: "中国".into(), weight: 1234 });
        assert_eq!(cur.position(), cur.get_ref().len() as u64);
    }

    #[test]
    fn mismatch_consumes_only_hanzi() {
        let mut cur = Cursor::new(entry_bytes("中国人", 1));
        let outcome = read_entry(&mut cur, 2).unwrap();
        assert_eq!(outcome, EntryOutcome::LengthMismatch { hanzi: "中国人".into() });
        assert_eq!(cur.position(), 2 + 6);
    }

    #[test]
    fn truncated_entry_is_end_of_data() {
        let mut buf = entry_bytes("中", 1);
        buf.truncate(buf.len() - 3);
        let err = read_entry(&mut Cursor::new(buf), 1).unwrap_err();
        assert!(err.is_end_of_data());
    }
}
