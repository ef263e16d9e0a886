//! Cell dictionary header parsing.
//!
//! The header is a set of fields at fixed absolute offsets:
//!
//! ```text
//! 0x0000  u32 LE   pinyin table offset          (required)
//! 0x0004  u8       format version               (0x45 → extended hanzi table)
//! 0x0124  i32 LE   word group count             (required)
//! 0x0130  0x200    name          UTF-16LE, NUL padded
//! 0x0338  0x200    category
//! 0x0540  0x800    description
//! 0x0d40  0x800    samples
//! ```
//!
//! Only the two required fields can fail the parse. Descriptive text is
//! best-effort and left empty when it cannot be read.

use std::io::{Read, Seek};
use log::{debug, info, warn};
use crate::scel::types::{
    error::Result,
    models::{HanziTable, ScelHeader, ScelMetadata},
};
use crate::scel::utils;

const PINYIN_TABLE_OFFSET_POS: u64 = 0x00;
const VERSION_POS: u64 = 0x04;
const WORD_GROUP_COUNT_POS: u64 = 0x124;

const NAME_FIELD: (u64, usize) = (0x130, 0x200);
const CATEGORY_FIELD: (u64, usize) = (0x338, 0x200);
const DESCRIPTION_FIELD: (u64, usize) = (0x540, 0x800);
const SAMPLES_FIELD: (u64, usize) = (0xd40, 0x800);

/// Parses the fixed-offset header of a cell dictionary.
///
/// The source may be positioned anywhere; every field is read by absolute offset.
pub fn parse<R: Read + Seek>(source: &mut R) -> Result<ScelHeader> {
    info!("Parsing cell dictionary header");

    utils::seek_to(source, PINYIN_TABLE_OFFSET_POS)?;
    let pinyin_table_offset = utils::read_u32(source)?;

    let version = utils::seek_to(source, VERSION_POS)
        .and_then(|_| utils::read_u8(source))
        .unwrap_or_else(|e| {
            warn!("Version byte unreadable ({}), assuming default layout", e);
            0
        });
    let hanzi_table = HanziTable::from_version(version);
    debug!("Version byte {:#04x}, hanzi table at {:#x}", version, hanzi_table.offset());

    utils::seek_to(source, WORD_GROUP_COUNT_POS)?;
    let word_group_count = utils::read_i32(source)?;
    if word_group_count < 0 {
        warn!("Negative word group count {}, no words will be decoded", word_group_count);
    }

    let metadata = ScelMetadata {
        name: read_text_field(source, "name", NAME_FIELD),
        category: read_text_field(source, "category", CATEGORY_FIELD),
        description: read_text_field(source, "description", DESCRIPTION_FIELD),
        samples: read_text_field(source, "samples", SAMPLES_FIELD),
    };

    info!(
        "Header parsed: name='{}', category='{}', groups={}, version={:#04x}",
        metadata.name, metadata.category, word_group_count, version
    );

    Ok(ScelHeader {
        version,
        hanzi_table,
        pinyin_table_offset,
        word_group_count,
        metadata,
    })
}

fn read_text_field<R: Read + Seek>(source: &mut R, label: &str, (offset, width): (u64, usize)) -> String {
    match utils::read_fixed_text(source, offset, width) {
        Ok(text) => text,
        Err(e) => {
            warn!("Could not read header field '{}' at {:#x}: {}", label, offset, e);
            String::new()
        }
    }
}
