//! Low-level byte reading utilities

use std::io::{Read, Seek, SeekFrom};
use byteorder::{LittleEndian, ReadBytesExt};
use encoding_rs::UTF_16LE;
use crate::scel::types::error::{Result, ScelError};

/// Seek to an absolute byte offset.
pub fn seek_to<S: Seek>(source: &mut S, offset: u64) -> Result<()> {
    source.seek(SeekFrom::Start(offset))?;
    Ok(())
}

pub fn read_u8<R: Read>(source: &mut R) -> Result<u8> {
    Ok(source.read_u8()?)
}

pub fn read_u16<R: Read>(source: &mut R) -> Result<u16> {
    Ok(source.read_u16::<LittleEndian>()?)
}

pub fn read_u32<R: Read>(source: &mut R) -> Result<u32> {
    Ok(source.read_u32::<LittleEndian>()?)
}

pub fn read_i32<R: Read>(source: &mut R) -> Result<i32> {
    Ok(source.read_i32::<LittleEndian>()?)
}

pub fn read_u64<R: Read>(source: &mut R) -> Result<u64> {
    Ok(source.read_u64::<LittleEndian>()?)
}

/// Decode UTF-16LE bytes without BOM sniffing.
///
/// Malformed code units (lone surrogates, a dangling odd byte) become
/// U+FFFD instead of failing.
pub fn decode_utf16le(bytes: &[u8]) -> String {
    let (text, had_errors) = UTF_16LE.decode_without_bom_handling(bytes);
    if had_errors {
        log::trace!("Replaced malformed UTF-16LE in {} byte field", bytes.len());
    }
    text.into_owned()
}

/// Strip the NUL padding of a fixed-width field.
pub fn trim_nul(text: &str) -> &str {
    text.trim_end_matches('\0')
}

/// Read up to `buf.len()` bytes, stopping early only at end of input.
///
/// Returns how many bytes were filled.
pub fn read_available<R: Read>(source: &mut R, buf: &mut [u8]) -> Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match source.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        }
    }
    Ok(filled)
}

/// Read a length-prefixed UTF-16LE string.
///
/// Layout: `u16` byte length, then exactly that many bytes. The text is not
/// NUL-trimmed.
pub fn read_string<R: Read>(source: &mut R, context: &'static str) -> Result<String> {
    let len = read_u16(source)? as usize;
    let mut bytes = vec![0u8; len];
    let found = read_available(source, &mut bytes)?;
    if found < len {
        return Err(ScelError::Truncated {
            context,
            expected: len as u64,
            found: found as u64,
        });
    }
    Ok(decode_utf16le(&bytes))
}

/// Read a fixed-width, NUL-padded UTF-16LE window at an absolute offset.
///
/// A window cut short by end of file is decoded from whatever was read.
pub fn read_fixed_text<R: Read + Seek>(source: &mut R, offset: u64, width: usize) -> Result<String> {
    seek_to(source, offset)?;
    let mut bytes = vec![0u8; width];
    let found = read_available(source, &mut bytes)?;
    bytes.truncate(found);
    Ok(trim_nul(&decode_utf16le(&bytes)).to_owned())
}
