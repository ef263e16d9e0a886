//! File format parsing layer for cell dictionary files.
//!
//! This module sits between raw byte reads ([`utils`](crate::scel::utils))
//! and the high-level [`ScelReader`](crate::scel::reader::ScelReader).
//!
//! # Module Organization
//!
//! - [`header`]: Fixed-offset header fields and descriptive metadata
//! - [`pinyin`]: The syllable index → pinyin table
//! - [`words`]: Word group and entry records of the hanzi table
//!
//! # Architecture
//!
//! ```text
//! File Structure:
//! ┌──────────────────┐
//! │  Header          │ ← header::parse()
//! │  (fixed offsets) │
//! ├──────────────────┤
//! │  Pinyin Table    │ ← pinyin::parse()
//! ├──────────────────┤
//! │  Hanzi Table     │ ← words::read_group_header()
//! │  (word groups)   │   words::read_entry()
//! └──────────────────┘
//! ```

pub mod header;
pub mod pinyin;
pub mod words;
