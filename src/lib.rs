//! # scel-reader
//!
//! A reader for Sogou cell dictionary (`.scel`) files.
//! Decodes the header metadata, the pinyin syllable table and the word list,
//! and converts dictionaries into plain text word lists.
pub mod scel;

// Re-export the main types for convenience
pub use scel::{
    ScelReader,
    ScelError,
    Result,
    convert::{BatchReport, ConversionReport, Converter, OutputFormat, output_path},
    discover::discover_inputs,
    iter::WordIterator,
    types::models::{
        DecodeStats,
        HanziTable,
        PinyinDictionary,
        ScelHeader,
        ScelMetadata,
        Word,
    },
};
