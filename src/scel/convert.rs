//! Conversion of cell dictionaries into plain text word lists.
//!
//! One file is converted at a time. Words are written as they are decoded,
//! and a failure in one file never stops a batch.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Seek, Write};
use std::path::{Path, PathBuf};
use log::{error, info};

use super::reader::ScelReader;
use super::types::error::{Result, ScelError};
use super::types::models::{DecodeStats, ScelHeader, ScelMetadata, Word};

/// Extension given to converted files.
pub const OUTPUT_EXTENSION: &str = "txt";

/// Shape of each output line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// `<hanzi>\n`
    #[default]
    HanziOnly,
    /// `<hanzi>\t<pinyin>\n`
    WithPinyin,
}

impl OutputFormat {
    pub fn from_flag(with_pinyin: bool) -> Self {
        if with_pinyin {
            OutputFormat::WithPinyin
        } else {
            OutputFormat::HanziOnly
        }
    }

    /// Writes one word as a single line.
    pub fn write_word<W: Write>(&self, out: &mut W, word: &Word) -> std::io::Result<()> {
        match self {
            OutputFormat::HanziOnly => writeln!(out, "{}", word.hanzi),
            OutputFormat::WithPinyin => writeln!(out, "{}\t{}", word.hanzi, word.pinyin),
        }
    }
}

/// Result of converting one file.
#[derive(Debug)]
pub struct ConversionReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub metadata: ScelMetadata,
    pub stats: DecodeStats,
}

/// Result of converting a list of files.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub converted: Vec<ConversionReport>,
    pub failed: Vec<(PathBuf, ScelError)>,
}

/// Path of the text file written for `input`: same directory, `.txt` extension.
pub fn output_path(input: &Path) -> PathBuf {
    input.with_extension(OUTPUT_EXTENSION)
}

/// Converts cell dictionaries using a fixed output format.
#[derive(Debug, Clone, Copy, Default)]
pub struct Converter {
    format: OutputFormat,
}

impl Converter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Decodes `source` and streams every word into `sink`.
    ///
    /// Words already written stay in `sink` if decoding fails part way.
    pub fn convert_stream<R: Read + Seek, W: Write>(
        &self,
        source: R,
        sink: &mut W,
    ) -> Result<(ScelHeader, DecodeStats)> {
        let mut reader = ScelReader::new(source)?;

        let stats = {
            let mut words = reader.iter_words()?;
            for word in words.by_ref() {
                self.format.write_word(sink, &word?)?;
            }
            words.stats()
        };
        sink.flush()?;

        Ok((reader.header, stats))
    }

    /// Converts one file into a sibling `.txt` file, replacing any existing one.
    pub fn convert_file(&self, input: &Path) -> Result<ConversionReport> {
        let output = output_path(input);
        let source = BufReader::new(File::open(input)?);
        let mut sink = BufWriter::new(File::create(&output)?);

        let (header, stats) = self.convert_stream(source, &mut sink)?;
        info!(
            "Converted '{}' ({}): {} -> {}",
            header.metadata.name,
            stats,
            input.display(),
            output.display()
        );

        Ok(ConversionReport {
            input: input.to_path_buf(),
            output,
            metadata: header.metadata,
            stats,
        })
    }

    /// Converts every input in order, isolating failures per file.
    pub fn convert_all<P: AsRef<Path>>(&self, inputs: &[P]) -> BatchReport {
        let mut report = BatchReport::default();
        for input in inputs {
            let input = input.as_ref();
            info!("{}", input.display());
            match self.convert_file(input) {
                Ok(done) => report.converted.push(done),
                Err(e) => {
                    error!("Failed to convert {}: {}", input.display(), e);
                    report.failed.push((input.to_path_buf(), e));
                }
            }
        }
        report
    }
}
