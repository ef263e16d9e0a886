use std::path::PathBuf;
use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use scel_reader::{Converter, OutputFormat, discover_inputs};
use tracing_subscriber::EnvFilter;

/// Convert Sogou cell dictionaries (.scel) into plain text word lists.
#[derive(Parser)]
#[command(name = "scel-reader", version, about)]
struct Cli {
    /// A .scel file, or a directory whose .scel files are all converted
    #[arg(long, default_value = ".")]
    input: PathBuf,

    /// Append the tab-separated pinyin reading to every word
    #[arg(long, default_value_t = false)]
    with_pinyin: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    let cli = Cli::parse();

    let files = discover_inputs(&cli.input)
        .with_context(|| format!("cannot read input {}", cli.input.display()))?;

    let converter = Converter::new(OutputFormat::from_flag(cli.with_pinyin));
    let report = converter.convert_all(&files);

    for done in &report.converted {
        info!(
            "{} [{}]: {} words -> {}",
            done.metadata.name,
            done.metadata.category,
            done.stats.words_emitted,
            done.output.display()
        );
    }
    info!(
        "Done: {} converted, {} failed",
        report.converted.len(),
        report.failed.len()
    );

    Ok(())
}
