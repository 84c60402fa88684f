//! Textual rendering of a ranked series.
//!
//! Every format writes entries in series order, so descending counts are
//! preserved on the way out.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;
use wordfreq_types::WordCountSeries;

const WORD_HEADER: &str = "word";
const COUNT_HEADER: &str = "count";

/// Output format for a rendered series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Aligned two-column table with a header.
    #[default]
    Table,
    /// Tab-separated `word\tcount` lines with a header.
    Tsv,
    /// Pretty-printed JSON array of `{"word", "count"}` objects.
    Json,
}

/// Writes `series` to `out` in the given format.
pub fn render<W: Write>(series: &WordCountSeries, format: OutputFormat, out: &mut W) -> Result<()> {
    match format {
        OutputFormat::Table => render_table(series, out)?,
        OutputFormat::Tsv => render_tsv(series, out)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, series)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Renders `series` into a `String`.
pub fn render_to_string(series: &WordCountSeries, format: OutputFormat) -> Result<String> {
    let mut buf = Vec::new();
    render(series, format, &mut buf)?;
    // every format emits UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

fn render_table<W: Write>(series: &WordCountSeries, out: &mut W) -> std::io::Result<()> {
    let word_width = series
        .iter()
        .map(|e| e.word.chars().count())
        .max()
        .unwrap_or(0)
        .max(WORD_HEADER.len());
    let count_width = series
        .iter()
        .map(|e| digits(e.count))
        .max()
        .unwrap_or(0)
        .max(COUNT_HEADER.len());

    writeln!(out, "{:<word_width$}  {:>count_width$}", WORD_HEADER, COUNT_HEADER)?;
    for entry in series {
        writeln!(out, "{:<word_width$}  {:>count_width$}", entry.word, entry.count)?;
    }
    Ok(())
}

fn render_tsv<W: Write>(series: &WordCountSeries, out: &mut W) -> std::io::Result<()> {
    writeln!(out, "{}\t{}", WORD_HEADER, COUNT_HEADER)?;
    for entry in series {
        writeln!(out, "{}\t{}", entry.word, entry.count)?;
    }
    Ok(())
}

fn digits(mut n: u64) -> usize {
    let mut d = 1;
    while n >= 10 {
        n /= 10;
        d += 1;
    }
    d
}
