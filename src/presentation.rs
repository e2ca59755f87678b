// src/presentation.rs
use crate::config::Config;
use crate::error::Result;
use serde::Serialize;
use std::cmp::Reverse;
use std::io::{self, Write};
use unicode_width::UnicodeWidthStr;
use word_freq_engine::FrequencyTable;
use word_freq_engine::options::{OutputFormat, SortOrder};

const WORD_HEADER: &str = "Word";
const COUNT_HEADER: &str = "Frequency";
const COLUMN_GAP: &str = "  ";

#[derive(Debug, Serialize)]
struct JsonRow<'a> {
    word: &'a str,
    count: u64,
}

/// Write the report for `table` to stdout.
///
/// # Errors
/// Returns an error if stdout cannot be written or JSON encoding fails.
pub fn print_results(table: &FrequencyTable, config: &Config) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_results(&mut out, table, config)?;
    out.flush()?;
    Ok(())
}

/// Render `table` into any writer, honouring sort order, top limit and format.
///
/// # Errors
/// Returns an error if writing or JSON encoding fails.
pub fn write_results<W: Write>(out: &mut W, table: &FrequencyTable, config: &Config) -> Result<()> {
    let mut entries = sorted_entries(table, config.sort);
    if let Some(top) = config.top {
        entries.truncate(top);
    }

    match config.format {
        OutputFormat::Table => write_table(out, &entries)?,
        OutputFormat::Csv => write_csv(out, &entries)?,
        OutputFormat::Json => write_json(out, &entries)?,
    }
    Ok(())
}

/// Entries of `table` in report order.
///
/// Frequency order has no secondary key, so equal counts keep whatever
/// order the table yielded them in.
pub fn sorted_entries(table: &FrequencyTable, order: SortOrder) -> Vec<(&str, u64)> {
    let mut entries: Vec<_> = table.iter().collect();
    match order {
        SortOrder::Alpha => entries.sort_unstable_by(|a, b| a.0.cmp(b.0)),
        SortOrder::Frequency => entries.sort_by_key(|&(_, count)| Reverse(count)),
    }
    entries
}

/// Terminal columns taken by `s`; wide CJK characters take two.
fn display_width(s: &str) -> usize {
    s.width()
}

fn digits(mut n: u64) -> usize {
    let mut width = 1;
    while n >= 10 {
        n /= 10;
        width += 1;
    }
    width
}

/// Widths of the word and count columns, headers included.
pub fn column_widths(entries: &[(&str, u64)]) -> (usize, usize) {
    entries.iter().fold(
        (display_width(WORD_HEADER), COUNT_HEADER.len()),
        |(word_w, count_w), &(word, count)| (word_w.max(display_width(word)), count_w.max(digits(count))),
    )
}

fn pad_right(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(display_width(s));
    format!("{s}{}", " ".repeat(fill))
}

pub fn write_table<W: Write>(out: &mut W, entries: &[(&str, u64)]) -> io::Result<()> {
    let (word_w, count_w) = column_widths(entries);

    writeln!(out, "{}{COLUMN_GAP}{COUNT_HEADER:>count_w$}", pad_right(WORD_HEADER, word_w))?;
    for &(word, count) in entries {
        writeln!(out, "{}{COLUMN_GAP}{count:>count_w$}", pad_right(word, word_w))?;
    }
    Ok(())
}

pub fn write_csv<W: Write>(out: &mut W, entries: &[(&str, u64)]) -> io::Result<()> {
    // words are letters only, so no field ever needs quoting
    writeln!(out, "word,frequency")?;
    for &(word, count) in entries {
        writeln!(out, "{word},{count}")?;
    }
    Ok(())
}

pub fn write_json<W: Write>(out: &mut W, entries: &[(&str, u64)]) -> Result<()> {
    let rows: Vec<JsonRow<'_>> = entries
        .iter()
        .map(|&(word, count)| JsonRow { word, count })
        .collect();
    serde_json::to_writer_pretty(&mut *out, &rows)?;
    writeln!(out)?;
    Ok(())
}
