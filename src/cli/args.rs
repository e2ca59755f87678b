// src/cli/args.rs
use std::path::PathBuf;

use clap::{Parser, ValueHint};

use super::{
    parsers::{parse_min_length, parse_positive_usize},
    value_enum::{CliOutputFormat, CliSortOrder},
};

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "word_freq",
    version = crate::VERSION,
    about = "Count word occurrences across text files",
    long_about = "Count word occurrences across text files.\n\n\
        Every file is scanned on its own thread. Words are maximal runs of letters, \
        folded to lowercase; words shorter than --min-length characters are ignored. \
        Files that cannot be read are reported on stderr and skipped.",
    arg_required_else_help = true
)]
pub struct Args {
    /// Files to scan
    #[arg(required = true, value_hint = ValueHint::FilePath)]
    pub paths: Vec<PathBuf>,

    /// Row order of the report
    #[arg(long, value_enum, default_value = "freq", help_heading = "Output")]
    pub sort: CliSortOrder,

    /// Output format
    #[arg(long, value_enum, default_value = "table", help_heading = "Output")]
    pub format: CliOutputFormat,

    /// Show only the first N rows
    #[arg(long, value_parser = parse_positive_usize, help_heading = "Output")]
    pub top: Option<usize>,

    /// Minimum word length in characters
    #[arg(long, default_value = "2", value_parser = parse_min_length, help_heading = "Counting")]
    pub min_length: usize,

    /// Buffer size of the result channel (never smaller than the number of files)
    #[arg(long, value_parser = parse_positive_usize, help_heading = "Counting")]
    pub channel_capacity: Option<usize>,

    /// Log progress details to stderr (RUST_LOG takes precedence)
    #[arg(short, long)]
    pub verbose: bool,
}
