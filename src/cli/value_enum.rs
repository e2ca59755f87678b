use clap::ValueEnum;
use word_freq_engine::options::{OutputFormat, SortOrder};

#[derive(Clone, Copy, Debug, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CliOutputFormat {
    Table,
    Csv,
    Json,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(value: CliOutputFormat) -> Self {
        match value {
            CliOutputFormat::Table => OutputFormat::Table,
            CliOutputFormat::Csv => OutputFormat::Csv,
            CliOutputFormat::Json => OutputFormat::Json,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CliSortOrder {
    /// Alphabetical by word
    Alpha,
    /// Most frequent first
    Freq,
}

impl From<CliSortOrder> for SortOrder {
    fn from(value: CliSortOrder) -> Self {
        match value {
            CliSortOrder::Alpha => SortOrder::Alpha,
            CliSortOrder::Freq => SortOrder::Frequency,
        }
    }
}
