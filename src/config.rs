// src/config.rs
use crate::cli::Args;
pub use word_freq_engine::config::Config;

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self {
            paths: args.paths,
            min_chars: args.min_length,
            channel_capacity: args.channel_capacity,
            sort: args.sort.into(),
            format: args.format.into(),
            top: args.top,
        }
    }
}
