// src/main.rs
use clap::Parser;
use clap::error::ErrorKind;
use std::process::ExitCode;
use word_freq::cli::Args;
use word_freq::config::Config;

fn init_logger(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            // usage requests count as failures; only --version exits cleanly
            let _ = err.print();
            return if err.kind() == ErrorKind::DisplayVersion {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            };
        }
    };
    init_logger(args.verbose);

    let config = Config::from(args);
    match word_freq::run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Application Error: {e}");
            ExitCode::FAILURE
        }
    }
}
