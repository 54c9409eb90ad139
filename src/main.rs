//! CLI entry point for the inscription corpus statistics tool

use clap::Parser;
use signstats::io::cli::{Cli, CorpusProcessor};

fn main() -> signstats::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.quiet { "warn" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .target(env_logger::Target::Stderr)
        .init();

    let mut processor = CorpusProcessor::new(cli);
    processor.process()
}
