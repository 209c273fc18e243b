//! CLI entry point for the crossword generator

use clap::Parser;
use crossfill::io::cli::{Cli, CrosswordProcessor};
use crossfill::io::logging::init_logger;

fn main() -> crossfill::Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);
    CrosswordProcessor::new(cli).process()
}
