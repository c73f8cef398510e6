//! CLI entry point for the kolam pattern generator

use clap::Parser;
use kolam::io::cli::{Cli, PatternProcessor};

fn main() -> kolam::Result<()> {
    let cli = Cli::parse();
    let mut processor = PatternProcessor::new(cli);
    processor.process()?;
    Ok(())
}
