//! CLI entry point for the polygon square-tiling tool

use clap::Parser;
use polytile::io::cli::{Cli, RingProcessor};

fn main() -> polytile::Result<()> {
    let cli = Cli::parse();
    let mut processor = RingProcessor::new(cli);
    processor.process()
}
