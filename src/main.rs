//! CLI entry point for the rectangle subdivision art generator

use clap::Parser;
use subdivart::io::cli::{ArtProcessor, Cli};
use subdivart::io::logging::init_logging;

fn main() -> subdivart::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let processor = ArtProcessor::new(cli);
    processor.process()?;
    Ok(())
}
