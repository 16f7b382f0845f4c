//! CLI entry point for the Warnsdorff knight's tour search

use clap::Parser;
use greedyknight::io::cli::{Cli, TourSession};

fn main() -> greedyknight::Result<()> {
    let cli = Cli::parse();
    let session = TourSession::new(cli);
    session.run()
}
