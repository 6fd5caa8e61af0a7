//! CLI entry point for the CSS pattern compiler

use clap::Parser;
use patterncss::io::cli::{Cli, Renderer};
use patterncss::io::logging::{self, Verbosity};

fn main() -> patterncss::Result<()> {
    let cli = Cli::parse();
    logging::init(Verbosity::from_flags(cli.quiet, cli.verbose));

    let renderer = Renderer::new(cli);
    let mut stdout = std::io::stdout().lock();
    renderer.run(&mut stdout)
}
