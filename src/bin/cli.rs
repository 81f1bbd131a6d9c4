// src/bin/cli.rs
use ane_scrape::cli::{self, Cli};
use clap::Parser;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Cli::parse();
    ane_scrape::log::init(args.verbose);
    cli::run(args);
    Ok(())
}
