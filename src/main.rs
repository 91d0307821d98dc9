//! logotrim CLI entrypoint.
//!
//! Provides a thin wrapper over the `cli` module: parse args, run the trim,
//! and exit with a non-zero status on any error.
//! For programmatic use, prefer the library API (`logotrim::api`).

use clap::Parser;

mod cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = cli::CliArgs::parse();
    cli::run(args)
}
