//! possibilities CLI - Search space size and exhaustive search time estimator.

use anyhow::Result;
use clap::Parser;
use possibilities_lib::prelude::*;

mod commands;
mod logging;

#[derive(Parser)]
#[command(name = "possibilities")]
#[command(about = "Estimate search space size and time to test it exhaustively", long_about = None)]
#[command(version)]
struct Cli {
    /// Branching model (a/decay, b/harmonic)
    #[arg(long, default_value_t = Variant::Decay)]
    variant: Variant,

    /// Pattern length. Defaults to 13 for decay, 14 for harmonic.
    #[arg(short, long)]
    length: Option<usize>,

    /// Alphabet length the decay model starts from
    #[arg(short, long)]
    alphabet: Option<u32>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Quiet mode (suppress log output)
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    commands::estimate::estimate(cli.variant, cli.length, cli.alphabet)
}
