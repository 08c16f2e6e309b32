//! Airboard interactive shell
//!
//! Menu-driven front end for the cabin engine. Reads choices from stdin,
//! prints results to stdout, logs to stderr.
//!
//! Usage:
//!   cargo run -p airboard-cli
//!   cargo run -p airboard-cli -- --rows 10 --seats-per-row 6 --seed 42
//!   RUST_LOG=airboard_logic=debug cargo run -p airboard-cli

mod args;
mod logging;
mod names;
mod render;
mod session;

use std::io;

use airboard_logic::cabin::Cabin;
use anyhow::Context;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::args::Cli;
use crate::session::Session;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_logging(&cli.log_level)?;

    let config = cli.cabin_config()?;
    let cabin = Cabin::new(&config).context("invalid cabin dimensions")?;
    log::info!(
        "cabin ready: {} rows x {} seats",
        cabin.rows(),
        cabin.seats_per_row()
    );

    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let cabin = Session::new(cabin, stdin.lock(), stdout.lock(), rng).run()?;
    log::info!(
        "session ended with {} seated and {} waiting",
        cabin.occupied(),
        cabin.queue_len()
    );
    Ok(())
}
