//! CLI entry point for the terminal cellular automaton simulator

use clap::Parser;
use lifegrid::io::cli::{Cli, Simulation};
use lifegrid::io::logging;
use std::process::ExitCode;

// Allow print for reporting the failure reason before exiting
#[allow(clippy::print_stderr)]
fn main() -> ExitCode {
    logging::init();
    let cli = Cli::parse();

    match Simulation::new(cli).run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::FAILURE
        }
    }
}
