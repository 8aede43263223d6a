use address_sort::cli::{args::Args, commands};
use address_sort::constants::EXIT_FATAL;
use anyhow::Context;
use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    // Parse command line arguments
    let args = Args::parse();

    let result = commands::run(args).context("Address sorting aborted");

    match result {
        // Per-file results have already been reported by the command
        Ok(report) => ExitCode::from(commands::exit_code(&report)),
        Err(error) => {
            eprintln!("Error: {:#}", error);
            ExitCode::from(EXIT_FATAL)
        }
    }
}
