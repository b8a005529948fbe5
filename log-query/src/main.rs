use std::{io, process::ExitCode};

use clap::Parser;
use log_query::cli::{Args, run};
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level)),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let stdout = io::stdout();
    match run(&args, &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            debug!(error = ?e, "run failed");
            eprintln!("Command line error => {e}");
            ExitCode::FAILURE
        }
    }
}
