mod args;
mod generator;
mod stream;

use std::{
    error::Error,
    fs::File,
    io::{self, BufWriter},
};

use args::CliArgs;
use clap::Parser;
use generator::LogGenerator;
use rand::{SeedableRng, rngs::StdRng};
use stream::write_log;

fn main() -> Result<(), Box<dyn Error>> {
    let args = CliArgs::parse();
    let rng = match args.seed() {
        Some(seed) => StdRng::seed_from_u64(*seed),
        None => StdRng::from_os_rng(),
    };
    let mut generator = LogGenerator::new(rng, *args.hosts(), *args.start());
    eprintln!(
        "Generating {} log lines from {} hosts",
        args.lines(),
        args.hosts()
    );

    match args.output() {
        Some(path) => write_log(
            &mut generator,
            *args.lines(),
            *args.batch_size(),
            BufWriter::new(File::create(path)?),
        )?,
        None => write_log(
            &mut generator,
            *args.lines(),
            *args.batch_size(),
            io::stdout().lock(),
        )?,
    }
    Ok(())
}
