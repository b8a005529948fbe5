use std::path::PathBuf;

use chrono::NaiveDateTime;
use clap::Parser;
use derive_getters::Getters;

use crate::generator::TIMESTAMP_FORMAT;

#[derive(Parser, Debug, Getters)]
#[command(name = "noise-maker")]
#[command(about = "Generate fake combined access logs for testing", long_about = None)]
pub struct CliArgs {
    /// Number of lines to write
    #[arg(long, default_value_t = 1000)]
    lines: usize,

    /// Seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    /// Timestamp of the first line, e.g. 17/May/2015:10:00:00
    #[arg(long, default_value = "17/May/2015:10:00:00", value_parser = parse_start)]
    start: NaiveDateTime,

    /// Number of distinct client addresses
    #[arg(long, default_value_t = 50, value_parser = clap::value_parser!(u16).range(1..))]
    hosts: u16,

    #[arg(long, default_value_t = 10000)]
    batch_size: usize,

    /// Write to this file instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,
}

fn parse_start(value: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT)
}
