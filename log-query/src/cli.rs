use std::{
    io::{self, Write},
    path::PathBuf,
};

use clap::Parser;
use tracing::info;

use crate::{
    analytics::build_indexes,
    error::{Error, Result},
    input::{log_lines, read_log_file},
    invariants::{Address, Limit},
    query::{most_recent, top_by_frequency, unique_addresses_with_frequency},
    records::{RecordSet, Window},
    render::{OutputFormat, render},
};

#[derive(Parser, Debug)]
#[command(version, about = "Get certain patterns from Nginx & Apache access logs", long_about = None)]
pub struct Args {
    /// Apache or Nginx access log to process
    pub log_file: PathBuf,

    /// List every client address with the frequency of its hits
    #[arg(short = 'f', long, conflicts_with = "top_ten")]
    pub ip_with_freq: bool,

    /// List the top endpoints, only those hit by IP when one is given
    #[arg(
        short = 't',
        long,
        value_name = "IP",
        num_args = 0..=1,
        default_missing_value = ""
    )]
    pub top_ten: Option<String>,

    /// Only consider hits strictly between START and END, e.g. 17/May/2015:09:05:00
    #[arg(short = 'p', long, num_args = 2, value_names = ["START", "END"])]
    pub time_period: Option<Vec<String>>,

    /// Number of top results to list, a positive integer [default: 10]
    #[arg(short = 'l', long, allow_hyphen_values = true)]
    pub limit: Option<String>,

    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Plain)]
    pub output: OutputFormat,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Args {
    fn address_filter(&self) -> Option<Address> {
        self.top_ten
            .as_deref()
            .filter(|ip| !ip.is_empty())
            .map(Address::new)
    }

    fn window(&self) -> Result<Option<Window>> {
        match self.time_period.as_deref() {
            Some([start, end]) => Window::parse(start, end).map(Some),
            _ => Ok(None),
        }
    }
}

/// Reads, validates and queries the log named by `args`, writing the
/// requested reports to `out`.
pub fn run<W: Write>(args: &Args, out: &mut W) -> Result<()> {
    let text = read_log_file(&args.log_file)?;
    let records = RecordSet::build(log_lines(&text))?;
    let limit = match args.limit.as_deref() {
        Some(value) => value.parse::<Limit>()?,
        None => Limit::default(),
    };
    let records = match args.window()? {
        Some(window) => records.within(&window),
        None => records,
    };
    info!(
        file = %args.log_file.display(),
        records = records.len(),
        "loaded access log"
    );
    let indexes = build_indexes(&records);
    let format = args.output;

    if args.ip_with_freq {
        let rows = unique_addresses_with_frequency(&indexes.frequency);
        return render(out, format, "Ips with frequency of hit", &rows).map_err(output_error);
    }

    let address = args.address_filter();
    let scope = if address.is_some() {
        "APIs filtered by IP"
    } else {
        "APIs unfiltered"
    };
    let by_hits = top_by_frequency(&indexes.endpoint_hits, address.as_ref(), limit);
    let by_time = most_recent(&indexes.hits, address.as_ref(), limit);
    render(
        out,
        format,
        &format!("{scope} =>  Top {limit} as per frequency of hit"),
        &by_hits,
    )
    .map_err(output_error)?;
    render(
        out,
        format,
        &format!("{scope} =>  Top {limit} as per time"),
        &by_time,
    )
    .map_err(output_error)
}

fn output_error(source: io::Error) -> Error {
    Error::Output { source }
}
