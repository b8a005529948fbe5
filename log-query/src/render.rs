use std::io::{self, Write};

use clap::ValueEnum;
use num_format::{Locale, ToFormattedString};
use serde::Serialize;

use crate::query::{AddressFrequency, EndpointFrequency, EndpointRecency};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Plain,
    Json,
}

/// A query result row that can be printed either way.
pub trait Row: Serialize {
    fn plain(&self) -> String;
}

impl Row for AddressFrequency {
    fn plain(&self) -> String {
        format!(
            "{} - {}",
            self.address,
            self.frequency.to_formatted_string(&Locale::en)
        )
    }
}

impl Row for EndpointFrequency {
    fn plain(&self) -> String {
        format!(
            "{} - {} - {}",
            self.key.address,
            self.key.endpoint,
            self.frequency.to_formatted_string(&Locale::en)
        )
    }
}

impl Row for EndpointRecency {
    fn plain(&self) -> String {
        format!("{} - {} - {}", self.key.address, self.key.endpoint, self.time)
    }
}

/// Writes one result section. Plain output gets a heading and a placeholder
/// for empty results; JSON output is one object per line and nothing else.
pub fn render<W, R>(out: &mut W, format: OutputFormat, heading: &str, rows: &[R]) -> io::Result<()>
where
    W: Write,
    R: Row,
{
    match format {
        OutputFormat::Plain => {
            writeln!(out, "\n[+] {heading}")?;
            if rows.is_empty() {
                writeln!(out, "No results found")?;
            }
            for row in rows {
                writeln!(out, "{}", row.plain())?;
            }
        }
        OutputFormat::Json => {
            for row in rows {
                serde_json::to_writer(&mut *out, row)?;
                writeln!(out)?;
            }
        }
    }
    Ok(())
}
