use std::path::PathBuf;

use derive_more::{Display, Error};

use crate::invariants::Timestamp;

pub type Result<T, E = Error> = std::result::Result<T, E>;

const SUPPORTED_LINE: &str = r#"83.149.9.216 - - [17/May/2015:10:05:03 +0000] "GET /presentations/logstash-monitorama-2013/images/kibana-search.png HTTP/1.1" 200 203023 "http://semicomplete.com/presentations/logstash-monitorama-2013/" "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_9_1) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/32.0.1700.77 Safari/537.36""#;

#[derive(Debug, Display, Error)]
pub enum Error {
    #[display(
        "Faulty line {line_number}: {line}\nSupplied file does not look like a supported apache/nginx log format\nThe supported logs contain lines like:\n{SUPPORTED_LINE}"
    )]
    GrammarMismatch { line_number: usize, line: String },

    #[display("Start date should be less than the end date (start {start}, end {end})")]
    InvalidTimeRange { start: Timestamp, end: Timestamp },

    #[display(
        "Invalid date format {value:?}. Start & end date needed as %d/%b/%Y:%H:%M:%S e.g. 17/May/2015:09:05:00"
    )]
    InvalidTimestampFormat { value: String },

    #[display("Limit can be only positive integer, got {value:?}")]
    InvalidLimit { value: String },

    #[display("Supplied logfile {} not found", path.display())]
    LogFileNotFound { path: PathBuf },

    #[display("Supplied logfile {} is not a text file", path.display())]
    NotText { path: PathBuf },

    #[display("Supplied logfile {} is empty", path.display())]
    EmptyLogFile { path: PathBuf },

    #[display("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[display("Failed to write results: {source}")]
    Output { source: std::io::Error },
}
