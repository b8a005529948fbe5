use std::sync::LazyLock;

use regex::Regex;

use crate::{
    invariants::{Address, Endpoint, Timestamp},
    models::LogRecord,
};

// Combined log format:
// 83.149.9.216 - - [17/May/2015:10:05:03 +0000] "GET /index.html HTTP/1.1" 200 203023 "-" "Mozilla/5.0"
static COMBINED_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r#"^(?P<address>[0-9.]+)\s+-\s+(?P<ident>.*?)\s+"#,
        r#"\[(?P<timestamp>[^\]\s]+)(?:\s+[+-]\d{4})?\]\s+"#,
        r#""(?P<request>(?:[^"\\]|\\.)*)"\s+"#,
        r#"(?P<status>\d+)\s+(?P<bytes>\d+|-)\s+"#,
        r#"(?P<referrer>"(?:[^"\\]|\\.)*"|\S+)\s+"#,
        r#"(?P<agent>"(?:[^"\\]|\\.)*"|\S+)\s*$"#,
    ))
    .expect("valid combined log pattern")
});

/// Parses one combined-format line. `None` means the line does not match
/// the grammar or carries an unparseable timestamp.
pub fn parse_line(line: &str) -> Option<LogRecord> {
    let caps = COMBINED_LINE.captures(line)?;

    let timestamp = Timestamp::parse(caps.name("timestamp")?.as_str()).ok()?;

    let mut request = caps.name("request")?.as_str().split_whitespace();
    let method = request.next()?.to_string();
    let path = Endpoint::new(request.next()?);
    let _protocol = request.next()?;
    if request.next().is_some() {
        return None;
    }

    let status: u16 = caps.name("status")?.as_str().parse().ok()?;
    let bytes_sent = match caps.name("bytes")?.as_str() {
        "-" => None,
        bytes => Some(bytes.parse().ok()?),
    };

    Some(LogRecord {
        address: Address::new(caps.name("address")?.as_str()),
        timestamp,
        method,
        path,
        status,
        bytes_sent,
    })
}
