use tracing::debug;

use crate::{
    error::{Error, Result},
    invariants::Timestamp,
    models::LogRecord,
    parser::parse_line,
};

/// Exclusive time range: a record is inside when `start < timestamp < end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    start: Timestamp,
    end: Timestamp,
}

impl Window {
    pub fn new(start: Timestamp, end: Timestamp) -> Result<Self> {
        if start >= end {
            return Err(Error::InvalidTimeRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Builds a window from two `DD/Mon/YYYY:HH:MM:SS` strings.
    pub fn parse(start: &str, end: &str) -> Result<Self> {
        Self::new(Timestamp::parse(start)?, Timestamp::parse(end)?)
    }

    pub fn start(&self) -> Timestamp {
        self.start
    }

    pub fn end(&self) -> Timestamp {
        self.end
    }

    pub fn contains(&self, timestamp: Timestamp) -> bool {
        self.start < timestamp && timestamp < self.end
    }
}

/// Parsed records in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordSet {
    records: Vec<LogRecord>,
}

impl RecordSet {
    /// Parses every line in order. The first line that does not match the
    /// grammar aborts the whole batch.
    pub fn build<I, S>(lines: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let records = lines
            .into_iter()
            .enumerate()
            .map(|(idx, line)| {
                let line = line.as_ref();
                parse_line(line).ok_or_else(|| Error::GrammarMismatch {
                    line_number: idx + 1,
                    line: line.to_string(),
                })
            })
            .collect::<Result<Vec<_>>>()?;
        debug!(records = records.len(), "parsed log lines");
        Ok(Self { records })
    }

    /// Keeps the records strictly inside `window`, preserving order.
    pub fn within(&self, window: &Window) -> Self {
        let records: Vec<_> = self
            .records
            .iter()
            .filter(|r| window.contains(r.timestamp))
            .cloned()
            .collect();
        debug!(
            start = %window.start,
            end = %window.end,
            kept = records.len(),
            dropped = self.records.len() - records.len(),
            "applied time window"
        );
        Self { records }
    }

    pub fn filter_by_window(&self, start: Timestamp, end: Timestamp) -> Result<Self> {
        Ok(self.within(&Window::new(start, end)?))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LogRecord> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a RecordSet {
    type Item = &'a LogRecord;
    type IntoIter = std::slice::Iter<'a, LogRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Parses `lines` and, when given, narrows the result to `window`.
pub fn build_record_set<I, S>(lines: I, window: Option<&Window>) -> Result<RecordSet>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let records = RecordSet::build(lines)?;
    Ok(match window {
        Some(window) => records.within(window),
        None => records,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use asserting::prelude::*;

    const LINES: [&str; 3] = [
        r#"1.1.1.1 - - [17/May/2015:10:00:00 +0000] "GET /a HTTP/1.1" 200 100 "-" "-""#,
        r#"1.1.1.1 - - [17/May/2015:10:00:05 +0000] "GET /b HTTP/1.1" 200 50 "-" "-""#,
        r#"2.2.2.2 - - [17/May/2015:10:00:10 +0000] "GET /a HTTP/1.1" 200 10 "-" "-""#,
    ];

    fn ts(value: &str) -> Timestamp {
        Timestamp::parse(value).unwrap()
    }

    #[test]
    fn build_keeps_file_order() {
        let records = RecordSet::build(LINES).unwrap();
        let paths: Vec<_> = records.iter().map(|r| r.path.as_str()).collect();
        assert_that!(paths).is_equal_to(vec!["/a", "/b", "/a"]);
    }

    #[test]
    fn build_of_nothing_is_empty() {
        let records = RecordSet::build(Vec::<String>::new()).unwrap();
        assert_that!(records.is_empty()).is_true();
    }

    #[test]
    fn build_fails_fast_on_first_bad_line() {
        let lines = [LINES[0], "garbage", "more garbage", LINES[1]];
        match RecordSet::build(lines) {
            Err(Error::GrammarMismatch { line_number, line }) => {
                assert_that!(line_number).is_equal_to(2);
                assert_that!(line).is_equal_to("garbage".to_string());
            }
            other => panic!("expected grammar mismatch, got {other:?}"),
        }
    }

    #[test]
    fn window_keeps_strictly_inside_records() {
        let records = RecordSet::build(LINES).unwrap();
        let window = Window::parse("17/May/2015:10:00:02", "17/May/2015:10:00:12").unwrap();
        assert_that!(window.start()).is_equal_to(ts("17/May/2015:10:00:02"));
        assert_that!(window.end()).is_equal_to(ts("17/May/2015:10:00:12"));
        let kept = records.within(&window);
        let expected = RecordSet::build(&LINES[1..]).unwrap();
        assert_that!(kept).is_equal_to(expected);
    }

    #[test]
    fn window_bounds_are_exclusive() {
        let records = RecordSet::build(LINES).unwrap();
        let kept = records
            .filter_by_window(ts("17/May/2015:10:00:00"), ts("17/May/2015:10:00:10"))
            .unwrap();
        assert_that!(kept.len()).is_equal_to(1);
        assert_that!(kept.iter().next().unwrap().path.as_str()).is_equal_to("/b");
    }

    #[test]
    fn window_filter_is_idempotent() {
        let records = RecordSet::build(LINES).unwrap();
        let window = Window::parse("17/May/2015:10:00:02", "17/May/2015:10:00:12").unwrap();
        let once = records.within(&window);
        let twice = once.within(&window);
        assert_that!(twice).is_equal_to(once);
    }

    #[test]
    fn window_rejects_inverted_or_empty_range() {
        let a = ts("17/May/2015:10:00:00");
        let b = ts("17/May/2015:10:00:05");
        assert!(matches!(Window::new(b, a), Err(Error::InvalidTimeRange { .. })));
        assert!(matches!(Window::new(a, a), Err(Error::InvalidTimeRange { .. })));
        let records = RecordSet::build(LINES).unwrap();
        assert!(matches!(
            records.filter_by_window(b, a),
            Err(Error::InvalidTimeRange { .. })
        ));
    }

    #[test]
    fn window_parse_reports_bad_format_before_range() {
        let result = Window::parse("2015-05-17 10:00:00", "17/May/2015:10:00:05");
        assert!(matches!(result, Err(Error::InvalidTimestampFormat { .. })));
    }

    #[test]
    fn build_record_set_applies_optional_window() {
        let window = Window::parse("17/May/2015:10:00:02", "17/May/2015:10:00:12").unwrap();
        assert_that!(build_record_set(LINES, None).unwrap().len()).is_equal_to(3);
        assert_that!(build_record_set(LINES, Some(&window)).unwrap().len()).is_equal_to(2);
    }
}
