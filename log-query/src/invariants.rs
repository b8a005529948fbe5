use std::{num::NonZero, str::FromStr, sync::LazyLock};

use chrono::NaiveDateTime;
use derive_more::{AsRef, Debug, Display};
use regex::Regex;
use serde::{Serialize, Serializer};

use crate::error::{Error, Result};

/// `strftime` layout shared by log timestamps and window bounds.
pub const TIMESTAMP_FORMAT: &str = "%d/%b/%Y:%H:%M:%S";

static DEFAULT_LIMIT: LazyLock<NonZero<usize>> =
    LazyLock::new(|| NonZero::new(10).expect("nonzero const"));

// chrono accepts unpadded fields and any month casing, so the exact shape is checked first.
static TIMESTAMP_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d{2}/(?:Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)/\d{4}:\d{2}:\d{2}:\d{2}$")
        .expect("valid timestamp pattern")
});

#[derive(Debug, Display, AsRef, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Address(String);

impl Address {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Request target exactly as logged, query string included.
#[derive(Debug, Display, AsRef, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Endpoint(String);

impl Endpoint {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Wall-clock instant with one second precision. The zone offset of the
/// source text is dropped, so two timestamps compare by their literal fields.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[display("{}", _0.format(TIMESTAMP_FORMAT))]
pub struct Timestamp(NaiveDateTime);

impl Timestamp {
    /// Parses `DD/Mon/YYYY:HH:MM:SS`, e.g. `17/May/2015:09:05:00`.
    pub fn parse(value: &str) -> Result<Self> {
        let invalid = || Error::InvalidTimestampFormat {
            value: value.to_string(),
        };
        if !TIMESTAMP_SHAPE.is_match(value) {
            return Err(invalid());
        }
        NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT)
            .map(Self)
            .map_err(|_| invalid())
    }
}

impl From<NaiveDateTime> for Timestamp {
    fn from(value: NaiveDateTime) -> Self {
        Self(value)
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Upper bound on the length of a ranked result. Always at least one.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub struct Limit(NonZero<usize>);

impl Limit {
    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl Default for Limit {
    fn default() -> Self {
        Self(*DEFAULT_LIMIT)
    }
}

impl TryFrom<i64> for Limit {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self> {
        usize::try_from(value)
            .ok()
            .and_then(NonZero::new)
            .map(Self)
            .ok_or_else(|| Error::InvalidLimit {
                value: value.to_string(),
            })
    }
}

impl FromStr for Limit {
    type Err = Error;

    /// Digits only: no sign, no surrounding whitespace.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidLimit {
            value: s.to_string(),
        };
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        s.parse::<NonZero<usize>>().map(Self).map_err(|_| invalid())
    }
}
