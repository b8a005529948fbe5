//! Query Apache/Nginx combined access logs: hits per client address, the
//! busiest (address, endpoint) pairs, and the most recent ones, optionally
//! restricted to a time window.

pub mod analytics;
pub mod cli;
pub mod error;
pub mod input;
pub mod invariants;
pub mod models;
pub mod parser;
pub mod query;
pub mod records;
pub mod render;

pub use analytics::{
    EndpointHitIndex, FrequencyIndex, Indexes, Tally, TimeOrderedHits, build_indexes,
};
pub use error::{Error, Result};
pub use invariants::{Address, Endpoint, Limit, Timestamp};
pub use models::LogRecord;
pub use parser::parse_line;
pub use query::{most_recent, top_by_frequency, unique_addresses_with_frequency};
pub use records::{RecordSet, Window, build_record_set};
