use crate::invariants::{Address, Endpoint, Timestamp};

/// One access-log line that matched the combined grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub address: Address,
    pub timestamp: Timestamp,
    pub method: String,
    pub path: Endpoint,
    pub status: u16,
    /// `None` when the server logged `-`.
    pub bytes_sent: Option<u64>,
}
