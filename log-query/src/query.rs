use std::cmp::Reverse;

use serde::Serialize;

use crate::{
    analytics::{AddressEndpoint, EndpointHitIndex, FrequencyIndex, Hit},
    invariants::{Address, Limit, Timestamp},
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddressFrequency {
    #[serde(rename = "ip")]
    pub address: Address,
    pub frequency: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EndpointFrequency {
    #[serde(flatten)]
    pub key: AddressEndpoint,
    pub frequency: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EndpointRecency {
    #[serde(flatten)]
    pub key: AddressEndpoint,
    pub time: Timestamp,
}

/// Every address with its hit count, in first-seen order. No ranking.
pub fn unique_addresses_with_frequency(index: &FrequencyIndex) -> Vec<AddressFrequency> {
    index
        .iter()
        .map(|(address, frequency)| AddressFrequency {
            address: address.clone(),
            frequency,
        })
        .collect()
}

/// Busiest (address, endpoint) pairs. Equal counts keep index order.
pub fn top_by_frequency(
    index: &EndpointHitIndex,
    address: Option<&Address>,
    limit: Limit,
) -> Vec<EndpointFrequency> {
    let mut rows: Vec<_> = index
        .iter()
        .filter(|(key, _)| address.is_none_or(|a| key.address == *a))
        .map(|(key, frequency)| EndpointFrequency {
            key: key.clone(),
            frequency,
        })
        .collect();
    rows.sort_by_key(|row| Reverse(row.frequency));
    rows.truncate(limit.get());
    rows
}

/// Latest hits first. Equal timestamps keep log order.
pub fn most_recent(hits: &[Hit], address: Option<&Address>, limit: Limit) -> Vec<EndpointRecency> {
    let mut rows: Vec<_> = hits
        .iter()
        .filter(|hit| address.is_none_or(|a| hit.key.address == *a))
        .map(|hit| EndpointRecency {
            key: hit.key.clone(),
            time: hit.timestamp,
        })
        .collect();
    rows.sort_by_key(|row| Reverse(row.time));
    rows.truncate(limit.get());
    rows
}
