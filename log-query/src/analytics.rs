use std::{collections::HashMap, hash::Hash};

use serde::Serialize;
use tracing::debug;

use crate::{
    invariants::{Address, Endpoint, Timestamp},
    records::RecordSet,
};

/// Counter that remembers the order in which keys were first seen.
#[derive(Debug, Clone)]
pub struct Tally<K> {
    entries: Vec<(K, usize)>,
    positions: HashMap<K, usize>,
}

// `positions` is derived from `entries`.
impl<K: PartialEq> PartialEq for Tally<K> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<K: Eq> Eq for Tally<K> {}

impl<K> Default for Tally<K> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            positions: HashMap::new(),
        }
    }
}

impl<K: Clone + Eq + Hash> Tally<K> {
    pub fn record(&mut self, key: K) {
        match self.positions.get(&key) {
            Some(&idx) => self.entries[idx].1 += 1,
            None => {
                self.positions.insert(key.clone(), self.entries.len());
                self.entries.push((key, 1));
            }
        }
    }

    /// Count for `key`, zero when it was never recorded.
    pub fn get(&self, key: &K) -> usize {
        self.positions
            .get(key)
            .map_or(0, |&idx| self.entries[idx].1)
    }

    /// Entries in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, usize)> {
        self.entries.iter().map(|(k, v)| (k, *v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, v)| v).sum()
    }
}

impl<K: Clone + Eq + Hash> FromIterator<K> for Tally<K> {
    fn from_iter<T: IntoIterator<Item = K>>(iter: T) -> Self {
        let mut tally = Self::default();
        for key in iter {
            tally.record(key);
        }
        tally
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct AddressEndpoint {
    #[serde(rename = "ip")]
    pub address: Address,
    #[serde(rename = "url")]
    pub endpoint: Endpoint,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hit {
    pub key: AddressEndpoint,
    pub timestamp: Timestamp,
}

pub type FrequencyIndex = Tally<Address>;
pub type EndpointHitIndex = Tally<AddressEndpoint>;
pub type TimeOrderedHits = Vec<Hit>;

/// Everything the queries read, derived once from a [`RecordSet`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Indexes {
    pub frequency: FrequencyIndex,
    pub endpoint_hits: EndpointHitIndex,
    pub hits: TimeOrderedHits,
}

pub fn build_indexes(records: &RecordSet) -> Indexes {
    let mut indexes = Indexes {
        hits: Vec::with_capacity(records.len()),
        ..Indexes::default()
    };
    for record in records {
        let key = AddressEndpoint {
            address: record.address.clone(),
            endpoint: record.path.clone(),
        };
        indexes.frequency.record(record.address.clone());
        indexes.endpoint_hits.record(key.clone());
        indexes.hits.push(Hit {
            key,
            timestamp: record.timestamp,
        });
    }
    debug!(
        addresses = indexes.frequency.len(),
        endpoints = indexes.endpoint_hits.len(),
        hits = indexes.hits.len(),
        counted = indexes.frequency.total(),
        "built indexes"
    );
    indexes
}
