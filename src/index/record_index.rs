use std::fmt;

use ahash::AHashMap;

use crate::types::{normalize_key, CountyId, StatRecord, Year};

/// Composite lookup key: canonical county id + election year.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecordKey {
    pub county: CountyId,
    pub year: Year,
}

impl RecordKey {
    pub fn new(county: CountyId, year: Year) -> Self { Self { county, year } }
}

impl fmt::Display for RecordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&normalize_key(&self.county, self.year))
    }
}

/// Read-only (county, year) -> record lookup, built once after the datasets load.
#[derive(Debug, Default, Clone)]
pub struct RecordIndex {
    records: AHashMap<RecordKey, StatRecord>,
}

impl RecordIndex {
    /// Index `records` in one pass. A later record for the same (county, year) replaces an earlier one.
    pub fn build<'a>(records: impl IntoIterator<Item = &'a StatRecord>) -> Self {
        let records = records.into_iter();
        let mut index = AHashMap::with_capacity(records.size_hint().0);
        for record in records {
            index.insert(RecordKey::new(record.county.clone(), record.year), record.clone());
        }
        Self { records: index }
    }

    /// The record for (`county`, `year`), if one was loaded.
    pub fn lookup(&self, county: &CountyId, year: Year) -> Option<&StatRecord> {
        self.records.get(&RecordKey::new(county.clone(), year))
    }

    pub fn len(&self) -> usize { self.records.len() }

    pub fn is_empty(&self) -> bool { self.records.is_empty() }

    /// Distinct years present in the index, ascending.
    pub fn years(&self) -> Vec<Year> {
        let mut years: Vec<Year> = self.records.keys().map(|key| key.year).collect();
        years.sort_unstable();
        years.dedup();
        years
    }
}
