use std::thread;

use anyhow::{anyhow, Context, Result};
use log::{debug, info};

use crate::{
    io::{geojson::read_counties_from_bytes, records::read_records_from_bytes},
    types::{CountyFeature, StatRecord},
};

use super::source::DataSource;

/// Context attached to every loader failure.
pub const LOAD_FAILED: &str = "data load failed";

/// The two datasets a session runs on, parsed and ready to index.
#[derive(Debug, Clone, Default)]
pub struct Datasets {
    pub records: Vec<StatRecord>,
    pub counties: Vec<CountyFeature>,
}

impl Datasets {
    /// Parse already-fetched statistics JSON and county GeoJSON.
    pub fn parse(stats: &[u8], counties: &[u8]) -> Result<Self> {
        let records = read_records_from_bytes(stats)?;
        let counties = read_counties_from_bytes(counties)?;
        debug!("[load] parsed {} records, {} county features", records.len(), counties.len());
        Ok(Self { records, counties })
    }
}

/// Fetch both resources concurrently and wait for both.
/// Fails if either fetch fails; the other result is dropped.
pub fn fetch_both(first: &dyn DataSource, second: &dyn DataSource) -> Result<(Vec<u8>, Vec<u8>)> {
    let (first_result, second_result) = thread::scope(|scope| {
        let handle = scope.spawn(|| first.fetch());
        let second_result = second.fetch();
        (handle.join(), second_result)
    });

    let first_bytes = first_result
        .map_err(|_| anyhow!("fetch of {} panicked", first.describe()))?
        .with_context(|| format!("Failed to fetch {}", first.describe()))?;
    let second_bytes = second_result
        .with_context(|| format!("Failed to fetch {}", second.describe()))?;

    Ok((first_bytes, second_bytes))
}

/// Fetch and parse the statistics and county datasets.
pub fn load_datasets(stats: &dyn DataSource, counties: &dyn DataSource) -> Result<Datasets> {
    info!("[load] fetching {} and {}", stats.describe(), counties.describe());
    let (stats_bytes, counties_bytes) = fetch_both(stats, counties).context(LOAD_FAILED)?;
    Datasets::parse(&stats_bytes, &counties_bytes).context(LOAD_FAILED)
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::load::StaticSource;

    const STATS: &str = r#"[{"STCOFIPS10": 6001, "YEAR": 2020, "VOTER_TURNOUT_PCT": 0.61}]"#;
    const COUNTIES: &str = r#"{"type": "FeatureCollection", "features": [
        {"type": "Feature", "properties": {"STATEFP": "06", "COUNTYFP": "001", "NAME": "Alameda"},
         "geometry": {"type": "Polygon", "coordinates": [[[0, 0], [1, 0], [1, 1], [0, 0]]]}}
    ]}"#;

    /// Counts how often it was fetched.
    struct CountingSource {
        inner: StaticSource,
        fetches: AtomicUsize,
    }

    impl DataSource for CountingSource {
        fn describe(&self) -> String { self.inner.describe() }

        fn fetch(&self) -> Result<Vec<u8>> {
            self.fetches.fetch_add(1, Ordering::SeqCst);
            self.inner.fetch()
        }
    }

    #[test]
    fn loads_both_datasets() {
        let data = load_datasets(&StaticSource::new("stats", STATS), &StaticSource::new("counties", COUNTIES)).unwrap();
        assert_eq!(data.records.len(), 1);
        assert_eq!(data.counties.len(), 1);
        assert_eq!(data.records[0].county, data.counties[0].id);
    }

    #[test]
    fn either_failure_fails_the_load() {
        let ok_stats = StaticSource::new("stats", STATS);
        let ok_counties = StaticSource::new("counties", COUNTIES);
        let bad = StaticSource::failing("bad", "503 Service Unavailable");

        let err = load_datasets(&bad, &ok_counties).unwrap_err();
        assert_eq!(err.to_string(), LOAD_FAILED);
        assert!(format!("{err:#}").contains("503 Service Unavailable"));

        assert!(load_datasets(&ok_stats, &bad).is_err());
    }

    #[test]
    fn both_resources_are_fetched_once() {
        let stats = CountingSource { inner: StaticSource::new("stats", STATS), fetches: AtomicUsize::new(0) };
        let counties = CountingSource { inner: StaticSource::failing("counties", "boom"), fetches: AtomicUsize::new(0) };

        assert!(load_datasets(&stats, &counties).is_err());
        assert_eq!(stats.fetches.load(Ordering::SeqCst), 1);
        assert_eq!(counties.fetches.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn malformed_payload_fails_the_load() {
        let err = load_datasets(&StaticSource::new("stats", "{"), &StaticSource::new("counties", COUNTIES)).unwrap_err();
        assert_eq!(err.to_string(), LOAD_FAILED);
    }
}
