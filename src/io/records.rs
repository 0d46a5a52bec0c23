use anyhow::{anyhow, Context, Result};
use log::warn;
use serde_json::Value;

use crate::types::StatRecord;

/// Parse the statistics dataset: a JSON array of per-(county, year) rows.
/// Rows that do not decode are skipped with a warning.
pub(crate) fn read_records_from_bytes(bytes: &[u8]) -> Result<Vec<StatRecord>> {
    let value: Value = serde_json::from_slice(bytes).context("Failed to parse turnout statistics JSON")?;
    let Value::Array(rows) = value else {
        return Err(anyhow!("Turnout statistics JSON is not an array of rows"));
    };

    let mut records = Vec::with_capacity(rows.len());
    for (idx, row) in rows.into_iter().enumerate() {
        match serde_json::from_value::<StatRecord>(row) {
            Ok(record) => records.push(record),
            Err(e) => warn!("[io::records] skipping row {idx}: {e}"),
        }
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_array_of_rows() {
        let json = br#"[
            {"STCOFIPS10": 6001, "YEAR": 2016, "VOTER_TURNOUT_PCT": 0.59},
            {"STCOFIPS10": "06001", "YEAR": 2020, "VOTER_TURNOUT_PCT": 0.61}
        ]"#;
        let records = read_records_from_bytes(json).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].county, records[1].county);
    }

    #[test]
    fn float_row_loads_next_to_integer_row() {
        let json = br#"[
            {"STCOFIPS10": 6001, "YEAR": 2020, "VOTER_TURNOUT_PCT": 0.61},
            {"STCOFIPS10": 6003.0, "YEAR": 2016.0, "VOTER_TURNOUT_PCT": 0.55}
        ]"#;
        let records = read_records_from_bytes(json).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].county.as_str(), "06003");
        assert_eq!(records[1].year, 2016);
    }

    #[test]
    fn bad_rows_are_skipped() {
        let json = br#"[
            {"STCOFIPS10": 6001, "YEAR": 2020, "VOTER_TURNOUT_PCT": 0.61},
            {"STCOFIPS10": 6003.5, "YEAR": 2016},
            {"STCOFIPS10": 6005},
            "not a row"
        ]"#;
        let records = read_records_from_bytes(json).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].county.as_str(), "06001");
    }

    #[test]
    fn rejects_non_array() {
        assert!(read_records_from_bytes(br#"{"type": "FeatureCollection"}"#).is_err());
        assert!(read_records_from_bytes(b"not json").is_err());
    }
}
