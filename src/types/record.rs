use serde::{Deserialize, Deserializer, Serialize};

use super::county_id::{deserialize_year, CountyId, Year};

/// One row of precomputed turnout statistics for a (county, year) pair.
/// Ratio fields are fractions in [0, 1]; a null or missing value is read as NaN.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatRecord {
    #[serde(rename = "STCOFIPS10")]
    pub county: CountyId,
    #[serde(rename = "YEAR", deserialize_with = "deserialize_year")]
    pub year: Year,
    /// Votes cast as a fraction of the voting-age population.
    #[serde(rename = "VOTER_TURNOUT_PCT", default = "missing", deserialize_with = "deserialize_ratio")]
    pub voter_turnout: f64,
    /// Votes cast as a fraction of registered voters.
    #[serde(rename = "REG_VOTER_TURNOUT_PCT", default = "missing", deserialize_with = "deserialize_ratio")]
    pub reg_voter_turnout: f64,
    /// Registered voters as a fraction of the voting-age population.
    #[serde(rename = "REG_VOTERS_PCT", default = "missing", deserialize_with = "deserialize_ratio")]
    pub reg_voters_pct: f64,
    #[serde(rename = "PARTISAN_INDEX_DEM", default = "missing", deserialize_with = "deserialize_ratio")]
    pub partisan_index_dem: f64,
    #[serde(rename = "PARTISAN_INDEX_REP", default = "missing", deserialize_with = "deserialize_ratio")]
    pub partisan_index_rep: f64,
}

impl StatRecord {
    /// Record with the three turnout ratios set and no partisan index values.
    pub fn new(county: impl Into<CountyId>, year: Year, voter_turnout: f64, reg_voter_turnout: f64, reg_voters_pct: f64) -> Self {
        Self {
            county: county.into(),
            year,
            voter_turnout,
            reg_voter_turnout,
            reg_voters_pct,
            partisan_index_dem: f64::NAN,
            partisan_index_rep: f64::NAN,
        }
    }

    pub fn with_partisan_index(mut self, dem: f64, rep: f64) -> Self {
        self.partisan_index_dem = dem;
        self.partisan_index_rep = rep;
        self
    }
}

fn missing() -> f64 { f64::NAN }

fn deserialize_ratio<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
}
