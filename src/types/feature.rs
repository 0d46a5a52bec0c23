use std::sync::Arc;

use geo::MultiPolygon;

use super::county_id::{pad_code, CountyId, COUNTY_ID_LEN, STATE_ID_LEN};

/// Display name used whenever a county or state name cannot be resolved.
pub const UNKNOWN_NAME: &str = "Unknown";

/// One county polygon from the boundary dataset.
#[derive(Debug, Clone)]
pub struct CountyFeature {
    /// Join key: `state_fp + county_fp`.
    pub id: CountyId,
    pub state_fp: Arc<str>,
    pub county_fp: Arc<str>,
    pub name: Option<Arc<str>>,
    pub shape: MultiPolygon<f64>,
}

impl CountyFeature {
    pub fn new(state_fp: &str, county_fp: &str, name: Option<&str>, shape: MultiPolygon<f64>) -> Self {
        Self {
            id: CountyId::from_parts(state_fp, county_fp),
            state_fp: Arc::from(pad_code(state_fp, STATE_ID_LEN)),
            county_fp: Arc::from(pad_code(county_fp, COUNTY_ID_LEN - STATE_ID_LEN)),
            name: name.map(Arc::from),
            shape,
        }
    }

    /// County name, or "Unknown" when the feature carries none.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(UNKNOWN_NAME)
    }
}

/// Find the boundary feature whose concatenated FIPS codes equal `id`.
pub fn find_feature<'a>(features: &'a [CountyFeature], id: &CountyId) -> Option<&'a CountyFeature> {
    features.iter().find(|feature| &feature.id == id)
}
