mod county_id;
mod feature;
mod record;

pub use county_id::{normalize_key, CountyId, Year, COUNTY_ID_LEN, STATE_ID_LEN};
pub use feature::{find_feature, CountyFeature, UNKNOWN_NAME};
pub use record::StatRecord;
