use std::{fmt, sync::Arc};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Width of a county identifier (2-digit state code + 3-digit county code).
pub const COUNTY_ID_LEN: usize = 5;

/// Width of the state prefix of a county identifier.
pub const STATE_ID_LEN: usize = 2;

/// Election year, e.g. 2020.
pub type Year = u16;

/// Canonical county identifier (state FIPS + county FIPS).
/// Keeps the leading zeros that numeric sources drop, e.g. 6001 -> "06001".
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CountyId(Arc<str>);

impl CountyId {
    /// Left-pads `raw` with zeros to five characters.
    /// Identifiers that are already five characters or longer are kept unchanged.
    pub fn new(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.len() >= COUNTY_ID_LEN { return Self(Arc::from(raw)) }
        Self(Arc::from(format!("{raw:0>width$}", width = COUNTY_ID_LEN)))
    }

    /// Identifier from a numeric FIPS code.
    pub fn from_number(code: u64) -> Self {
        Self(Arc::from(format!("{code:0width$}", width = COUNTY_ID_LEN)))
    }

    /// Identifier from separate state and county codes, as carried by boundary features.
    /// Each part is padded to its own width first, so ("6", "1") -> "06001".
    pub fn from_parts(state_fp: &str, county_fp: &str) -> Self {
        Self::new(&format!("{}{}", pad_code(state_fp, STATE_ID_LEN), pad_code(county_fp, COUNTY_ID_LEN - STATE_ID_LEN)))
    }

    pub fn as_str(&self) -> &str { &self.0 }

    /// The 2-digit state prefix (the whole id if it is shorter than that).
    pub fn state_fips(&self) -> &str {
        self.0.get(..STATE_ID_LEN).unwrap_or(&self.0)
    }
}

impl fmt::Display for CountyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CountyId {
    fn from(raw: &str) -> Self { Self::new(raw) }
}

impl From<u64> for CountyId {
    fn from(code: u64) -> Self { Self::from_number(code) }
}

/// Left-pad a trimmed FIPS code part with zeros to `width` characters.
pub(crate) fn pad_code(code: &str, width: usize) -> String {
    format!("{:0>width$}", code.trim())
}

/// Datasets carry county codes as JSON integers, integral floats (`6001.0`) or strings.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawCode {
    Number(u64),
    Float(f64),
    Text(String),
}

impl RawCode {
    fn into_number<E: serde::de::Error>(self) -> Result<Option<u64>, E> {
        match self {
            RawCode::Number(n) => Ok(Some(n)),
            RawCode::Float(f) if f.is_finite() && f >= 0.0 && f.fract() == 0.0 && f <= u64::MAX as f64 => Ok(Some(f as u64)),
            RawCode::Float(f) => Err(E::custom(format!("expected a whole number, found {f}"))),
            RawCode::Text(_) => Ok(None),
        }
    }
}

impl<'de> Deserialize<'de> for CountyId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match RawCode::deserialize(deserializer)? {
            RawCode::Text(text) => Ok(CountyId::new(&text)),
            raw => Ok(CountyId::from_number(raw.into_number::<D::Error>()?.unwrap_or_default())),
        }
    }
}

impl Serialize for CountyId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

/// Deserialize a year given either as a number or as a numeric string.
pub(crate) fn deserialize_year<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Year, D::Error> {
    match RawCode::deserialize(deserializer)? {
        RawCode::Text(text) => text.trim().parse().map_err(serde::de::Error::custom),
        raw => {
            let n = raw.into_number::<D::Error>()?.unwrap_or_default();
            Year::try_from(n).map_err(serde::de::Error::custom)
        }
    }
}

/// String form of the composite (county, year) key: `"<5-char id>_<year>"`.
pub fn normalize_key(county: &CountyId, year: Year) -> String {
    format!("{county}_{year}")
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn pads_short_ids() {
        assert_eq!(CountyId::new("6001").as_str(), "06001");
        assert_eq!(CountyId::new("1").as_str(), "00001");
        assert_eq!(CountyId::from_number(1001).as_str(), "01001");
        assert_eq!(CountyId::new("48201").as_str(), "48201");
    }

    #[test]
    fn long_ids_are_not_truncated() {
        assert_eq!(CountyId::new("123456").as_str(), "123456");
    }

    #[test]
    fn parts_concatenate() {
        let id = CountyId::from_parts("06", "001");
        assert_eq!(id, CountyId::new("6001"));
        assert_eq!(id.state_fips(), "06");
    }

    #[test]
    fn parts_are_padded_separately() {
        assert_eq!(CountyId::from_parts("6", "1").as_str(), "06001");
        assert_eq!(CountyId::from_parts("48", "21").as_str(), "48021");
    }

    #[test]
    fn integral_floats_are_accepted() {
        let id: CountyId = serde_json::from_str("6003.0").unwrap();
        assert_eq!(id.as_str(), "06003");
        assert!(serde_json::from_str::<CountyId>("6003.5").is_err());
    }

    #[test]
    fn deserializes_numbers_and_strings() {
        let a: CountyId = serde_json::from_str("6001").unwrap();
        let b: CountyId = serde_json::from_str("\"06001\"").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn key_is_deterministic() {
        let id = CountyId::new("6001");
        assert_eq!(normalize_key(&id, 2020), "06001_2020");
        assert_eq!(normalize_key(&id, 2020), normalize_key(&CountyId::from_number(6001), 2020));
    }

    #[test]
    fn keys_do_not_collide() {
        let mut seen = HashSet::new();
        for code in [1001u64, 1003, 6001, 10001, 48201, 56045] {
            for year in [2000, 2004, 2008, 2012, 2016, 2020] {
                assert!(seen.insert(normalize_key(&CountyId::from_number(code), year)));
            }
        }
        assert_eq!(seen.len(), 36);
    }
}
