use crate::{index::RecordIndex, types::{CountyId, Year}};

/// Year-over-year change of the three turnout ratios, on the fractional scale
/// (0.02 means two percentage points).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TurnoutDelta {
    pub voter_turnout: f64,
    pub reg_voter_turnout: f64,
    pub reg_voters_pct: f64,
}

/// Change of every turnout metric from `previous` to `current` (`current - previous`).
/// Absent unless both years have a record for `county`.
pub fn delta(index: &RecordIndex, county: &CountyId, current: Year, previous: Year) -> Option<TurnoutDelta> {
    let now = index.lookup(county, current)?;
    let before = index.lookup(county, previous)?;

    Some(TurnoutDelta {
        voter_turnout: now.voter_turnout - before.voter_turnout,
        reg_voter_turnout: now.reg_voter_turnout - before.reg_voter_turnout,
        reg_voters_pct: now.reg_voters_pct - before.reg_voters_pct,
    })
}

/// Voter-turnout change only; this is what every polygon's fill is computed from.
pub fn single_delta(index: &RecordIndex, county: &CountyId, current: Year, previous: Year) -> Option<f64> {
    let now = index.lookup(county, current)?;
    let before = index.lookup(county, previous)?;
    Some(now.voter_turnout - before.voter_turnout)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::StatRecord;

    fn index() -> RecordIndex {
        RecordIndex::build(&[
            StatRecord::new("06001", 2016, 0.55, 0.75, 0.70),
            StatRecord::new("06001", 2020, 0.61, 0.80, 0.74),
            StatRecord::new("06003", 2020, 0.40, 0.50, 0.60),
        ])
    }

    #[test]
    fn current_minus_previous() {
        let change = delta(&index(), &CountyId::new("06001"), 2020, 2016).unwrap();
        assert!((change.voter_turnout - 0.06).abs() < 1e-12);
        assert!((change.reg_voter_turnout - 0.05).abs() < 1e-12);
        assert!((change.reg_voters_pct - 0.04).abs() < 1e-12);
    }

    #[test]
    fn antisymmetric() {
        let index = index();
        let id = CountyId::new("06001");
        let forward = delta(&index, &id, 2020, 2016).unwrap();
        let backward = delta(&index, &id, 2016, 2020).unwrap();
        assert_eq!(forward.voter_turnout, -backward.voter_turnout);
        assert_eq!(forward.reg_voter_turnout, -backward.reg_voter_turnout);
        assert_eq!(forward.reg_voters_pct, -backward.reg_voters_pct);
    }

    #[test]
    fn absent_when_either_year_missing() {
        let index = index();
        let id = CountyId::new("06003");
        assert_eq!(delta(&index, &id, 2020, 2016), None);
        assert_eq!(delta(&index, &id, 2016, 2020), None);
        assert_eq!(single_delta(&index, &id, 2020, 2016), None);
        assert_eq!(single_delta(&index, &CountyId::new("48201"), 2020, 2016), None);
    }

    #[test]
    fn single_matches_full_delta() {
        let index = index();
        let id = CountyId::new("06001");
        assert_eq!(
            single_delta(&index, &id, 2020, 2016),
            delta(&index, &id, 2020, 2016).map(|d| d.voter_turnout),
        );
    }

    #[test]
    fn same_year_is_zero() {
        assert_eq!(single_delta(&index(), &CountyId::new("06001"), 2020, 2020), Some(0.0));
    }
}
