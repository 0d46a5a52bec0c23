//! Discrete color scale for turnout change.

use super::color::Rgb;

/// Color bucket for a turnout change, from strongest increase to strongest decrease.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChangeBucket {
    NoData,
    StrongIncrease,
    ModerateIncrease,
    SlightIncrease,
    NearZero,
    SlightDecrease,
    ModerateDecrease,
    StrongDecrease,
}

impl ChangeBucket {
    /// Buckets in legend order.
    pub const ALL: [ChangeBucket; 8] = [
        ChangeBucket::StrongIncrease,
        ChangeBucket::ModerateIncrease,
        ChangeBucket::SlightIncrease,
        ChangeBucket::NearZero,
        ChangeBucket::SlightDecrease,
        ChangeBucket::ModerateDecrease,
        ChangeBucket::StrongDecrease,
        ChangeBucket::NoData,
    ];

    pub fn color(&self) -> Rgb {
        match self {
            ChangeBucket::NoData           => Rgb::hex(0xc0d8c1),
            ChangeBucket::StrongIncrease   => Rgb::hex(0x00441b),
            ChangeBucket::ModerateIncrease => Rgb::hex(0x238b45),
            ChangeBucket::SlightIncrease   => Rgb::hex(0xa1d99b),
            ChangeBucket::NearZero         => Rgb::hex(0xf7f7f7),
            ChangeBucket::SlightDecrease   => Rgb::hex(0xfcae91),
            ChangeBucket::ModerateDecrease => Rgb::hex(0xde2d26),
            ChangeBucket::StrongDecrease   => Rgb::hex(0xa50f15),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ChangeBucket::NoData           => "No data",
            ChangeBucket::StrongIncrease   => "Strong increase (+5 pp or more)",
            ChangeBucket::ModerateIncrease => "Moderate increase (+2 to +5 pp)",
            ChangeBucket::SlightIncrease   => "Slight increase (+0.5 to +2 pp)",
            ChangeBucket::NearZero         => "Near zero change",
            ChangeBucket::SlightDecrease   => "Slight decrease (-0.5 to -2 pp)",
            ChangeBucket::ModerateDecrease => "Moderate decrease (-2 to -5 pp)",
            ChangeBucket::StrongDecrease   => "Strong decrease (-5 pp or more)",
        }
    }
}

/// Bucket a fractional turnout change (0.02 = two percentage points).
///
/// Thresholds are checked from the top down and the first match wins, so the
/// increase edges are inclusive while the decrease edges are exclusive, except
/// the last bucket which takes everything at or below -5 pp.
pub fn classify(change: Option<f64>) -> ChangeBucket {
    let Some(change) = change.filter(|c| c.is_finite()) else { return ChangeBucket::NoData };

    let points = change * 100.0;

    if points >= 5.0 { return ChangeBucket::StrongIncrease }
    if points >= 2.0 { return ChangeBucket::ModerateIncrease }
    if points >= 0.5 { return ChangeBucket::SlightIncrease }
    if points > -0.5 { return ChangeBucket::NearZero }
    if points > -2.0 { return ChangeBucket::SlightDecrease }
    if points > -5.0 { return ChangeBucket::ModerateDecrease }
    ChangeBucket::StrongDecrease
}

/// Fill color for a turnout change.
pub fn change_color(change: Option<f64>) -> Rgb {
    classify(change).color()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outer_edges() {
        assert_eq!(classify(Some(0.05)), ChangeBucket::StrongIncrease);
        assert_eq!(classify(Some(-0.05)), ChangeBucket::StrongDecrease);
        assert_eq!(classify(Some(0.2)), ChangeBucket::StrongIncrease);
        assert_eq!(classify(Some(-0.2)), ChangeBucket::StrongDecrease);
    }

    #[test]
    fn near_zero_band() {
        assert_eq!(classify(Some(0.0)), ChangeBucket::NearZero);
        assert_eq!(classify(Some(0.004)), ChangeBucket::NearZero);
        assert_eq!(classify(Some(-0.004)), ChangeBucket::NearZero);
    }

    #[test]
    fn increase_edges_are_inclusive() {
        assert_eq!(classify(Some(0.005)), ChangeBucket::SlightIncrease);
        assert_eq!(classify(Some(0.02)), ChangeBucket::ModerateIncrease);
        assert_eq!(classify(Some(0.03)), ChangeBucket::ModerateIncrease);
    }

    #[test]
    fn decrease_edges_are_exclusive() {
        assert_eq!(classify(Some(-0.005)), ChangeBucket::SlightDecrease);
        assert_eq!(classify(Some(-0.02)), ChangeBucket::ModerateDecrease);
        assert_eq!(classify(Some(-0.03)), ChangeBucket::ModerateDecrease);
    }

    #[test]
    fn absent_and_non_finite_are_no_data() {
        assert_eq!(classify(None), ChangeBucket::NoData);
        assert_eq!(classify(Some(f64::NAN)), ChangeBucket::NoData);
        assert_eq!(classify(Some(f64::INFINITY)), ChangeBucket::NoData);
        assert_eq!(change_color(None).to_string(), "#c0d8c1");
    }

    #[test]
    fn colors_match_scale() {
        assert_eq!(change_color(Some(0.06)).to_string(), "#00441b");
        assert_eq!(change_color(Some(-0.06)).to_string(), "#a50f15");
        assert_eq!(change_color(Some(0.0)).to_string(), "#f7f7f7");
    }

    #[test]
    fn legend_lists_every_bucket_once() {
        let mut colors: Vec<String> = ChangeBucket::ALL.iter().map(|b| b.color().to_string()).collect();
        colors.sort();
        colors.dedup();
        assert_eq!(colors.len(), ChangeBucket::ALL.len());
    }
}
