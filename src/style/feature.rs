use crate::{
    index::RecordIndex,
    metric::single_delta,
    types::{CountyId, Year},
};

use super::{classify::change_color, color::Rgb};

/// Polygon styling handed to the map renderer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FeatureStyle {
    pub fill_color: Rgb,
    /// Stroke width.
    pub weight: f64,
    /// Stroke opacity.
    pub opacity: f64,
    /// Stroke color.
    pub color: Rgb,
    pub fill_opacity: f64,
}

impl FeatureStyle {
    const SELECTED_WEIGHT: f64 = 3.0;
    const DEFAULT_WEIGHT: f64 = 0.5;
    const FILL_OPACITY: f64 = 0.7;

    /// Style for a county with the given turnout change; the selected county gets a thick yellow outline.
    pub fn for_change(change: Option<f64>, selected: bool) -> Self {
        Self {
            fill_color: change_color(change),
            weight: if selected { Self::SELECTED_WEIGHT } else { Self::DEFAULT_WEIGHT },
            opacity: 1.0,
            color: if selected { Rgb::YELLOW } else { Rgb::WHITE },
            fill_opacity: Self::FILL_OPACITY,
        }
    }
}

/// Style for `county` given the selected years and highlighted county.
pub fn county_style(index: &RecordIndex, county: &CountyId, current: Year, previous: Year, selected: Option<&CountyId>) -> FeatureStyle {
    let change = single_delta(index, county, current, previous);
    FeatureStyle::for_change(change, selected == Some(county))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::StatRecord;

    #[test]
    fn selected_county_is_highlighted() {
        let index = RecordIndex::build(&[
            StatRecord::new("06001", 2016, 0.50, 0.70, 0.70),
            StatRecord::new("06001", 2020, 0.56, 0.75, 0.72),
        ]);
        let id = CountyId::new("06001");

        let plain = county_style(&index, &id, 2020, 2016, None);
        assert_eq!(plain.weight, 0.5);
        assert_eq!(plain.color, Rgb::WHITE);
        assert_eq!(plain.fill_color.to_string(), "#00441b");
        assert_eq!(plain.fill_opacity, 0.7);
        assert_eq!(plain.opacity, 1.0);

        let selected = county_style(&index, &id, 2020, 2016, Some(&id));
        assert_eq!(selected.weight, 3.0);
        assert_eq!(selected.color, Rgb::YELLOW);
        assert_eq!(selected.fill_color, plain.fill_color);
    }

    #[test]
    fn unmatched_county_gets_no_data_fill() {
        let index = RecordIndex::default();
        let style = county_style(&index, &CountyId::new("01001"), 2020, 2016, Some(&CountyId::new("06001")));
        assert_eq!(style.fill_color.to_string(), "#c0d8c1");
        assert_eq!(style.weight, 0.5);
    }
}
