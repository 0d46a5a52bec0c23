use crate::{
    common::state_name_or_unknown,
    detail::format_points,
    index::RecordIndex,
    metric::single_delta,
    types::{CountyFeature, Year},
};

/// Hover text for a county polygon:
/// "Alameda County, California<br>Turnout Change (2016 to 2020): 2.23 pp"
pub fn tooltip_text(index: &RecordIndex, feature: &CountyFeature, current: Year, previous: Year) -> String {
    let state_name = state_name_or_unknown(&feature.state_fp);
    let change = format_points(single_delta(index, &feature.id, current, previous));

    format!(
        "{} County, {}<br>Turnout Change ({} to {}): {}",
        feature.display_name(), state_name, previous, current, change,
    )
}
