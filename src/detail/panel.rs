use std::fmt;

use crate::{
    common::state_name_or_unknown,
    index::RecordIndex,
    metric::delta,
    types::{find_feature, CountyFeature, CountyId, StatRecord, Year, UNKNOWN_NAME},
};

use super::format::{escape_html, format_percent, format_points};

/// The three turnout ratios of one year, formatted for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearMetrics {
    pub year: Year,
    pub reg_voters_pct: String,
    pub voter_turnout: String,
    pub reg_voter_turnout: String,
}

impl YearMetrics {
    fn new(year: Year, record: Option<&StatRecord>) -> Self {
        Self {
            year,
            reg_voters_pct: format_percent(record.map(|r| r.reg_voters_pct)),
            voter_turnout: format_percent(record.map(|r| r.voter_turnout)),
            reg_voter_turnout: format_percent(record.map(|r| r.reg_voter_turnout)),
        }
    }
}

/// Changes of the three turnout ratios, in percentage points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeMetrics {
    pub reg_voters_pct: String,
    pub voter_turnout: String,
    pub reg_voter_turnout: String,
}

/// Side-panel comparison of one county between two years.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountyDetail {
    pub county: CountyId,
    pub county_name: String,
    pub state_name: String,
    pub previous: YearMetrics,
    pub current: YearMetrics,
    pub change: ChangeMetrics,
    /// Partisan index values of the current year.
    pub partisan_index_dem: String,
    pub partisan_index_rep: String,
}

impl CountyDetail {
    /// Gather and format everything shown for `county`. Missing records yield "N/A" fields.
    pub fn build(index: &RecordIndex, features: &[CountyFeature], county: &CountyId, current: Year, previous: Year) -> Self {
        let current_record = index.lookup(county, current);
        let previous_record = index.lookup(county, previous);
        let changes = delta(index, county, current, previous);

        let county_name = find_feature(features, county)
            .map(|feature| feature.display_name())
            .unwrap_or(UNKNOWN_NAME);

        Self {
            county: county.clone(),
            county_name: county_name.to_string(),
            state_name: state_name_or_unknown(county.state_fips()).to_string(),
            previous: YearMetrics::new(previous, previous_record),
            current: YearMetrics::new(current, current_record),
            change: ChangeMetrics {
                reg_voters_pct: format_points(changes.map(|c| c.reg_voters_pct)),
                voter_turnout: format_points(changes.map(|c| c.voter_turnout)),
                reg_voter_turnout: format_points(changes.map(|c| c.reg_voter_turnout)),
            },
            partisan_index_dem: format_percent(current_record.map(|r| r.partisan_index_dem)),
            partisan_index_rep: format_percent(current_record.map(|r| r.partisan_index_rep)),
        }
    }

    /// "Alameda County, California"
    pub fn title(&self) -> String {
        format!("{} County, {}", self.county_name, self.state_name)
    }

    pub fn to_html(&self) -> String {
        let year_block = |m: &YearMetrics| format!(
            "<p><strong>{}:</strong>\n\
             &nbsp;&nbsp;• Percent of Voting Age Registered: {}<br>\n\
             &nbsp;&nbsp;• Voter Turnout (VAP): {}<br>\n\
             &nbsp;&nbsp;• Registered Voter Turnout: {}</p>\n",
            m.year, m.reg_voters_pct, m.voter_turnout, m.reg_voter_turnout,
        );

        let mut html = String::new();
        html.push_str(&format!("<h2>{}</h2>\n", escape_html(&self.title())));
        html.push_str("<h3>Turnout Comparison</h3>\n<br>\n");
        html.push_str(&year_block(&self.previous));
        html.push_str(&year_block(&self.current));
        html.push_str(&format!(
            "<p><strong>Change ({} to {}):</strong>\n\
             &nbsp;&nbsp;• Percent Registered: {}<br>\n\
             &nbsp;&nbsp;• Voter Turnout (VAP): {}<br>\n\
             &nbsp;&nbsp;• Registered Voter Turnout: {}</p>\n<br>\n",
            self.previous.year, self.current.year,
            self.change.reg_voters_pct, self.change.voter_turnout, self.change.reg_voter_turnout,
        ));
        html.push_str(&format!("<h3>Partisan Index ({})</h3>\n", self.current.year));
        html.push_str(&format!("<p><strong>Partisan Index (Dem):</strong> {}</p>\n", self.partisan_index_dem));
        html.push_str(&format!("<p><strong>Partisan Index (Rep):</strong> {}</p>\n", self.partisan_index_rep));
        html
    }
}

impl fmt::Display for CountyDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} [{}]", self.title(), self.county)?;
        for m in [&self.previous, &self.current] {
            writeln!(f, "{}:", m.year)?;
            writeln!(f, "  Percent of Voting Age Registered: {}", m.reg_voters_pct)?;
            writeln!(f, "  Voter Turnout (VAP): {}", m.voter_turnout)?;
            writeln!(f, "  Registered Voter Turnout: {}", m.reg_voter_turnout)?;
        }
        writeln!(f, "Change ({} to {}):", self.previous.year, self.current.year)?;
        writeln!(f, "  Percent Registered: {}", self.change.reg_voters_pct)?;
        writeln!(f, "  Voter Turnout (VAP): {}", self.change.voter_turnout)?;
        writeln!(f, "  Registered Voter Turnout: {}", self.change.reg_voter_turnout)?;
        writeln!(f, "Partisan Index ({}):", self.current.year)?;
        writeln!(f, "  Dem: {}", self.partisan_index_dem)?;
        write!(f, "  Rep: {}", self.partisan_index_rep)
    }
}

/// What the output panel currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelContent {
    Loading,
    /// No county selected.
    Prompt,
    Detail(CountyDetail),
    LoadFailed,
}

impl PanelContent {
    pub const LOADING_MESSAGE: &'static str = "Loading map data...";
    pub const LOAD_FAILED_MESSAGE: &'static str = "Error loading map data. Please refresh the page.";

    pub fn to_html(&self) -> String {
        match self {
            PanelContent::Loading => format!("<p>{}</p>", Self::LOADING_MESSAGE),
            PanelContent::Prompt => "<h2>Click a County for Details</h2>\n\
                <p>Map shows the percentage point change in Voter Turnout (VAP) between the selected years.</p>"
                .to_string(),
            PanelContent::Detail(detail) => detail.to_html(),
            PanelContent::LoadFailed => format!(r#"<p style="color: red;">{}</p>"#, Self::LOAD_FAILED_MESSAGE),
        }
    }
}
