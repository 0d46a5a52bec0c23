mod format;
mod panel;

pub use format::{escape_html, format_percent, format_points, NOT_AVAILABLE};
pub use panel::{ChangeMetrics, CountyDetail, PanelContent, YearMetrics};
