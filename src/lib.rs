#![doc = "Turnoutmap public API"]
mod common;
mod config;
mod detail;
mod index;
mod io;
mod load;
mod metric;
mod render;
mod session;
mod style;
mod types;

#[doc(inline)]
pub use types::{normalize_key, CountyFeature, CountyId, StatRecord, Year, UNKNOWN_NAME};

#[doc(inline)]
pub use index::{RecordIndex, RecordKey};

#[doc(inline)]
pub use metric::{delta, single_delta, TurnoutDelta};

#[doc(inline)]
pub use style::{change_color, classify, county_style, ChangeBucket, FeatureStyle, Rgb};

#[doc(inline)]
pub use detail::{format_percent, format_points, ChangeMetrics, CountyDetail, PanelContent, YearMetrics, NOT_AVAILABLE};

#[doc(inline)]
pub use load::{fetch_both, load_datasets, source_for, DataSource, Datasets, FileSource, StaticSource, LOAD_FAILED};

#[cfg(feature = "download")]
#[doc(inline)]
pub use load::HttpSource;

#[doc(inline)]
pub use render::{
    tooltip_text, GeoJsonRenderer, MapRenderer, RedrawScheduler, ScheduledRedraw, StyleFn, SvgRenderer, TooltipFn,
    DEFAULT_DEBOUNCE,
};

#[doc(inline)]
pub use session::{LoadState, Selection, Session};

#[doc(inline)]
pub use config::SessionConfig;

#[doc(inline)]
pub use common::{state_fips_to_name, write_output};
