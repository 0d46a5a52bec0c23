//! The map-rendering collaborator and its implementations.
//!
//! A renderer is handed the county features together with a style callback and a
//! tooltip callback, mirroring how a browser mapping library consumes a GeoJSON layer.
//! Clicks travel the other way: the host forwards them to `Session::click`.

mod geojson;
mod schedule;
mod svg;
mod tooltip;

use anyhow::Result;

use crate::{style::FeatureStyle, types::CountyFeature};

pub use geojson::GeoJsonRenderer;
pub use schedule::{RedrawScheduler, ScheduledRedraw, DEFAULT_DEBOUNCE};
pub use svg::SvgRenderer;
pub use tooltip::tooltip_text;

/// Per-polygon style callback.
pub type StyleFn<'a> = dyn Fn(&CountyFeature) -> FeatureStyle + 'a;

/// Per-polygon tooltip callback.
pub type TooltipFn<'a> = dyn Fn(&CountyFeature) -> String + 'a;

pub trait MapRenderer {
    /// Remove every county layer drawn so far.
    fn clear_layers(&mut self);

    /// Draw `features` as one layer, styling and annotating each polygon through the callbacks.
    fn add_layer(&mut self, features: &[CountyFeature], style: &StyleFn<'_>, tooltip: &TooltipFn<'_>) -> Result<()>;

    /// Number of layers currently drawn.
    fn layer_count(&self) -> usize;
}
