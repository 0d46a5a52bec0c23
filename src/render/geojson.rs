use anyhow::Result;
use serde_json::{json, Value};

use crate::{io::geojson::multipolygon_to_geojson, types::CountyFeature};

use super::{MapRenderer, StyleFn, TooltipFn};

/// Renders county layers as styled GeoJSON, for a browser mapping library to draw as-is.
#[derive(Debug, Clone, Default)]
pub struct GeoJsonRenderer {
    layers: Vec<Vec<Value>>,
}

impl GeoJsonRenderer {
    pub fn new() -> Self { Self::default() }

    /// All drawn features as one FeatureCollection.
    pub fn to_geojson(&self) -> Value {
        let features: Vec<&Value> = self.layers.iter().flatten().collect();
        json!({
            "type": "FeatureCollection",
            "features": features,
        })
    }
}

impl MapRenderer for GeoJsonRenderer {
    fn clear_layers(&mut self) {
        self.layers.clear();
    }

    fn add_layer(&mut self, features: &[CountyFeature], style: &StyleFn<'_>, tooltip: &TooltipFn<'_>) -> Result<()> {
        let layer = features.iter()
            .map(|feature| {
                let style = style(feature);
                json!({
                    "type": "Feature",
                    "id": feature.id.as_str(), // Feature ID for efficient updates in the map library
                    "geometry": multipolygon_to_geojson(&feature.shape),
                    "properties": {
                        "geo_id": feature.id.as_str(),
                        "STATEFP": &*feature.state_fp,
                        "COUNTYFP": &*feature.county_fp,
                        "NAME": feature.display_name(),
                        "fillColor": style.fill_color.to_string(),
                        "weight": style.weight,
                        "opacity": style.opacity,
                        "color": style.color.to_string(),
                        "fillOpacity": style.fill_opacity,
                        "tooltip": tooltip(feature),
                        // Hash for change detection: id + fill + outline
                        "_hash": format!("{}:{}:{}", feature.id, style.fill_color, style.weight),
                    },
                })
            })
            .collect();
        self.layers.push(layer);
        Ok(())
    }

    fn layer_count(&self) -> usize { self.layers.len() }
}
