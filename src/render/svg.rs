use std::{io::Write, path::Path};

use anyhow::{anyhow, Result};
use geo::MultiPolygon;

use crate::{
    common::write_output,
    detail::escape_html,
    io::svg::{combined_bounds, multipolygon_to_path, Projection, SvgStringWriter},
    style::FeatureStyle,
    types::{CountyFeature, CountyId},
};

use super::{MapRenderer, StyleFn, TooltipFn};

/// One county as drawn: geometry plus the callback results.
#[derive(Debug, Clone)]
struct DrawnCounty {
    id: CountyId,
    shape: MultiPolygon<f64>,
    style: FeatureStyle,
    tooltip: String,
}

/// Renders county layers into a standalone SVG document.
#[derive(Debug, Clone)]
pub struct SvgRenderer {
    width: f64,
    margin: f64,
    layers: Vec<Vec<DrawnCounty>>,
}

impl Default for SvgRenderer {
    fn default() -> Self { Self::new(1200.0, 10.0) }
}

impl SvgRenderer {
    pub fn new(width: f64, margin: f64) -> Self {
        Self { width, margin, layers: Vec::new() }
    }

    /// The current layers as SVG text.
    pub fn to_svg_string(&self) -> Result<String> {
        let bounds = combined_bounds(self.layers.iter().flatten().map(|county| &county.shape))
            .ok_or_else(|| anyhow!("[to_svg] Could not determine bounds; nothing to draw."))?;
        let projection = Projection::fit(bounds, self.width, self.margin);

        let mut writer = SvgStringWriter::new();
        writer.write_header(self.width, projection.height())?;
        writer.write_styles()?;

        for layer in &self.layers {
            writeln!(writer, "<g>")?;
            // Thicker outlines (the selection) go last so nothing paints over them.
            let mut order: Vec<&DrawnCounty> = layer.iter().collect();
            order.sort_by(|a, b| a.style.weight.total_cmp(&b.style.weight));
            for county in order {
                draw_county(&mut writer, county, &projection)?;
            }
            writeln!(writer, "</g>")?;
        }

        writer.write_footer()?;
        writer.into_string()
    }

    /// Write the current layers to an SVG file.
    pub fn write_to_file(&self, path: &Path, force: bool) -> Result<()> {
        write_output(path, self.to_svg_string()?.as_bytes(), force)
    }
}

fn draw_county(writer: &mut impl Write, county: &DrawnCounty, projection: &Projection) -> Result<()> {
    if county.shape.0.is_empty() { return Ok(()) }

    let style = &county.style;
    let title = escape_html(&county.tooltip.replace("<br>", "\n"));
    writeln!(
        writer,
        r#"<path class="county" id="c{id}" d="{d}" style="fill:{fill};fill-opacity:{fo};stroke:{stroke};stroke-width:{w};stroke-opacity:{so}"><title>{title}</title></path>"#,
        id = county.id,
        d = multipolygon_to_path(&county.shape, projection),
        fill = style.fill_color,
        fo = style.fill_opacity,
        stroke = style.color,
        w = style.weight,
        so = style.opacity,
    )?;
    Ok(())
}

impl MapRenderer for SvgRenderer {
    fn clear_layers(&mut self) {
        self.layers.clear();
    }

    fn add_layer(&mut self, features: &[CountyFeature], style: &StyleFn<'_>, tooltip: &TooltipFn<'_>) -> Result<()> {
        let layer = features.iter()
            .map(|feature| DrawnCounty {
                id: feature.id.clone(),
                shape: feature.shape.clone(),
                style: style(feature),
                tooltip: tooltip(feature),
            })
            .collect();
        self.layers.push(layer);
        Ok(())
    }

    fn layer_count(&self) -> usize { self.layers.len() }
}
