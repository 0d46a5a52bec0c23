use std::time::Duration;

use anyhow::Result;
use log::info;
use turnoutmap::{write_output, CountyId, GeoJsonRenderer, SvgRenderer};

use crate::cli::{Cli, OutputFormat, RenderArgs};

use super::{load_session, resolve_config};

pub fn run(cli: &Cli, args: &RenderArgs) -> Result<()> {
    let config = resolve_config(cli, &args.data)?;
    let mut session = load_session(&config)?;

    if let Some(select) = &args.select {
        session.click(&CountyId::new(select), Duration::ZERO);
    }

    let selection = session.selection();
    info!(
        "[render] drawing {} counties, {} -> {}",
        session.counties().len(), selection.previous_year, selection.current_year,
    );

    match args.format {
        OutputFormat::Svg => {
            let mut renderer = SvgRenderer::new(config.svg_width, config.svg_margin);
            session.redraw(&mut renderer)?;
            renderer.write_to_file(&args.output, args.force)?;
        }
        OutputFormat::Geojson => {
            let mut renderer = GeoJsonRenderer::new();
            session.redraw(&mut renderer)?;
            let bytes = serde_json::to_vec(&renderer.to_geojson())?;
            write_output(&args.output, &bytes, args.force)?;
        }
    }

    info!("[render] wrote {}", args.output.display());
    Ok(())
}
