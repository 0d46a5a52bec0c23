pub mod detail;
pub mod render;

use std::time::Duration;

use anyhow::Result;
use turnoutmap::{source_for, Session, SessionConfig};

use crate::cli::{Cli, DataArgs};

/// Config file values (or defaults) with the command-line flags applied on top.
pub fn resolve_config(cli: &Cli, data: &DataArgs) -> Result<SessionConfig> {
    let mut config = match &cli.config {
        Some(path) => SessionConfig::from_json_file(path)?,
        None => SessionConfig::default(),
    };

    if let Some(stats) = &data.stats { config.stats_url = stats.clone(); }
    if let Some(counties) = &data.counties { config.counties_url = counties.clone(); }
    if let Some(current) = data.current { config.current_year = current; }
    if let Some(previous) = data.previous { config.previous_year = previous; }

    Ok(config)
}

/// A session with both datasets loaded.
pub fn load_session(config: &SessionConfig) -> Result<Session> {
    let stats = source_for(&config.stats_url)?;
    let counties = source_for(&config.counties_url)?;

    let mut session = Session::new(config);
    session.load(&*stats, &*counties, Duration::ZERO)?;
    Ok(session)
}
