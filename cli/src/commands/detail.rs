use std::time::Duration;

use anyhow::{bail, Result};
use log::warn;
use turnoutmap::{CountyId, PanelContent};

use crate::cli::{Cli, DetailArgs};

use super::{load_session, resolve_config};

pub fn run(cli: &Cli, args: &DetailArgs) -> Result<()> {
    let config = resolve_config(cli, &args.data)?;
    let mut session = load_session(&config)?;

    let county = CountyId::new(&args.county);
    if !session.counties().iter().any(|feature| feature.id == county) {
        warn!("[detail] county {county} is not in the boundary dataset");
    }

    session.click(&county, Duration::ZERO);
    let PanelContent::Detail(detail) = session.panel() else { bail!("No detail available for county {county}") };

    if args.html {
        println!("{}", detail.to_html());
    } else {
        println!("{detail}");
    }
    Ok(())
}
