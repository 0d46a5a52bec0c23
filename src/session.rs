//! Session controller: the one owner of application state for a loaded page.

use std::time::Duration;

use anyhow::{bail, Result};
use log::{debug, error, info};

use crate::{
    config::SessionConfig,
    detail::{CountyDetail, PanelContent},
    index::RecordIndex,
    load::{load_datasets, DataSource, Datasets},
    render::{tooltip_text, MapRenderer, RedrawScheduler},
    style::{county_style, FeatureStyle},
    types::{CountyFeature, CountyId, Year},
};

/// Lifecycle of the two datasets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Ready,
    /// Load failed; the session stays unready for good.
    Failed,
}

/// The highlighted county and the two compared years.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub county: Option<CountyId>,
    pub current_year: Year,
    pub previous_year: Year,
}

/// Loaded data: only exists once both datasets arrived and the index was built.
#[derive(Debug)]
struct Loaded {
    counties: Vec<CountyFeature>,
    index: RecordIndex,
}

#[derive(Debug)]
pub struct Session {
    state: LoadState,
    loaded: Option<Loaded>,
    selection: Selection,
    panel: PanelContent,
    scheduler: RedrawScheduler,
}

impl Session {
    pub fn new(config: &SessionConfig) -> Self {
        Self {
            state: LoadState::Loading,
            loaded: None,
            selection: Selection {
                county: None,
                current_year: config.current_year,
                previous_year: config.previous_year,
            },
            panel: PanelContent::Loading,
            scheduler: RedrawScheduler::new(config.debounce()),
        }
    }

    /// Fetch both datasets and finish loading with the outcome.
    pub fn load(&mut self, stats: &dyn DataSource, counties: &dyn DataSource, now: Duration) -> Result<()> {
        let result = load_datasets(stats, counties);
        self.finish_load(result, now)
    }

    /// Publish the load outcome. On success the index is built and the first redraw scheduled;
    /// on failure the panel shows the error and nothing is kept.
    pub fn finish_load(&mut self, result: Result<Datasets>, now: Duration) -> Result<()> {
        if self.state != LoadState::Loading { bail!("Session already finished loading ({:?})", self.state) }

        let datasets = match result {
            Ok(datasets) => datasets,
            Err(e) => {
                error!("[session] {e:#}");
                self.state = LoadState::Failed;
                self.panel = PanelContent::LoadFailed;
                return Err(e);
            }
        };

        let index = RecordIndex::build(&datasets.records);
        info!(
            "[session] ready: {} records indexed, {} counties, years {:?}",
            index.len(), datasets.counties.len(), index.years(),
        );

        self.loaded = Some(Loaded { counties: datasets.counties, index });
        self.state = LoadState::Ready;
        self.panel = PanelContent::Prompt;
        self.scheduler.schedule(now);
        Ok(())
    }

    pub fn state(&self) -> LoadState { self.state }

    pub fn is_ready(&self) -> bool { self.state == LoadState::Ready }

    pub fn selection(&self) -> &Selection { &self.selection }

    pub fn panel(&self) -> &PanelContent { &self.panel }

    pub fn index(&self) -> Option<&RecordIndex> { self.loaded.as_ref().map(|l| &l.index) }

    pub fn counties(&self) -> &[CountyFeature] {
        self.loaded.as_ref().map_or(&[], |l| &l.counties)
    }

    pub fn scheduler(&self) -> &RedrawScheduler { &self.scheduler }

    /// The year selectors changed.
    pub fn set_years(&mut self, current: Year, previous: Year, now: Duration) {
        self.selection.current_year = current;
        self.selection.previous_year = previous;
        self.refresh_panel();
        self.scheduler.schedule(now);
    }

    /// A county polygon was clicked: select it, or clear the selection if it was already selected.
    pub fn click(&mut self, county: &CountyId, now: Duration) {
        if !self.is_ready() {
            debug!("[session] ignoring click on {county} before data is ready");
            return;
        }

        if self.selection.county.as_ref() == Some(county) {
            self.selection.county = None;
        } else {
            self.selection.county = Some(county.clone());
        }
        self.refresh_panel();
        self.scheduler.schedule(now);
    }

    /// Clear the highlighted county.
    pub fn reset_selection(&mut self, now: Duration) {
        if self.selection.county.take().is_some() {
            self.refresh_panel();
            self.scheduler.schedule(now);
        }
    }

    /// Ask for a (debounced) redraw.
    pub fn request_redraw(&mut self, now: Duration) {
        self.scheduler.schedule(now);
    }

    /// Run the pending redraw if it is due. Returns whether the map was redrawn.
    pub fn tick(&mut self, now: Duration, renderer: &mut dyn MapRenderer) -> Result<bool> {
        if self.scheduler.poll(now).is_none() { return Ok(false) }
        if !self.is_ready() { return Ok(false) }
        self.redraw(renderer)?;
        Ok(true)
    }

    /// Redraw immediately with the current selection, replacing whatever the renderer shows.
    pub fn redraw(&self, renderer: &mut dyn MapRenderer) -> Result<()> {
        let Some(loaded) = self.loaded.as_ref() else { bail!("Cannot draw the map before the data is loaded") };

        let Selection { county: selected, current_year, previous_year } = &self.selection;
        let (current, previous) = (*current_year, *previous_year);
        let index = &loaded.index;

        let style = |feature: &CountyFeature| -> FeatureStyle {
            county_style(index, &feature.id, current, previous, selected.as_ref())
        };
        let tooltip = |feature: &CountyFeature| tooltip_text(index, feature, current, previous);

        renderer.clear_layers();
        renderer.add_layer(&loaded.counties, &style, &tooltip)?;
        debug!("[session] redrew {} counties for {previous} -> {current}", loaded.counties.len());
        Ok(())
    }

    fn refresh_panel(&mut self) {
        let Some(loaded) = self.loaded.as_ref() else { return };
        self.panel = match &self.selection.county {
            Some(county) => PanelContent::Detail(CountyDetail::build(
                &loaded.index,
                &loaded.counties,
                county,
                self.selection.current_year,
                self.selection.previous_year,
            )),
            None => PanelContent::Prompt,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::load::StaticSource;

    const STATS: &str = r#"[
        {"STCOFIPS10": 6001, "YEAR": 2016, "VOTER_TURNOUT_PCT": 0.59},
        {"STCOFIPS10": 6001, "YEAR": 2020, "VOTER_TURNOUT_PCT": 0.6123}
    ]"#;
    const COUNTIES: &str = r#"{"type": "FeatureCollection", "features": [
        {"type": "Feature", "properties": {"STATEFP": "06", "COUNTYFP": "001", "NAME": "Alameda"},
         "geometry": {"type": "Polygon", "coordinates": [[[0, 0], [1, 0], [1, 1], [0, 0]]]}}
    ]}"#;

    fn ready_session() -> Session {
        let mut session = Session::new(&SessionConfig::default());
        session.load(&StaticSource::new("stats", STATS), &StaticSource::new("counties", COUNTIES), Duration::ZERO).unwrap();
        session
    }

    #[test]
    fn starts_loading() {
        let session = Session::new(&SessionConfig::default());
        assert_eq!(session.state(), LoadState::Loading);
        assert_eq!(session.panel(), &PanelContent::Loading);
        assert!(session.index().is_none());
    }

    #[test]
    fn load_builds_index_and_schedules_first_draw() {
        let session = ready_session();
        assert!(session.is_ready());
        assert_eq!(session.index().unwrap().len(), 2);
        assert_eq!(session.counties().len(), 1);
        assert_eq!(session.panel(), &PanelContent::Prompt);
        assert!(session.scheduler().pending().is_some());
    }

    #[test]
    fn second_load_is_rejected() {
        let mut session = ready_session();
        assert!(session.finish_load(Ok(Datasets::default()), Duration::ZERO).is_err());
        assert_eq!(session.index().unwrap().len(), 2);
    }

    #[test]
    fn click_toggles_selection() {
        let mut session = ready_session();
        let id = CountyId::new("06001");

        session.click(&id, Duration::ZERO);
        assert_eq!(session.selection().county.as_ref(), Some(&id));
        let PanelContent::Detail(detail) = session.panel() else { panic!("expected detail panel") };
        assert_eq!(detail.current.voter_turnout, "61.23%");

        session.click(&id, Duration::ZERO);
        assert_eq!(session.selection().county, None);
        assert_eq!(session.panel(), &PanelContent::Prompt);
    }

    #[test]
    fn year_change_refreshes_open_detail() {
        let mut session = ready_session();
        session.click(&CountyId::new("06001"), Duration::ZERO);
        session.set_years(2020, 2012, Duration::ZERO);
        let PanelContent::Detail(detail) = session.panel() else { panic!("expected detail panel") };
        assert_eq!(detail.previous.year, 2012);
        assert_eq!(detail.previous.voter_turnout, "N/A");
    }

    #[test]
    fn clicks_before_ready_are_ignored() {
        let mut session = Session::new(&SessionConfig::default());
        session.click(&CountyId::new("06001"), Duration::ZERO);
        assert_eq!(session.selection().county, None);
        assert_eq!(session.panel(), &PanelContent::Loading);
    }
}
