use anyhow::anyhow;
use wasm_bindgen::{JsValue, prelude::wasm_bindgen};

use turnoutmap_core::{CountyId, Datasets, GeoJsonRenderer, Session, SessionConfig, Year, LOAD_FAILED};

use crate::common::*;

/// Browser-side session. The page fetches both datasets and forwards UI events;
/// `tick` is called from an animation frame or timer and returns a styled layer when a redraw fires.
///
/// Every `now_ms` argument is a `Date.now()` reading.
#[wasm_bindgen]
pub struct WasmSession {
    config: SessionConfig,
    session: Session,
    renderer: GeoJsonRenderer,
    epoch_ms: f64,
}

#[wasm_bindgen]
impl WasmSession {
    /// config_json: optional JSON object overriding `SessionConfig` defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<WasmSession, JsValue> {
        let config = match config_json.as_deref() {
            Some(json) => SessionConfig::from_json_str(json).map_err(js_err)?,
            None => SessionConfig::default(),
        };
        let session = Session::new(&config);
        Ok(WasmSession { config, session, renderer: GeoJsonRenderer::new(), epoch_ms: js_sys::Date::now() })
    }

    /// Where the page should fetch the statistics JSON from.
    #[wasm_bindgen(getter)]
    pub fn stats_url(&self) -> String { self.config.stats_url.clone() }

    /// Where the page should fetch the county GeoJSON from.
    #[wasm_bindgen(getter)]
    pub fn counties_url(&self) -> String { self.config.counties_url.clone() }

    /// Both datasets arrived: parse them and build the index.
    pub fn load(&mut self, stats_json: &str, counties_json: &str) -> Result<(), JsValue> {
        let result = Datasets::parse(stats_json.as_bytes(), counties_json.as_bytes());
        let now = self.now();
        self.session.finish_load(result, now).map_err(|e| js_err(format!("{e:#}")))
    }

    /// One of the fetches failed; the session stays unready and the panel shows the error.
    pub fn fail_load(&mut self, message: &str) -> Result<(), JsValue> {
        let now = self.now();
        let error = anyhow!("{message}").context(LOAD_FAILED);
        self.session.finish_load(Err(error), now).map_err(|e| js_err(format!("{e:#}")))
    }

    pub fn set_years(&mut self, current: Year, previous: Year) {
        let now = self.now();
        self.session.set_years(current, previous, now);
    }

    /// Forward a click on a county polygon (the feature's `id`).
    pub fn click(&mut self, county_id: &str) {
        let now = self.now();
        self.session.click(&CountyId::new(county_id), now);
    }

    pub fn reset_selection(&mut self) {
        let now = self.now();
        self.session.reset_selection(now);
    }

    /// Run a due redraw. Returns the styled GeoJSON FeatureCollection, or null when nothing was drawn.
    pub fn tick(&mut self, now_ms: f64) -> Result<JsValue, JsValue> {
        let now = elapsed(self.epoch_ms, now_ms);
        let drawn = self.session.tick(now, &mut self.renderer).map_err(js_err)?;
        if !drawn { return Ok(JsValue::NULL) }
        json_to_js(&self.renderer.to_geojson())
    }

    /// Side panel markup for the current state.
    pub fn panel_html(&self) -> String {
        self.session.panel().to_html()
    }

    pub fn is_ready(&self) -> bool {
        self.session.is_ready()
    }

    /// Years that have at least one record, ascending.
    pub fn years(&self) -> Result<JsValue, JsValue> {
        let years = self.session.index().map(|index| index.years()).unwrap_or_default();
        serde_wasm_bindgen::to_value(&years).map_err(|e| e.into())
    }
}

impl WasmSession {
    fn now(&self) -> std::time::Duration {
        elapsed(self.epoch_ms, js_sys::Date::now())
    }
}
