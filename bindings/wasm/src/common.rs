use std::time::Duration;

use wasm_bindgen::JsValue;

pub(crate) fn js_err(e: impl ToString) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Milliseconds since `epoch_ms` as a session clock reading; never negative.
pub(crate) fn elapsed(epoch_ms: f64, now_ms: f64) -> Duration {
    Duration::from_secs_f64(((now_ms - epoch_ms) / 1000.0).max(0.0))
}

/// Hand a JSON value to JS as a plain object, going through a string to keep large layers cheap.
pub(crate) fn json_to_js(value: &serde_json::Value) -> Result<JsValue, JsValue> {
    let json_string = serde_json::to_string(value)
        .map_err(|e| js_err(format!("Failed to serialize GeoJSON to string: {}", e)))?;
    js_sys::JSON::parse(&json_string)
}
