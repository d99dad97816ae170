//! WASM bindings for status-engine.
//!
//! Exposes availability resolution, event window selection, and time
//! formatting to the JavaScript presentation layer via `wasm-bindgen`.
//! All composite values cross the boundary as JSON strings.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p status-engine-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir packages/status-engine-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/status_engine_wasm.wasm
//! ```

use chrono_tz::Tz;
use status_engine::{CalendarEvent, DisplayConfiguration, TimeFormatter};
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Helpers: parse boundary inputs, map engine errors to JsValue
// ---------------------------------------------------------------------------

fn parse_timezone(timezone: &str) -> Result<Tz, JsValue> {
    timezone
        .parse()
        .map_err(|_| JsValue::from_str(&format!("Unknown timezone: {}", timezone)))
}

/// Decode the event list leniently: malformed records are dropped, a
/// non-array input is an error (mirrors the engine's boundary policy).
fn parse_events(events_json: &str) -> Result<Vec<CalendarEvent>, JsValue> {
    status_engine::parse_event_list(events_json).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn parse_config(config_json: &str) -> Result<DisplayConfiguration, JsValue> {
    serde_json::from_str(config_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid display configuration: {}", e)))
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Run one full evaluation cycle and return the display state as JSON.
///
/// `events_json` must be a JSON array of calendar event records;
/// `config_json` the display configuration object; `now_seconds` the
/// evaluation instant (epoch seconds); `timezone` an IANA identifier.
#[wasm_bindgen(js_name = "evaluateStatus")]
pub fn evaluate_status(
    events_json: &str,
    config_json: &str,
    now_seconds: i64,
    timezone: &str,
) -> Result<String, JsValue> {
    let events = parse_events(events_json)?;
    let config = parse_config(config_json)?;
    let formatter = TimeFormatter::new(parse_timezone(timezone)?);

    let display = status_engine::resolve_display(&events, &config, now_seconds, &formatter)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    serde_json::to_string(&display)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// Resolve whether the room is free at `now_seconds`.
#[wasm_bindgen(js_name = "isRoomFree")]
pub fn is_room_free(events_json: &str, now_seconds: i64) -> Result<bool, JsValue> {
    let events = parse_events(events_json)?;
    Ok(status_engine::is_free(&events, now_seconds))
}

/// Select the visible event window at `now_seconds` and return it as a JSON
/// array of event records (original order, at most three).
#[wasm_bindgen(js_name = "selectWindow")]
pub fn select_window(
    events_json: &str,
    now_seconds: i64,
    timezone: &str,
) -> Result<String, JsValue> {
    let events = parse_events(events_json)?;
    let formatter = TimeFormatter::new(parse_timezone(timezone)?);

    let day_end = formatter
        .end_of_day(now_seconds)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    let window = status_engine::select_window(&events, now_seconds, day_end);

    serde_json::to_string(&window)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// Format an epoch timestamp as local wall-clock `HH:MM`.
#[wasm_bindgen(js_name = "formatTimeOfDay")]
pub fn format_time_of_day(timestamp_seconds: i64, timezone: &str) -> Result<String, JsValue> {
    let formatter = TimeFormatter::new(parse_timezone(timezone)?);
    formatter
        .format(timestamp_seconds)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
