//! Calendar event records and the lenient boundary decode.
//!
//! Events arrive from an external calendar-data collaborator as JSON using
//! camelCase field names. The decode here is deliberately lenient: records
//! that fail to deserialize or violate the start/end invariant are dropped
//! one by one, so a single bad record never takes down a whole evaluation.
//! Only an input that is not a JSON array at all is a hard error.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Result, StatusError};

/// A single calendar event for the displayed resource.
///
/// Field names mirror the upstream calendar feed. `end_time` is optional --
/// an event without one is open-ended (it occupies the room from `start_time`
/// onward but can never be bounded for on-screen listing).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub start_time: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<String>,
}

impl CalendarEvent {
    /// Check the structural invariants of a record.
    ///
    /// # Errors
    /// Returns `StatusError::MalformedEvent` when `id` is empty or when
    /// `end_time` precedes `start_time`.
    pub fn validate(&self) -> Result<()> {
        if self.id.is_empty() {
            return Err(StatusError::MalformedEvent("empty id".to_string()));
        }
        if let Some(end) = self.end_time {
            if end < self.start_time {
                return Err(StatusError::MalformedEvent(format!(
                    "event '{}' ends before it starts",
                    self.id
                )));
            }
        }
        Ok(())
    }

    /// Convenience wrapper used by the derivation functions to skip bad
    /// records without propagating an error.
    pub fn is_well_formed(&self) -> bool {
        self.validate().is_ok()
    }
}

/// Decode raw JSON records into events, dropping the ones that are malformed.
///
/// Records that fail to deserialize (wrong types, missing `id`/`startTime`,
/// non-integer timestamps) or that violate `validate()` are skipped and
/// logged at debug level. The survivors keep their original input order.
pub fn decode_records(records: Vec<Value>) -> Vec<CalendarEvent> {
    let mut events = Vec::with_capacity(records.len());
    for record in records {
        match serde_json::from_value::<CalendarEvent>(record) {
            Ok(event) => match event.validate() {
                Ok(()) => events.push(event),
                Err(err) => log::debug!("dropping event: {}", err),
            },
            Err(err) => log::debug!("dropping undecodable event record: {}", err),
        }
    }
    events
}

/// Parse a JSON array of event records.
///
/// # Errors
/// Returns `StatusError::InvalidCollection` when the input is not a JSON
/// array. Individual malformed records inside the array are dropped, not
/// surfaced (see [`decode_records`]).
pub fn parse_event_list(json: &str) -> Result<Vec<CalendarEvent>> {
    let records: Vec<Value> = serde_json::from_str(json)
        .map_err(|e| StatusError::InvalidCollection(e.to_string()))?;
    Ok(decode_records(records))
}
