//! Room occupancy resolution.
//!
//! A resource is occupied when some event's interval covers the evaluation
//! instant: `start_time <= now < end_time`, with a missing `end_time`
//! treated as open-ended (currently occupying). Malformed records are
//! skipped, never counted.

use crate::event::CalendarEvent;

/// Whether `event` covers the instant `now`.
///
/// Half-open membership: an event that starts exactly at `now` already
/// occupies the room; one that ends exactly at `now` no longer does.
fn covers(event: &CalendarEvent, now: i64) -> bool {
    event.start_time <= now && event.end_time.map_or(true, |end| now < end)
}

/// Resolve whether the room is free at `now`.
///
/// Evaluated fresh on every call against the instant it is given -- the
/// caller captures `now` once per evaluation cycle so this and the event
/// window see the same snapshot.
pub fn is_free(events: &[CalendarEvent], now: i64) -> bool {
    !events
        .iter()
        .filter(|e| e.is_well_formed())
        .any(|e| covers(e, now))
}
