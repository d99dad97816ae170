//! Event window selection for the on-screen list.
//!
//! Picks the events worth showing for the remainder of the local calendar
//! day: not yet finished, ending before local midnight, capped at three.
//! Input order is passed through untouched -- callers that want a
//! chronological list must pre-sort their input.

use crate::event::CalendarEvent;

/// Maximum number of events surfaced on screen at once.
pub const MAX_VISIBLE_EVENTS: usize = 3;

/// Select the visible event window at `now`.
///
/// An event qualifies when it is well-formed, has an end time, that end time
/// is strictly after `now` (still running or upcoming), and at or before
/// `day_end` (the last second of the local day, see
/// [`TimeFormatter::end_of_day`](crate::time::TimeFormatter::end_of_day)).
/// Events without an end time cannot be bounded and are excluded. Selection
/// stops after [`MAX_VISIBLE_EVENTS`] qualifiers; later ones are silently
/// dropped. An empty result is a valid outcome, not an error.
pub fn select_window<'a>(
    events: &'a [CalendarEvent],
    now: i64,
    day_end: i64,
) -> Vec<&'a CalendarEvent> {
    let window: Vec<&CalendarEvent> = events
        .iter()
        .filter(|e| e.is_well_formed())
        .filter(|e| matches!(e.end_time, Some(end) if end > now && end <= day_end))
        .take(MAX_VISIBLE_EVENTS)
        .collect();

    log::trace!(
        "selected {} of {} events for the visible window",
        window.len(),
        events.len()
    );

    window
}
