//! One evaluation cycle over a consistent snapshot of "now".
//!
//! Availability is resolved first, then the event window is selected, both
//! against the same captured instant -- the status and the listed events can
//! never disagree about what time it is. Every evaluation is a pure function
//! of its inputs; nothing is cached between cycles.

use serde::{Deserialize, Serialize};

use crate::availability::is_free;
use crate::booking::{quick_book_options, QuickBookDuration};
use crate::config::DisplayConfiguration;
use crate::error::Result;
use crate::event::CalendarEvent;
use crate::status::{project, StatusProjection};
use crate::time::TimeFormatter;
use crate::window::select_window;

/// The derived state of the room at one instant.
///
/// `visible_events` is always a subsequence of the input list in original
/// order -- never synthesized, never re-sorted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedState {
    pub is_free: bool,
    pub visible_events: Vec<CalendarEvent>,
    /// The instant this state was computed for (epoch seconds).
    pub evaluated_at: i64,
}

/// A formatted line for one event in the content region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowEntry {
    pub id: String,
    /// `HH:MM - HH:MM` time range in the display's timezone.
    pub meta: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// True for the leading entry -- the meeting happening (or next up) now.
    /// The renderer emphasizes this one over the rest of the list.
    pub happening_now: bool,
}

/// Everything the renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayState {
    pub status: StatusProjection,
    pub state: ResolvedState,
    pub entries: Vec<WindowEntry>,
    /// Quick-book durations to offer; empty while occupied.
    pub quick_book: Vec<QuickBookDuration>,
}

/// Run one derivation cycle at `now`.
///
/// # Errors
/// Returns `StatusError::InvalidTimestamp` only when `now` itself cannot be
/// resolved to a local calendar day. Bad event records never fail the cycle;
/// they are skipped inside the derivation functions.
pub fn evaluate(
    events: &[CalendarEvent],
    now: i64,
    formatter: &TimeFormatter,
) -> Result<ResolvedState> {
    let free = is_free(events, now);
    let day_end = formatter.end_of_day(now)?;
    let visible_events = select_window(events, now, day_end)
        .into_iter()
        .cloned()
        .collect();

    Ok(ResolvedState {
        is_free: free,
        visible_events,
        evaluated_at: now,
    })
}

/// Run one derivation cycle and project it into the renderer-facing view.
///
/// # Errors
/// Same as [`evaluate`]. An event whose timestamps cannot be formatted is
/// dropped from `entries` (fail-closed for that single record) rather than
/// failing the whole projection.
pub fn resolve_display(
    events: &[CalendarEvent],
    config: &DisplayConfiguration,
    now: i64,
    formatter: &TimeFormatter,
) -> Result<DisplayState> {
    let state = evaluate(events, now, formatter)?;
    let status = project(state.is_free, config);

    let mut entries = Vec::with_capacity(state.visible_events.len());
    for (index, event) in state.visible_events.iter().enumerate() {
        match window_entry(event, index == 0, formatter) {
            Ok(entry) => entries.push(entry),
            Err(err) => log::debug!("dropping display entry for '{}': {}", event.id, err),
        }
    }

    let quick_book = quick_book_options(state.is_free).to_vec();

    Ok(DisplayState {
        status,
        state,
        entries,
        quick_book,
    })
}

fn window_entry(
    event: &CalendarEvent,
    happening_now: bool,
    formatter: &TimeFormatter,
) -> Result<WindowEntry> {
    // The window only admits events with an end time; a bare start is kept
    // formattable anyway so this helper is total over CalendarEvent.
    let meta = match event.end_time {
        Some(end) => format!(
            "{} - {}",
            formatter.format(event.start_time)?,
            formatter.format(end)?
        ),
        None => formatter.format(event.start_time)?,
    };

    Ok(WindowEntry {
        id: event.id.clone(),
        meta,
        title: event.title.clone(),
        happening_now,
    })
}
