//! # status-engine
//!
//! Availability derivation for single-room status displays.
//!
//! Given the calendar events of one bookable resource and an evaluation
//! instant, the engine derives whether the room is free, which of today's
//! events to surface on screen, and the display-ready status projection the
//! rendering layer consumes. Rendering itself (layout, colors, icons) lives
//! outside this crate; so does fetching events and executing bookings.
//!
//! ## Quick start
//!
//! ```rust
//! use status_engine::{evaluate, CalendarEvent, TimeFormatter};
//!
//! let events = vec![CalendarEvent {
//!     id: "standup".to_string(),
//!     title: Some("Morning standup".to_string()),
//!     start_time: 1_700_000_000,
//!     end_time: Some(1_700_001_800),
//!     resource_title: None,
//!     resource_id: None,
//! }];
//!
//! let formatter = TimeFormatter::new(chrono_tz::UTC);
//! let state = evaluate(&events, 1_700_000_600, &formatter).unwrap();
//! assert!(!state.is_free);
//! assert_eq!(state.visible_events.len(), 1);
//! ```
//!
//! ## Modules
//!
//! - [`availability`] — occupied/free resolution at an instant
//! - [`window`] — capped, order-preserving selection of today's events
//! - [`time`] — `HH:MM` formatting and local calendar-day boundaries
//! - [`status`] — availability flag → status label + style token
//! - [`resolve`] — one consistent evaluation cycle over all of the above
//! - [`booking`] — quick-booking durations and the callback seam
//! - [`event`] — event records and the lenient boundary decode
//! - [`config`] — static display text
//! - [`error`] — error types

pub mod availability;
pub mod booking;
pub mod config;
pub mod error;
pub mod event;
pub mod resolve;
pub mod status;
pub mod time;
pub mod window;

pub use availability::is_free;
pub use booking::{quick_book_options, BookingHook, QuickBookDuration};
pub use config::DisplayConfiguration;
pub use error::StatusError;
pub use event::{decode_records, parse_event_list, CalendarEvent};
pub use resolve::{evaluate, resolve_display, DisplayState, ResolvedState, WindowEntry};
pub use status::{project, StatusProjection, StyleClass};
pub use time::TimeFormatter;
pub use window::{select_window, MAX_VISIBLE_EVENTS};
