//! Quick-booking action surface.
//!
//! When the room is free the presentation layer offers fixed-duration
//! "book it now" triggers. The engine only exposes the closed set of
//! durations and the callback seam -- executing a booking, checking
//! conflicts, and persisting the result belong to an external booking
//! service.

use serde::{Deserialize, Serialize};

use crate::error::StatusError;

/// The fixed durations a free room can be quick-booked for.
///
/// Serialized as the raw minute count, so the wire value is `15`, `30`,
/// or `60`; anything else is rejected on deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u32", try_from = "u32")]
pub enum QuickBookDuration {
    Min15,
    Min30,
    Min60,
}

impl QuickBookDuration {
    /// All durations, in the order they are presented on screen.
    pub const ALL: [QuickBookDuration; 3] = [
        QuickBookDuration::Min15,
        QuickBookDuration::Min30,
        QuickBookDuration::Min60,
    ];

    pub fn minutes(self) -> u32 {
        match self {
            QuickBookDuration::Min15 => 15,
            QuickBookDuration::Min30 => 30,
            QuickBookDuration::Min60 => 60,
        }
    }
}

impl From<QuickBookDuration> for u32 {
    fn from(duration: QuickBookDuration) -> u32 {
        duration.minutes()
    }
}

impl TryFrom<u32> for QuickBookDuration {
    type Error = StatusError;

    fn try_from(minutes: u32) -> Result<Self, Self::Error> {
        match minutes {
            15 => Ok(QuickBookDuration::Min15),
            30 => Ok(QuickBookDuration::Min30),
            60 => Ok(QuickBookDuration::Min60),
            other => Err(StatusError::UnsupportedDuration(other)),
        }
    }
}

/// Callback seam the presentation layer wires a booking intent into.
///
/// Implementations forward the request to whatever booking backend the
/// deployment uses; the engine never calls this itself.
pub trait BookingHook {
    fn request_booking(&self, duration: QuickBookDuration);
}

/// The quick-book durations to offer for the current availability state.
///
/// All three when the room is free, none when it is occupied.
pub fn quick_book_options(is_free: bool) -> &'static [QuickBookDuration] {
    if is_free {
        &QuickBookDuration::ALL
    } else {
        &[]
    }
}
