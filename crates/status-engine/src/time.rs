//! Wall-clock formatting and calendar-day boundaries.
//!
//! The formatter carries its timezone as an explicit constructor argument
//! instead of process-wide locale state, so two widgets in different zones
//! can coexist and tests can pin the zone they need.

use chrono::{DateTime, LocalResult, NaiveTime, TimeZone};
use chrono_tz::Tz;

use crate::error::{Result, StatusError};

/// Formats epoch timestamps as local wall-clock time and resolves the
/// local calendar-day boundary used by the event window.
#[derive(Debug, Clone, Copy)]
pub struct TimeFormatter {
    tz: Tz,
}

impl TimeFormatter {
    pub fn new(tz: Tz) -> Self {
        Self { tz }
    }

    pub fn timezone(&self) -> Tz {
        self.tz
    }

    /// Resolve an epoch timestamp to a local datetime.
    ///
    /// # Errors
    /// Returns `StatusError::InvalidTimestamp` when the value is outside the
    /// range chrono can represent.
    fn local(&self, timestamp: i64) -> Result<DateTime<Tz>> {
        match self.tz.timestamp_opt(timestamp, 0) {
            LocalResult::Single(dt) => Ok(dt),
            _ => Err(StatusError::InvalidTimestamp(format!(
                "{} is out of range",
                timestamp
            ))),
        }
    }

    /// Format an epoch timestamp as zero-padded 24-hour `HH:MM`.
    ///
    /// # Errors
    /// Returns `StatusError::InvalidTimestamp` for out-of-range values.
    pub fn format(&self, timestamp: i64) -> Result<String> {
        Ok(self.local(timestamp)?.format("%H:%M").to_string())
    }

    /// The last whole second of the local calendar day containing `timestamp`.
    ///
    /// This is the inclusive upper bound of the visible event window: an
    /// event qualifies only if it ends at or before this instant.
    ///
    /// # Errors
    /// Returns `StatusError::InvalidTimestamp` when `timestamp` is out of
    /// range or the following local midnight cannot be resolved.
    pub fn end_of_day(&self, timestamp: i64) -> Result<i64> {
        let local = self.local(timestamp)?;
        let next_day = local.date_naive().succ_opt().ok_or_else(|| {
            StatusError::InvalidTimestamp(format!("no calendar day after {}", timestamp))
        })?;

        // DST can remove local midnight (e.g. America/Santiago springs forward
        // at 00:00); the day then ends just before the first valid instant of
        // the next day. An ambiguous midnight resolves to its earlier mapping.
        for hour in 0..=3 {
            let candidate = next_day.and_time(NaiveTime::MIN) + chrono::Duration::hours(hour);
            if let Some(dt) = self.tz.from_local_datetime(&candidate).earliest() {
                return Ok(dt.timestamp() - 1);
            }
        }

        Err(StatusError::InvalidTimestamp(format!(
            "cannot resolve end of day for {}",
            timestamp
        )))
    }
}
