//! Millisecond timestamps and day arithmetic shared across the engine.
//!
//! Interaction history stores epoch milliseconds as signed integers so the
//! sentinel values (`-1` for "never disliked", `0` for "snooze unset")
//! remain representable alongside real timestamps.

/// Epoch milliseconds, as recorded by the history store.
pub type TimestampMs = i64;

/// Milliseconds in one day.
pub const MS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Convert a whole number of days into milliseconds.
///
/// # Examples
/// ```
/// use lunchlist_core::{MS_PER_DAY, days_to_ms};
///
/// assert_eq!(days_to_ms(0), 0);
/// assert_eq!(days_to_ms(30), 30 * MS_PER_DAY);
/// ```
#[must_use]
pub fn days_to_ms(days: u32) -> i64 {
    i64::from(days) * MS_PER_DAY
}
