//! Configuration for the category ranker.

use lunchlist_core::days_to_ms;

/// Default maximum number of neutral venues kept for display.
pub const DEFAULT_DISPLAY_CAP: usize = 100;

/// Default number of days a "don't like" keeps suppressing a venue.
pub const DEFAULT_DONT_LIKE_EXPIRY_DAYS: u32 = 30;

/// Default number of days a "remind me later" snooze stays active.
pub const DEFAULT_TOO_SOON_WINDOW_DAYS: u32 = 2;

/// Tunable windows and caps for one ranking pass.
///
/// Settings are passed to the ranker explicitly so tests and callers never
/// depend on process-wide state. Negative caps or windows are
/// unrepresentable; a zero window simply means the corresponding rule never
/// fires.
///
/// # Examples
/// ```
/// use lunchlist_ranker::RankerSettings;
///
/// let settings = RankerSettings::new()
///     .with_display_cap(25)
///     .with_dont_like_expiry_days(7);
/// assert_eq!(settings.display_cap, 25);
/// assert_eq!(settings.too_soon_window_days, 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankerSettings {
    /// Maximum number of neutral venues kept; other buckets are never capped.
    pub display_cap: usize,
    /// Days before a "don't like" stops suppressing a venue.
    pub dont_like_expiry_days: u32,
    /// Days a "remind me later" snooze stays active.
    pub too_soon_window_days: u32,
}

impl RankerSettings {
    /// Construct settings with the default cap and windows.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            display_cap: DEFAULT_DISPLAY_CAP,
            dont_like_expiry_days: DEFAULT_DONT_LIKE_EXPIRY_DAYS,
            too_soon_window_days: DEFAULT_TOO_SOON_WINDOW_DAYS,
        }
    }

    /// Set the neutral display cap, returning `self` for chaining.
    #[must_use]
    pub const fn with_display_cap(mut self, cap: usize) -> Self {
        self.display_cap = cap;
        self
    }

    /// Set the dislike expiry window in days, returning `self`.
    #[must_use]
    pub const fn with_dont_like_expiry_days(mut self, days: u32) -> Self {
        self.dont_like_expiry_days = days;
        self
    }

    /// Set the snooze window in days, returning `self`.
    #[must_use]
    pub const fn with_too_soon_window_days(mut self, days: u32) -> Self {
        self.too_soon_window_days = days;
        self
    }

    pub(crate) fn dont_like_expiry_ms(self) -> i64 {
        days_to_ms(self.dont_like_expiry_days)
    }

    pub(crate) fn too_soon_window_ms(self) -> i64 {
        days_to_ms(self.too_soon_window_days)
    }
}

impl Default for RankerSettings {
    fn default() -> Self {
        Self::new()
    }
}
