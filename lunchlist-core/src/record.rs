//! Per-venue user interaction history.
//!
//! A record captures the last "don't like" and "too soon" actions for one
//! venue, plus dismissal bookkeeping. Timestamp fields use sentinel values
//! inherited from the persisted format: [`NEVER_DISLIKED`] (`-1`) marks a
//! liked venue and [`SNOOZE_UNSET`] (`0`) marks a venue that was never
//! snoozed.

use thiserror::Error;

use crate::time::TimestampMs;

/// Sentinel for `dont_like_click_date`: the venue was never disliked.
pub const NEVER_DISLIKED: TimestampMs = -1;

/// Sentinel for `too_soon_click_date`: the venue was never snoozed.
pub const SNOOZE_UNSET: TimestampMs = 0;

/// Persisted interaction history for one venue.
///
/// Records are read-only during ranking; like/dislike/snooze updates are
/// written by the interaction layer, not the engine.
///
/// # Examples
/// ```
/// use lunchlist_core::InteractionRecord;
///
/// # fn main() -> Result<(), lunchlist_core::InteractionRecordError> {
/// let record = InteractionRecord::new("cafe-luna")?.with_liked();
/// assert!(record.liked());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InteractionRecord {
    /// Venue identifier this record belongs to.
    pub id: String,
    /// Last "remind me later" action, epoch ms, or [`SNOOZE_UNSET`].
    pub too_soon_click_date: TimestampMs,
    /// Last "don't like" action, epoch ms, or [`NEVER_DISLIKED`] for a liked
    /// venue. `0` means neither liked nor disliked.
    pub dont_like_click_date: TimestampMs,
    /// Last dismissal, epoch ms. Bookkeeping only; ranking ignores it.
    pub dismissed_date: TimestampMs,
    /// Number of dismissals. Bookkeeping only; ranking ignores it.
    pub dismissed_count: u32,
}

/// Errors returned by [`InteractionRecord::new`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InteractionRecordError {
    /// The identifier was empty or whitespace.
    #[error("interaction record id must not be empty")]
    EmptyId,
}

impl InteractionRecord {
    /// Validate the identifier and construct a record with no interactions.
    ///
    /// # Errors
    /// Returns [`InteractionRecordError::EmptyId`] when `id` is empty or
    /// whitespace; an empty join key would match nothing or, worse, collide
    /// with another malformed entry.
    pub fn new(id: impl Into<String>) -> Result<Self, InteractionRecordError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(InteractionRecordError::EmptyId);
        }
        Ok(Self {
            id,
            too_soon_click_date: SNOOZE_UNSET,
            dont_like_click_date: 0,
            dismissed_date: 0,
            dismissed_count: 0,
        })
    }

    /// Mark the venue liked, returning `self` for chaining.
    #[must_use]
    pub const fn with_liked(mut self) -> Self {
        self.dont_like_click_date = NEVER_DISLIKED;
        self
    }

    /// Record a "don't like" action at `clicked_at`, returning `self`.
    #[must_use]
    pub const fn with_dont_like(mut self, clicked_at: TimestampMs) -> Self {
        self.dont_like_click_date = clicked_at;
        self
    }

    /// Record a "remind me later" action at `clicked_at`, returning `self`.
    #[must_use]
    pub const fn with_too_soon(mut self, clicked_at: TimestampMs) -> Self {
        self.too_soon_click_date = clicked_at;
        self
    }

    /// Record dismissal bookkeeping, returning `self`.
    #[must_use]
    pub const fn with_dismissal(mut self, dismissed_at: TimestampMs, count: u32) -> Self {
        self.dismissed_date = dismissed_at;
        self.dismissed_count = count;
        self
    }

    /// Whether the venue is marked liked.
    #[must_use]
    pub const fn liked(&self) -> bool {
        self.dont_like_click_date == NEVER_DISLIKED
    }

    /// Whether a dislike is present and younger than `expiry_ms`.
    ///
    /// A dislike aged exactly `expiry_ms` no longer suppresses the venue.
    #[must_use]
    pub const fn dont_like_active(&self, now: TimestampMs, expiry_ms: i64) -> bool {
        self.dont_like_click_date > 0 && now - self.dont_like_click_date < expiry_ms
    }

    /// Whether a snooze is present and younger than `window_ms`.
    #[must_use]
    pub const fn too_soon_active(&self, now: TimestampMs, window_ms: i64) -> bool {
        self.too_soon_click_date != SNOOZE_UNSET
            && now - self.too_soon_click_date < window_ms
    }
}
