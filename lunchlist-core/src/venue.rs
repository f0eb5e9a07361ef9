//! Venues awaiting display, plus the interaction state copied onto them.

use thiserror::Error;

use crate::record::InteractionRecord;
use crate::time::TimestampMs;

/// One search result being ranked.
///
/// The `history` slot starts empty and is filled by the ranker when a
/// matching [`InteractionRecord`] is found, so the presentation layer can
/// show like/snooze state without a second lookup.
///
/// # Examples
/// ```
/// use lunchlist_core::Venue;
///
/// # fn main() -> Result<(), lunchlist_core::VenueError> {
/// let venue = Venue::new("cafe-luna", "Cafe Luna")?;
/// assert_eq!(venue.id, "cafe-luna");
/// assert!(venue.history.is_none());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Venue {
    /// Stable external identifier, the join key against history.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Interaction state copied from the matched record, if any.
    pub history: Option<InteractionSnapshot>,
}

/// Errors returned by [`Venue::new`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum VenueError {
    /// The identifier was empty or whitespace.
    #[error("venue id must not be empty")]
    EmptyId,
}

impl Venue {
    /// Validate the identifier and construct a venue with no history.
    ///
    /// # Errors
    /// Returns [`VenueError::EmptyId`] when `id` is empty or whitespace.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Result<Self, VenueError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(VenueError::EmptyId);
        }
        Ok(Self {
            id,
            name: name.into(),
            history: None,
        })
    }
}

/// Interaction state copied from a matched [`InteractionRecord`] onto a
/// [`Venue`] during ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InteractionSnapshot {
    /// Mirror of [`InteractionRecord::dont_like_click_date`].
    pub dont_like_click_date: TimestampMs,
    /// Mirror of [`InteractionRecord::too_soon_click_date`].
    pub too_soon_click_date: TimestampMs,
    /// Mirror of [`InteractionRecord::dismissed_count`].
    pub dismissed_count: u32,
}

impl InteractionSnapshot {
    /// Copy the display-relevant fields out of a record.
    #[must_use]
    pub const fn from_record(record: &InteractionRecord) -> Self {
        Self {
            dont_like_click_date: record.dont_like_click_date,
            too_soon_click_date: record.too_soon_click_date,
            dismissed_count: record.dismissed_count,
        }
    }
}
