//! Categories a venue can be filed under during one ranking pass.

use std::fmt;

/// The bucket assigned to a venue by the ranker.
///
/// Exactly one category applies per venue per pass. Buckets are recombined
/// for display in the order `Preferred`, `TooSoon`, `Neutral`, `DontLike`.
///
/// # Examples
/// ```
/// use lunchlist_core::Category;
///
/// assert_eq!(Category::Preferred.as_str(), "preferred");
/// assert_eq!(Category::TooSoon.to_string(), "too soon");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Liked, and any snooze has lapsed; shown first.
    Preferred,
    /// Snoozed via "remind me later" and the window is still open.
    TooSoon,
    /// No signal either way; the only bucket subject to the display cap.
    Neutral,
    /// Disliked within the expiry window; shown last.
    DontLike,
}

impl Category {
    /// Return the category as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Preferred => "preferred",
            Self::TooSoon => "too soon",
            Self::Neutral => "neutral",
            Self::DontLike => "don't like",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
