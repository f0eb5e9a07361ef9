//! Rank venues for display according to the user's interaction history.

use crate::record::InteractionRecord;
use crate::time::TimestampMs;
use crate::venue::Venue;

/// Reorder a venue list according to per-venue interaction history.
///
/// Implementations must be thread-safe (`Send` + `Sync`) so a ranker can be
/// shared across request handlers. Ranking is a total, synchronous
/// computation: degenerate inputs (empty venue list, empty history) produce
/// well-defined output rather than errors.
///
/// Implementations must:
/// - Return a sub-permutation of the input: no venue duplicated, none
///   invented.
/// - Preserve the input's relative order within each category.
/// - Treat venues with no matching record as neutral, leaving their
///   `history` slot untouched.
///
/// # Examples
///
/// ```rust
/// use lunchlist_core::{InteractionRecord, Ranker, TimestampMs, Venue};
///
/// struct PassthroughRanker;
///
/// impl Ranker for PassthroughRanker {
///     fn rank(
///         &self,
///         venues: Vec<Venue>,
///         _history: &[InteractionRecord],
///         _now: TimestampMs,
///     ) -> Vec<Venue> {
///         venues
///     }
/// }
///
/// let venue = Venue::new("cafe-luna", "Cafe Luna").expect("valid id");
/// let ranked = PassthroughRanker.rank(vec![venue.clone()], &[], 0);
/// assert_eq!(ranked, vec![venue]);
/// ```
pub trait Ranker: Send + Sync {
    /// Classify and reorder `venues` against `history` as of `now`.
    ///
    /// Venues are taken by value: the ranker enriches matched venues with a
    /// snapshot of their record and returns the new list, so the caller's
    /// original list is consumed rather than mutated in place.
    fn rank(
        &self,
        venues: Vec<Venue>,
        history: &[InteractionRecord],
        now: TimestampMs,
    ) -> Vec<Venue>;
}
