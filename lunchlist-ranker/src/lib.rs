//! Category-based venue ranking for the Lunchlist engine.
//!
//! The crate provides [`CategoryRanker`], an implementation of the
//! [`Ranker`](lunchlist_core::Ranker) trait that files each venue into one
//! of four categories — preferred, too soon, neutral, don't like — based on
//! the user's interaction history, then recombines the buckets in a fixed
//! display order. Liked venues surface first, actively snoozed venues
//! follow, unclassified venues fill the middle up to a display cap, and
//! venues with an unexpired dislike sink to the bottom.
//!
//! Classification is a pure function of the matched record, the supplied
//! clock, and [`RankerSettings`]; the ranker holds no cross-call state.
//!
//! # Examples
//!
//! ```rust
//! use lunchlist_core::{InteractionRecord, Ranker, Venue};
//! use lunchlist_ranker::{CategoryRanker, RankerSettings};
//!
//! let venues = vec![Venue::new("cafe-luna", "Cafe Luna").expect("valid id")];
//! let history = vec![InteractionRecord::new("cafe-luna").expect("valid id").with_liked()];
//!
//! let ranker = CategoryRanker::new(RankerSettings::default());
//! let ranked = ranker.rank(venues, &history, 1_700_000_000_000);
//! assert_eq!(ranked.len(), 1);
//! ```

#![forbid(unsafe_code)]

use std::collections::HashMap;

use log::{debug, trace};
use lunchlist_core::{
    Category, HistoryStore, InteractionRecord, InteractionSnapshot, Ranker, TimestampMs, Venue,
};

mod settings;

pub use settings::{
    DEFAULT_DISPLAY_CAP, DEFAULT_DONT_LIKE_EXPIRY_DAYS, DEFAULT_TOO_SOON_WINDOW_DAYS,
    RankerSettings,
};

/// Rank venues into preferred, too-soon, neutral, and don't-like buckets.
///
/// The ranker is cheap to construct and holds only its settings; share one
/// instance or build one per call, whichever suits the caller.
#[derive(Debug, Clone, Copy, Default)]
pub struct CategoryRanker {
    settings: RankerSettings,
}

impl CategoryRanker {
    /// Construct a ranker with the given settings.
    #[must_use]
    pub const fn new(settings: RankerSettings) -> Self {
        Self { settings }
    }

    /// The settings this ranker applies.
    #[must_use]
    pub const fn settings(&self) -> RankerSettings {
        self.settings
    }

    /// Classify one record as of `now`.
    ///
    /// Categories are exclusive and checked in precedence order: preferred,
    /// then don't-like, then too-soon. A liked venue whose snooze is still
    /// open is filed under too-soon rather than preferred; a dislike aged
    /// past the expiry window no longer counts.
    #[must_use]
    pub fn categorise(&self, record: &InteractionRecord, now: TimestampMs) -> Category {
        let snoozed = record.too_soon_active(now, self.settings.too_soon_window_ms());
        if record.liked() && !snoozed {
            Category::Preferred
        } else if record.dont_like_active(now, self.settings.dont_like_expiry_ms()) {
            Category::DontLike
        } else if snoozed {
            Category::TooSoon
        } else {
            Category::Neutral
        }
    }

    /// Collect records from a [`HistoryStore`] and rank against them.
    ///
    /// Convenience for callers holding a store rather than a materialized
    /// slice; behaviour is identical to [`Ranker::rank`].
    #[must_use]
    pub fn rank_from_store<S: HistoryStore>(
        &self,
        venues: Vec<Venue>,
        store: &S,
        now: TimestampMs,
    ) -> Vec<Venue> {
        let history: Vec<InteractionRecord> = store.records().collect();
        self.rank(venues, &history, now)
    }
}

impl Ranker for CategoryRanker {
    fn rank(
        &self,
        venues: Vec<Venue>,
        history: &[InteractionRecord],
        now: TimestampMs,
    ) -> Vec<Venue> {
        let lookup = first_match_lookup(history);

        let mut preferred = Vec::new();
        let mut too_soon = Vec::new();
        let mut neutral = Vec::new();
        let mut dont_like = Vec::new();

        for mut venue in venues {
            let Some(record) = lookup.get(venue.id.as_str()) else {
                neutral.push(venue);
                continue;
            };
            debug!(
                "history match for venue {}: too_soon_click_date={} dont_like_click_date={} dismissed_count={}",
                venue.id,
                record.too_soon_click_date,
                record.dont_like_click_date,
                record.dismissed_count,
            );
            // Enrichment happens on every match, whatever the category.
            venue.history = Some(InteractionSnapshot::from_record(record));
            let category = self.categorise(record, now);
            trace!("venue {} deemed {category}", venue.id);
            match category {
                Category::Preferred => preferred.push(venue),
                Category::TooSoon => too_soon.push(venue),
                Category::Neutral => neutral.push(venue),
                Category::DontLike => dont_like.push(venue),
            }
        }

        if neutral.len() > self.settings.display_cap {
            debug!(
                "paring neutral list from {} to {}",
                neutral.len(),
                self.settings.display_cap,
            );
            neutral.truncate(self.settings.display_cap);
        }

        let mut ranked = preferred;
        ranked.reserve(too_soon.len() + neutral.len() + dont_like.len());
        debug!(
            "ranked list: {} preferred, {} too soon, {} neutral, {} don't like",
            ranked.len(),
            too_soon.len(),
            neutral.len(),
            dont_like.len(),
        );
        ranked.extend(too_soon);
        ranked.extend(neutral);
        ranked.extend(dont_like);
        ranked
    }
}

/// Build an id lookup over `history`, keeping the first record per id.
///
/// History is persisted as a list; the first occurrence of an id is
/// authoritative when duplicates slip in.
fn first_match_lookup(history: &[InteractionRecord]) -> HashMap<&str, &InteractionRecord> {
    let mut lookup: HashMap<&str, &InteractionRecord> = HashMap::with_capacity(history.len());
    for record in history {
        lookup.entry(record.id.as_str()).or_insert(record);
    }
    lookup
}

#[cfg(test)]
mod tests;
