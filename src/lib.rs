//! Facade crate for the Lunchlist ranking engine.
//!
//! This crate re-exports the core domain types and the category ranker so
//! callers can depend on a single crate.
//!
//! # Examples
//!
//! ```rust
//! use lunchlist_engine::{CategoryRanker, InteractionRecord, Ranker, RankerSettings, Venue};
//!
//! let venues = vec![
//!     Venue::new("cafe-luna", "Cafe Luna").expect("valid id"),
//!     Venue::new("taqueria-sol", "Taqueria Sol").expect("valid id"),
//! ];
//! let history = vec![InteractionRecord::new("cafe-luna").expect("valid id").with_liked()];
//!
//! let ranker = CategoryRanker::new(RankerSettings::default());
//! let ranked = ranker.rank(venues, &history, 1_700_000_000_000);
//! assert_eq!(ranked.first().map(|v| v.id.as_str()), Some("cafe-luna"));
//! ```

#![forbid(unsafe_code)]

pub use lunchlist_core::{
    Category, HistoryStore, InteractionRecord, InteractionRecordError, InteractionSnapshot,
    MS_PER_DAY, NEVER_DISLIKED, Ranker, SNOOZE_UNSET, TimestampMs, Venue, VenueError,
};
pub use lunchlist_ranker::{CategoryRanker, RankerSettings};

#[cfg(feature = "test-support")]
pub use lunchlist_core::test_support;
