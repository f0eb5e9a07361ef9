//! Core domain types for the Lunchlist engine.
//!
//! The crate defines the value types exchanged at the ranking seam — venues
//! awaiting display and the per-venue interaction history recorded for the
//! user — together with the traits collaborators implement: [`Ranker`] for
//! the classification engine and [`HistoryStore`] for read-only access to
//! persisted records. Constructors validate identifiers early so downstream
//! joins against history stay honest.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod category;
mod history;
mod ranker;
mod record;
mod time;
mod venue;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use category::Category;
pub use history::HistoryStore;
pub use ranker::Ranker;
pub use record::{InteractionRecord, InteractionRecordError, NEVER_DISLIKED, SNOOZE_UNSET};
pub use time::{MS_PER_DAY, TimestampMs, days_to_ms};
pub use venue::{InteractionSnapshot, Venue, VenueError};
