//! Data access trait for persisted interaction records.
//!
//! The `HistoryStore` trait defines a read-only interface for retrieving
//! [`InteractionRecord`] values. The ranking engine never writes through it;
//! like/dislike/snooze updates happen in the interaction layer.

use crate::record::InteractionRecord;

/// Read-only access to persisted interaction records.
///
/// Record order is the store's persisted order and is significant: when two
/// records carry the same venue id, consumers keep the first occurrence.
///
/// # Examples
///
/// ```rust
/// use lunchlist_core::{HistoryStore, InteractionRecord};
///
/// struct SingleRecord(InteractionRecord);
///
/// impl HistoryStore for SingleRecord {
///     fn records(&self) -> Box<dyn Iterator<Item = InteractionRecord> + Send + '_> {
///         Box::new(std::iter::once(self.0.clone()))
///     }
/// }
///
/// let record = InteractionRecord::new("cafe-luna").expect("valid id");
/// let store = SingleRecord(record.clone());
/// let found: Vec<_> = store.records().collect();
/// assert_eq!(found, vec![record]);
/// ```
pub trait HistoryStore {
    /// Return all persisted records in store order.
    fn records(&self) -> Box<dyn Iterator<Item = InteractionRecord> + Send + '_>;
}
