//! Test-only, in-memory `HistoryStore` implementation used by unit and
//! behaviour tests.

use crate::history::HistoryStore;
use crate::record::InteractionRecord;

/// In-memory `HistoryStore` implementation used in tests.
///
/// Records are returned in insertion order, matching the persisted-order
/// contract of [`HistoryStore`].
#[derive(Default, Debug)]
pub struct MemoryHistory {
    records: Vec<InteractionRecord>,
}

impl MemoryHistory {
    /// Create a store containing a single record.
    #[must_use]
    pub fn with_record(record: InteractionRecord) -> Self {
        Self::with_records(std::iter::once(record))
    }

    /// Create a store from a collection of records.
    #[must_use]
    pub fn with_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = InteractionRecord>,
    {
        Self {
            records: records.into_iter().collect(),
        }
    }
}

impl HistoryStore for MemoryHistory {
    fn records(&self) -> Box<dyn Iterator<Item = InteractionRecord> + Send + '_> {
        Box::new(self.records.iter().cloned())
    }
}
