//! Bounded, newest-first history of generated proverbs.

use std::collections::VecDeque;

use crate::proverb::ProverbRecord;

/// Maximum number of records kept.
pub const HISTORY_CAPACITY: usize = 10;

/// Recent generations, newest at index 0. Eviction is by insertion order only.
#[derive(Debug, Default, Clone)]
pub struct HistoryLedger {
    records: VecDeque<ProverbRecord>,
}

impl HistoryLedger {
    /// Empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self { records: VecDeque::with_capacity(HISTORY_CAPACITY + 1) }
    }

    /// Prepend a record, dropping the oldest once over capacity.
    pub fn append(&mut self, record: ProverbRecord) {
        self.records.push_front(record);
        self.records.truncate(HISTORY_CAPACITY);
    }

    /// Records, newest first.
    pub fn current(&self) -> impl ExactSizeIterator<Item = &ProverbRecord> {
        self.records.iter()
    }

    /// Record at `index` (0 = newest).
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ProverbRecord> {
        self.records.get(index)
    }

    /// Number of records held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether nothing has been generated yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
