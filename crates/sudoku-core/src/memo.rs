//! Per-`Grid` bounded LRU cache for candidate queries.
//!
//! Keyed by `(CandidateLayer, Option<Position>)` — `None` for a whole-grid
//! enumeration, `Some(pos)` for a per-cell query. Capacity is
//! `|Layers| * N^2 + 1`, computed from the owning grid's side at
//! construction. Never shared across distinct `Grid`s: see `Grid::clone`,
//! which always allocates a fresh, empty cache.

use std::collections::VecDeque;

use crate::{CandidateLayer, DigitSet, Position};

type Key = (CandidateLayer, Option<Position>);

#[derive(Debug, Clone, Default)]
pub(crate) struct MemoCache {
    capacity: usize,
    // Linear scan is fine: capacity is at most 6 * 81 + 1, and entries are
    // cheap `Copy` values. A `HashMap` would need the same LRU bookkeeping
    // anyway, just with more code.
    entries: VecDeque<(Key, DigitSet)>,
}

impl MemoCache {
    pub(crate) fn new(side: u8) -> Self {
        let capacity = CandidateLayer::ALL.len() * usize::from(side) * usize::from(side) + 1;
        Self {
            capacity,
            entries: VecDeque::with_capacity(capacity),
        }
    }

    pub(crate) fn get(&mut self, key: Key) -> Option<DigitSet> {
        let index = self.entries.iter().position(|(k, _)| *k == key)?;
        let (key, value) = self.entries.remove(index).expect("index just found");
        self.entries.push_back((key, value));
        Some(value)
    }

    pub(crate) fn insert(&mut self, key: Key, value: DigitSet) {
        if let Some(index) = self.entries.iter().position(|(k, _)| *k == key) {
            self.entries.remove(index);
        } else if self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back((key, value));
    }
}
