use rustc_hash::FxHashSet;

/// Every distinct row-0 total observed across a run, in first-seen
/// order. Grows as needed; the reachable space is tiny anyway (three
/// distinct digits from 1-9 sum to at most 24).
#[derive(Debug, Default, Clone)]
pub struct TotalsTracker {
    seen: FxHashSet<u32>,
    order: Vec<u32>,
}

impl TotalsTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `total` unless it was already recorded.
    pub fn record(&mut self, total: u32) {
        if self.seen.insert(total) {
            self.order.push(total);
        }
    }

    #[must_use]
    pub fn all(&self) -> &[u32] {
        &self.order
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.order.len()
    }
}
