//! Picks a backend poller index in proportion to recent activity.
//!
//! Same algorithm as [`WeightSelector`](crate::selector::WeightSelector); kept as a distinct
//! type because its size and lifecycle track registered pollers rather than task-list
//! partitions, and because callers shouldn't be able to mix up the two cache keys at the
//! type level.

use crate::selector::WeightSelector;

pub use crate::selector::NO_PICK as NO_POLLER;

pub struct PollerWeightSelector {
    inner: WeightSelector,
}

impl PollerWeightSelector {
    /// `n` is the number of currently registered pollers; `default_weight` seeds a newly
    /// registered poller before it has reported any activity of its own.
    pub fn new(n: usize, default_weight: i64) -> Self {
        Self {
            inner: WeightSelector::new(n, default_weight),
        }
    }

    pub fn update(&self, new_n: usize, i: usize, w: i64) {
        self.inner.update(new_n, i, w);
    }

    pub fn pick(&self) -> (i64, Vec<i64>) {
        self.inner.pick()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
