//! The probabilistic picker over a variable-width weight vector.
//!
//! `update` and `pick` are the only two operations, both non-blocking and both held
//! under a single `parking_lot::RwLock` per selector: `update` resizes and rewrites the
//! cumulative-sum table under the writer side, `pick` draws under the reader side. There
//! are no suspension points in either, so the lock is never held across an await.

use parking_lot::RwLock;
use rand::Rng;

/// Sentinel returned by [`WeightSelector::pick`] when the selector cannot produce a
/// weighted choice: it's empty, every weight is zero, or at least one index has never
/// been initialized since the last resize.
pub const NO_PICK: i64 = -1;

struct Inner {
    weights: Vec<i64>,
    initialized: Vec<bool>,
    cum: Vec<i64>,
    total: i64,
    default_weight: i64,
}

impl Inner {
    fn new(n: usize, default_weight: i64) -> Self {
        Self {
            weights: vec![0; n],
            initialized: vec![false; n],
            cum: vec![0; n],
            total: 0,
            default_weight,
        }
    }

    fn resize(&mut self, new_n: usize) {
        match new_n.cmp(&self.weights.len()) {
            std::cmp::Ordering::Greater => {
                self.weights.resize(new_n, self.default_weight);
                self.initialized.resize(new_n, true);
                self.cum.resize(new_n, 0);
            }
            std::cmp::Ordering::Less => {
                self.weights.truncate(new_n);
                self.initialized.truncate(new_n);
                self.cum.truncate(new_n);
            }
            std::cmp::Ordering::Equal => {}
        }
    }

    fn recompute_cum(&mut self) {
        let mut running = 0i64;
        for (c, w) in self.cum.iter_mut().zip(self.weights.iter()) {
            running += w;
            *c = running;
        }
        self.total = self.cum.last().copied().unwrap_or(0);
    }
}

/// A resizable vector of non-negative integer weights, picked from with probability
/// proportional to weight.
pub struct WeightSelector {
    inner: RwLock<Inner>,
}

impl WeightSelector {
    /// Allocate a selector of length `n`, all weights zero and uninitialized. `default_weight`
    /// seeds any index introduced later by a growing `update`.
    pub fn new(n: usize, default_weight: i64) -> Self {
        Self {
            inner: RwLock::new(Inner::new(n, default_weight)),
        }
    }

    /// Resize to `new_n` if needed, set `weights[i] = w`, mark `i` initialized, and
    /// recompute the cumulative-sum table. Growing seeds new positions at `default_weight`
    /// and marks them initialized; shrinking drops the trailing positions outright.
    pub fn update(&self, new_n: usize, i: usize, w: i64) {
        let mut inner = self.inner.write();
        if new_n != inner.weights.len() {
            inner.resize(new_n);
        }
        inner.weights[i] = w;
        inner.initialized[i] = true;
        inner.recompute_cum();
    }

    /// Draw an index with probability proportional to its weight, or [`NO_PICK`] if the
    /// selector is empty, fully zero, or still partially uninitialized. The cumulative-sum
    /// snapshot used for the draw (or the current one, on a non-pick) is always returned
    /// alongside, for observability and tests.
    pub fn pick(&self) -> (i64, Vec<i64>) {
        let inner = self.inner.read();
        if inner.weights.is_empty() || inner.total == 0 || inner.initialized.contains(&false) {
            return (NO_PICK, inner.cum.clone());
        }
        let r = rand::thread_rng().gen_range(0..inner.total);
        let idx = inner.cum.partition_point(|&c| c <= r);
        (idx as i64, inner.cum.clone())
    }

    /// Current logical length.
    pub fn len(&self) -> usize {
        self.inner.read().weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[cfg(test)]
    fn weights(&self) -> Vec<i64> {
        self.inner.read().weights.clone()
    }
}
