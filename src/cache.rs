//! The bounded, TTL-evicting map from selector key to weight selector. The contract only
//! requires `get`/`put_if_not_exist`/`delete` to be atomic — but this crate carries a
//! concrete moka-backed implementation so it's buildable and testable standalone.

use std::sync::Arc;
use std::time::Duration;

use moka::sync::Cache as MokaCache;

use crate::config::CacheConfig;
use crate::key::SelectorKey;
use crate::selector::WeightSelector;

pub trait WeightCache: Send + Sync {
    fn get(&self, key: &SelectorKey) -> Option<Arc<WeightSelector>>;

    /// Insert `value` under `key` unless an entry already exists, returning whichever
    /// selector is now authoritative. Concurrent callers racing to create the same key
    /// must all observe the same winner; the losers' freshly-built selectors are dropped.
    fn put_if_not_exist(&self, key: SelectorKey, value: Arc<WeightSelector>) -> Arc<WeightSelector>;

    fn delete(&self, key: &SelectorKey);
}

/// Moka's `get_with` computes its init closure at most once per key even under concurrent
/// callers, which is exactly the single-flight semantics `put_if_not_exist` needs: the
/// closure here is `FnOnce` and simply hands back the caller's already-built selector, but
/// moka only ever invokes it for the first caller to reach a given key.
pub struct MokaWeightCache {
    cache: MokaCache<SelectorKey, Arc<WeightSelector>>,
}

impl MokaWeightCache {
    pub fn new(config: &CacheConfig) -> Self {
        let cache = MokaCache::builder()
            .max_capacity(config.max_capacity)
            .time_to_live(Duration::from_secs(config.ttl_seconds))
            .build();
        Self { cache }
    }
}

impl WeightCache for MokaWeightCache {
    fn get(&self, key: &SelectorKey) -> Option<Arc<WeightSelector>> {
        self.cache.get(key)
    }

    fn put_if_not_exist(&self, key: SelectorKey, value: Arc<WeightSelector>) -> Arc<WeightSelector> {
        self.cache.get_with(key, move || value)
    }

    fn delete(&self, key: &SelectorKey) {
        self.cache.invalidate(key);
    }
}
