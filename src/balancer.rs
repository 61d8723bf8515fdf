//! The weighted load balancer: a cache of [`WeightSelector`]s keyed by
//! `(domain, task list, task list type)`, fed by server-returned load hints and backed by a
//! round-robin fallback for any state it can't yet make a weighted decision from.

use std::sync::Arc;

use crate::cache::{MokaWeightCache, WeightCache};
use crate::config::CacheConfig;
use crate::error::ConfigError;
use envconfig::Envconfig;
use crate::fallback::LoadBalancer;
use crate::key::SelectorKey;
use crate::metrics;
use crate::partition::{decode_update_partition_index, is_partitioned_name, partition_name};
use crate::provider::PartitionConfigProvider;
use crate::selector::{WeightSelector, NO_PICK};
use crate::types::{LoadBalancerHints, TaskListType, TaskRequest};

/// Default initial weight seeded for a partition before it has reported any load of its own.
pub const DEFAULT_WEIGHT: i64 = 100;
/// qps-to-weight smoothing factor.
pub const QPS_SMOOTHING_ALPHA: f64 = 0.01;
/// Below this qps, smoothing is suppressed entirely so idle partitions aren't favored.
pub const QPS_SMOOTHING_THRESHOLD: f64 = 0.01;

/// Derive an integer weight from a partition's reported backlog and request rate.
/// Backlog dominates, since draining backlog is the goal; `qps * α` is a small additive
/// smoother that keeps an actively-served, momentarily-empty partition from being starved
/// by a zero weight. Below the qps threshold the smoother is suppressed so truly idle
/// partitions aren't boosted above it.
pub fn calc_weight(hints: &LoadBalancerHints) -> i64 {
    let smoothing = if hints.rate_per_second > QPS_SMOOTHING_THRESHOLD {
        (hints.rate_per_second * QPS_SMOOTHING_ALPHA).ceil() as i64
    } else {
        0
    };
    (hints.backlog_count + smoothing).max(0)
}

pub struct WeightedLoadBalancer {
    cache: Arc<dyn WeightCache>,
    fallback_load_balancer: Arc<dyn LoadBalancer>,
    provider: Arc<dyn PartitionConfigProvider>,
}

impl WeightedLoadBalancer {
    pub fn new(
        fallback_load_balancer: Arc<dyn LoadBalancer>,
        provider: Arc<dyn PartitionConfigProvider>,
        cache: Arc<dyn WeightCache>,
    ) -> Self {
        Self {
            cache,
            fallback_load_balancer,
            provider,
        }
    }

    /// Build a balancer with a moka-backed cache sized from the environment.
    pub fn from_env(
        fallback_load_balancer: Arc<dyn LoadBalancer>,
        provider: Arc<dyn PartitionConfigProvider>,
    ) -> Result<Self, ConfigError> {
        let config = CacheConfig::init_from_env()?;
        Ok(Self::new(
            fallback_load_balancer,
            provider,
            Arc::new(MokaWeightCache::new(&config)),
        ))
    }

    /// Writes are always round-robin: the enqueuer has no load hint to react to yet.
    pub fn pick_write_partition(&self, task_list_type: TaskListType, req: &TaskRequest) -> String {
        self.fallback_load_balancer
            .pick_write_partition(task_list_type, req)
    }

    pub fn pick_read_partition(
        &self,
        task_list_type: TaskListType,
        req: &TaskRequest,
        forwarded_from: &str,
    ) -> String {
        let key = SelectorKey::new(&req.domain_uuid, &req.task_list.name, task_list_type);

        let Some(selector) = self.cache.get(&key) else {
            metrics::record_fallback("no_selector");
            tracing::trace!(
                domain = %key.domain_id,
                task_list = %key.task_list_name,
                "no weight selector cached, falling back to round robin"
            );
            return self
                .fallback_load_balancer
                .pick_read_partition(task_list_type, req, forwarded_from);
        };

        let (index, _cum) = selector.pick();
        if index == NO_PICK {
            metrics::record_fallback("unprimed");
            return self
                .fallback_load_balancer
                .pick_read_partition(task_list_type, req, forwarded_from);
        }

        partition_name(&req.task_list.name, index as usize)
    }

    pub fn update_weight(
        &self,
        task_list_type: TaskListType,
        req: &TaskRequest,
        partition: &str,
        hints: Option<&LoadBalancerHints>,
    ) {
        if req.task_list.is_sticky() {
            return;
        }
        if req.is_forwarded() {
            return;
        }
        if is_partitioned_name(&req.task_list.name) {
            return;
        }
        let Some(hints) = hints else {
            return;
        };
        let Some(mut index) = decode_update_partition_index(partition) else {
            tracing::debug!(partition, "update_weight partition name failed to parse, ignoring update");
            return;
        };

        let key = SelectorKey::new(&req.domain_uuid, &req.task_list.name, task_list_type);
        let n = self.provider.get_number_of_read_partitions(
            &req.domain_uuid,
            &req.task_list.name,
            task_list_type,
        );

        // n <= 0 is treated the same as n == 1: nothing left to balance.
        if n <= 1 {
            if self.cache.get(&key).is_some() {
                metrics::record_selector_deleted();
            }
            self.cache.delete(&key);
            return;
        }
        let n = n as usize;

        if index >= n {
            tracing::debug!(
                partition,
                n,
                "update_weight partition index out of range for current partition count, clamping"
            );
            index = n - 1;
        }

        let weight = calc_weight(hints);
        metrics::record_weight_update(weight);

        let selector = match self.cache.get(&key) {
            Some(selector) => selector,
            None => {
                metrics::record_selector_created();
                tracing::debug!(
                    domain = %key.domain_id,
                    task_list = %key.task_list_name,
                    n,
                    "creating weight selector"
                );
                self.cache
                    .put_if_not_exist(key, Arc::new(WeightSelector::new(n, DEFAULT_WEIGHT)))
            }
        };
        selector.update(n, index, weight);
    }
}
