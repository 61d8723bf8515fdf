//! The round-robin fallback balancer used whenever the weighted path can't produce a
//! valid choice. Not a contract this crate owns — callers may swap in their own — but
//! it must be side-effect-free from the caller's point of view and non-blocking.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use dashmap::DashMap;

use crate::key::SelectorKey;
use crate::partition::{is_partitioned_name, partition_name};
use crate::provider::PartitionConfigProvider;
use crate::types::{TaskListType, TaskRequest};

pub trait LoadBalancer: Send + Sync {
    fn pick_write_partition(&self, task_list_type: TaskListType, req: &TaskRequest) -> String;

    fn pick_read_partition(
        &self,
        task_list_type: TaskListType,
        req: &TaskRequest,
        forwarded_from: &str,
    ) -> String;
}

/// Round-robins across a task list's configured partitions. Sticky, already-partitioned,
/// and forwarded requests are passed through untouched — there's nothing to balance.
pub struct RoundRobinBalancer {
    provider: Arc<dyn PartitionConfigProvider>,
    counters: DashMap<SelectorKey, AtomicU64>,
}

impl RoundRobinBalancer {
    pub fn new(provider: Arc<dyn PartitionConfigProvider>) -> Self {
        Self {
            provider,
            counters: DashMap::new(),
        }
    }

    fn pick(&self, task_list_type: TaskListType, req: &TaskRequest, forwarded_from: &str) -> String {
        let name = &req.task_list.name;
        if req.task_list.is_sticky() || is_partitioned_name(name) || !forwarded_from.is_empty() {
            return name.clone();
        }

        let n = self
            .provider
            .get_number_of_read_partitions(&req.domain_uuid, name, task_list_type)
            .max(1) as u64;
        if n <= 1 {
            return name.clone();
        }

        let key = SelectorKey::new(&req.domain_uuid, name, task_list_type);
        let counter = self.counters.entry(key).or_insert_with(|| AtomicU64::new(0));
        let i = counter.fetch_add(1, Ordering::Relaxed) % n;
        partition_name(name, i as usize)
    }
}

impl LoadBalancer for RoundRobinBalancer {
    fn pick_write_partition(&self, task_list_type: TaskListType, req: &TaskRequest) -> String {
        self.pick(task_list_type, req, "")
    }

    fn pick_read_partition(
        &self,
        task_list_type: TaskListType,
        req: &TaskRequest,
        forwarded_from: &str,
    ) -> String {
        self.pick(task_list_type, req, forwarded_from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::StaticPartitionConfigProvider;
    use crate::types::TaskList;
    use std::collections::HashSet;

    fn req(name: &str) -> TaskRequest {
        TaskRequest::new("domainA", TaskList::new(name))
    }

    #[test]
    fn single_partition_task_list_always_picks_root_name() {
        let provider = Arc::new(StaticPartitionConfigProvider::default());
        let lb = RoundRobinBalancer::new(provider);
        for _ in 0..5 {
            assert_eq!(lb.pick_read_partition(0, &req("tl"), ""), "tl");
        }
    }

    #[test]
    fn cycles_through_all_partitions() {
        let provider = Arc::new(StaticPartitionConfigProvider::default());
        provider.set_partitions("domainA", "tl", 0, 3);
        let lb = RoundRobinBalancer::new(provider);

        let mut seen = HashSet::new();
        for _ in 0..9 {
            seen.insert(lb.pick_read_partition(0, &req("tl"), ""));
        }
        assert_eq!(
            seen,
            HashSet::from(["tl".to_string(), "/__cadence_sys/tl/1".to_string(), "/__cadence_sys/tl/2".to_string()])
        );
    }

    #[test]
    fn sticky_task_list_is_never_partitioned() {
        let provider = Arc::new(StaticPartitionConfigProvider::default());
        provider.set_partitions("domainA", "sticky-tl", 0, 4);
        let lb = RoundRobinBalancer::new(provider);
        let mut r = req("sticky-tl");
        r.task_list.kind = crate::types::TaskListKind::Sticky;
        assert_eq!(lb.pick_read_partition(0, &r, ""), "sticky-tl");
    }

    #[test]
    fn forwarded_request_is_passed_through() {
        let provider = Arc::new(StaticPartitionConfigProvider::default());
        provider.set_partitions("domainA", "tl", 0, 4);
        let lb = RoundRobinBalancer::new(provider);
        assert_eq!(lb.pick_read_partition(0, &req("tl"), "some-other-client"), "tl");
    }

    #[test]
    fn already_partitioned_name_is_passed_through() {
        let provider = Arc::new(StaticPartitionConfigProvider::default());
        let lb = RoundRobinBalancer::new(provider);
        assert_eq!(
            lb.pick_read_partition(0, &req("/__cadence_sys/tl/1"), ""),
            "/__cadence_sys/tl/1"
        );
    }
}
