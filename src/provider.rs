//! The partition-count provider: tells callers how many read partitions a task list
//! currently has. Not a contract this crate owns — it only needs *a* provider to build
//! and test against, so it carries a simple mutable-at-runtime default.

use dashmap::DashMap;

use crate::key::SelectorKey;
use crate::types::TaskListType;

pub trait PartitionConfigProvider: Send + Sync {
    /// Current number of read partitions for `(domain, task_list, task_list_type)`. May
    /// change between calls as the task list is reconfigured.
    fn get_number_of_read_partitions(
        &self,
        domain: &str,
        task_list: &str,
        task_list_type: TaskListType,
    ) -> i32;
}

/// An in-memory provider backed by a concurrent map, defaulting unknown task lists to a
/// single partition. Production deployments would source this from the matching service's
/// dynamic config instead; this is the standalone stand-in the rest of the crate needs to
/// be buildable and testable.
pub struct StaticPartitionConfigProvider {
    counts: DashMap<SelectorKey, i32>,
    default_partitions: i32,
}

impl StaticPartitionConfigProvider {
    pub fn new(default_partitions: i32) -> Self {
        Self {
            counts: DashMap::new(),
            default_partitions,
        }
    }

    /// Simulate the matching service reconfiguring a task list's partition count.
    pub fn set_partitions(&self, domain: &str, task_list: &str, task_list_type: TaskListType, n: i32) {
        self.counts
            .insert(SelectorKey::new(domain, task_list, task_list_type), n);
    }
}

impl Default for StaticPartitionConfigProvider {
    fn default() -> Self {
        Self::new(1)
    }
}

impl PartitionConfigProvider for StaticPartitionConfigProvider {
    fn get_number_of_read_partitions(
        &self,
        domain: &str,
        task_list: &str,
        task_list_type: TaskListType,
    ) -> i32 {
        let key = SelectorKey::new(domain, task_list, task_list_type);
        self.counts
            .get(&key)
            .map(|v| *v)
            .unwrap_or(self.default_partitions)
    }
}
