//! Request and hint types the balancer reads. Wire encoding, RPC transport, and the rest of
//! the real request envelope are out of scope; this is the slice the balancer touches.

/// Whether a task list is pinned to a specific worker (never partitioned) or free to be
/// split across partitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskListKind {
    Normal,
    Sticky,
}

#[derive(Debug, Clone)]
pub struct TaskList {
    pub name: String,
    pub kind: TaskListKind,
}

impl TaskList {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: TaskListKind::Normal,
        }
    }

    pub fn sticky(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: TaskListKind::Sticky,
        }
    }

    pub fn is_sticky(&self) -> bool {
        self.kind == TaskListKind::Sticky
    }
}

/// The slice of a task-enqueue/poll request the balancer needs: which domain and task list
/// it targets, and whether it was forwarded here from another client on the caller's behalf.
#[derive(Debug, Clone)]
pub struct TaskRequest {
    pub domain_uuid: String,
    pub task_list: TaskList,
    pub forwarded_from: String,
}

impl TaskRequest {
    pub fn new(domain_uuid: impl Into<String>, task_list: TaskList) -> Self {
        Self {
            domain_uuid: domain_uuid.into(),
            task_list,
            forwarded_from: String::new(),
        }
    }

    pub fn is_forwarded(&self) -> bool {
        !self.forwarded_from.is_empty()
    }
}

/// Task list type as used by the matching service (e.g. decision vs. activity). Kept as a
/// plain integer — this crate has no opinion on what the values mean, only that they're part
/// of the selector cache key.
pub type TaskListType = i32;

/// Server-returned load signal for the partition that served the last request.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoadBalancerHints {
    pub backlog_count: i64,
    pub rate_per_second: f64,
}
