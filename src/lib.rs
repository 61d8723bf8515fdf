//! Weighted read-partition load balancer for a sharded task-list matching service.
//!
//! A task list can be split into N partitions to spread load; this crate picks which
//! partition a client reads from on every poll, biasing toward partitions the server has
//! reported as lightly loaded, and falls back to round robin whenever it doesn't yet have
//! a confident weighted answer (cold cache, a selector still mid-priming, or every weight
//! at zero).
//!
//! The three pieces, bottom-up:
//! - [`selector::WeightSelector`] — the probabilistic picker over a resizable weight vector.
//! - [`poller_selector::PollerWeightSelector`] — the same algorithm, shaped for picking a
//!   poller instead of a partition.
//! - [`balancer::WeightedLoadBalancer`] — the cache of selectors plus the feedback loop
//!   that turns server-returned load hints into weight updates.

pub mod balancer;
pub mod cache;
pub mod config;
pub mod error;
pub mod fallback;
pub mod key;
mod metrics;
pub mod partition;
pub mod poller_selector;
pub mod provider;
pub mod selector;
pub mod types;

pub use balancer::{calc_weight, WeightedLoadBalancer, DEFAULT_WEIGHT, QPS_SMOOTHING_ALPHA, QPS_SMOOTHING_THRESHOLD};
pub use cache::{MokaWeightCache, WeightCache};
pub use error::ConfigError;
pub use fallback::{LoadBalancer, RoundRobinBalancer};
pub use key::SelectorKey;
pub use poller_selector::PollerWeightSelector;
pub use provider::{PartitionConfigProvider, StaticPartitionConfigProvider};
pub use selector::{WeightSelector, NO_PICK};
pub use types::{LoadBalancerHints, TaskList, TaskListKind, TaskListType, TaskRequest};
