//! Partition name grammar: `root | "/__cadence_sys/" root "/" N`.
//!
//! Partition 0 of a task list shares its name; partitions 1.. are addressed by the
//! synthetic `/__cadence_sys/{root}/{n}` name. This module only does the textual
//! encode/decode — the matching service itself owns routing to the named partition.

pub const PARTITION_PREFIX: &str = "/__cadence_sys/";

/// Render the external name for partition `index` of task list `root`.
pub fn partition_name(root: &str, index: usize) -> String {
    if index == 0 {
        root.to_string()
    } else {
        format!("{PARTITION_PREFIX}{root}/{index}")
    }
}

/// True if `name` is already a partitioned (non-root) task list name.
pub fn is_partitioned_name(name: &str) -> bool {
    decode_partition_index(name).is_some()
}

/// Parse `name` as a partitioned name, returning its index if it matches the grammar.
/// `root` itself (no prefix) is not a match — callers that want "index 0 or explicit"
/// semantics should use `decode_update_partition_index`.
pub fn decode_partition_index(name: &str) -> Option<usize> {
    let rest = name.strip_prefix(PARTITION_PREFIX)?;
    let (_root, idx) = rest.rsplit_once('/')?;
    idx.parse().ok()
}

/// Decode a partition name as it appears in `update_weight`: a bare root name (no prefix)
/// is partition 0, a well-formed synthetic name decodes to its index, and anything else
/// carrying the prefix but not matching the grammar (e.g. a non-numeric trailing segment)
/// is unparseable and must be rejected rather than silently coerced to an index.
pub fn decode_update_partition_index(name: &str) -> Option<usize> {
    if !name.starts_with(PARTITION_PREFIX) {
        return Some(0);
    }
    decode_partition_index(name)
}
