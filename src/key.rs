use crate::types::TaskListType;

/// Cache key for a weight selector: `taskListName` is always the logical (root) name,
/// never a synthetic per-partition name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SelectorKey {
    pub domain_id: String,
    pub task_list_name: String,
    pub task_list_type: TaskListType,
}

impl SelectorKey {
    pub fn new(
        domain_id: impl Into<String>,
        task_list_name: impl Into<String>,
        task_list_type: TaskListType,
    ) -> Self {
        Self {
            domain_id: domain_id.into(),
            task_list_name: task_list_name.into(),
            task_list_type,
        }
    }
}
