//! Derived views over the task collection. Nothing here is persisted;
//! the board recomputes these on every render.

use indexmap::IndexMap;

use crate::model::column::{COLUMNS, ColumnId};
use crate::model::task::{PriorityFilter, Task};

/// The active project's tasks matching the search query and priority
/// filter, in the collection's insertion order.
///
/// The query match is a case-insensitive substring test against title or
/// description; an empty query matches everything. With no active
/// project this is empty.
pub fn visible_tasks<'a>(
    tasks: &'a [Task],
    active_project_id: Option<&str>,
    search_query: &str,
    priority_filter: PriorityFilter,
) -> Vec<&'a Task> {
    let Some(project_id) = active_project_id else {
        return Vec::new();
    };
    let needle = search_query.to_lowercase();
    tasks
        .iter()
        .filter(|t| t.project_id == project_id)
        .filter(|t| {
            needle.is_empty()
                || t.title.to_lowercase().contains(&needle)
                || t.description.to_lowercase().contains(&needle)
        })
        .filter(|t| priority_filter.matches(t.priority))
        .collect()
}

/// Partition an already-filtered task sequence into the six fixed
/// columns, in board order. Every column is present; an empty one maps
/// to an empty vec so the board always renders all six.
pub fn group_by_column(tasks: Vec<&Task>) -> IndexMap<ColumnId, Vec<&Task>> {
    let mut board: IndexMap<ColumnId, Vec<&Task>> =
        COLUMNS.iter().map(|&col| (col, Vec::new())).collect();
    for task in tasks {
        board[&task.column_id].push(task);
    }
    board
}
