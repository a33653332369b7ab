use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::Serialize;

use crate::model::column::{COLUMNS, ColumnId};
use crate::model::project::Project;
use crate::model::task::Task;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct ProjectJson<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub client: &'a str,
    pub cost: &'a str,
    pub timeline: &'a str,
    #[serde(rename = "type")]
    pub project_type: &'a str,
    pub active: bool,
}

#[derive(Serialize)]
pub struct TaskJson<'a> {
    pub id: &'a str,
    pub column: &'static str,
    pub title: &'a str,
    #[serde(skip_serializing_if = "str::is_empty")]
    pub description: &'a str,
    pub priority: &'static str,
    pub created: String,
}

#[derive(Serialize)]
pub struct BoardJson<'a> {
    pub project: &'a str,
    pub columns: Vec<ColumnJson<'a>>,
}

#[derive(Serialize)]
pub struct ColumnJson<'a> {
    pub id: &'static str,
    pub title: &'static str,
    pub tasks: Vec<TaskJson<'a>>,
}

pub fn project_json<'a>(project: &'a Project, active: bool) -> ProjectJson<'a> {
    ProjectJson {
        id: &project.id,
        name: &project.name,
        client: &project.client_name,
        cost: &project.cost,
        timeline: &project.timeline,
        project_type: project.project_type.name(),
        active,
    }
}

pub fn task_json<'a>(task: &'a Task) -> TaskJson<'a> {
    TaskJson {
        id: &task.id,
        column: task.column_id.key(),
        title: &task.title,
        description: &task.description,
        priority: task.priority.name(),
        created: format_date(task.created_at),
    }
}

pub fn board_json<'a>(
    project: &'a Project,
    board: &'a IndexMap<ColumnId, Vec<&'a Task>>,
) -> BoardJson<'a> {
    BoardJson {
        project: &project.name,
        columns: COLUMNS
            .iter()
            .map(|col| ColumnJson {
                id: col.key(),
                title: col.title(),
                tasks: board
                    .get(col)
                    .map(|tasks| tasks.iter().map(|t| task_json(t)).collect())
                    .unwrap_or_default(),
            })
            .collect(),
    }
}

pub fn print_json<T: Serialize>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}

// ---------------------------------------------------------------------------
// Text output
// ---------------------------------------------------------------------------

/// First segment of an id, enough to reference entities on the CLI
pub fn short_id(id: &str) -> &str {
    id.split('-').next().unwrap_or(id)
}

/// Render an epoch-millisecond timestamp as a date
pub fn format_date(millis: i64) -> String {
    match DateTime::<Utc>::from_timestamp_millis(millis) {
        Some(dt) => dt.format("%Y-%m-%d").to_string(),
        None => "-".to_string(),
    }
}

pub fn print_project_line(project: &Project, active: bool) {
    let marker = if active { "*" } else { " " };
    println!(
        "{} {}  {} ({})  {} / {} / {}",
        marker,
        short_id(&project.id),
        project.name,
        project.project_type,
        project.client_name,
        project.cost,
        project.timeline,
    );
}

pub fn print_task_line(task: &Task) {
    println!(
        "  [{}] {}  {}",
        task.priority,
        short_id(&task.id),
        task.title,
    );
}

pub fn print_board(project: &Project, board: &IndexMap<ColumnId, Vec<&Task>>) {
    println!("{} board", project.name);
    for col in COLUMNS {
        let tasks = board.get(&col).map(Vec::as_slice).unwrap_or(&[]);
        println!();
        println!("{} ({})", col.title(), tasks.len());
        if tasks.is_empty() {
            println!("  (empty)");
        }
        for task in tasks {
            print_task_line(task);
        }
    }
}

pub fn print_task_detail(task: &Task) {
    println!("{}", task.title);
    println!("  id:       {}", task.id);
    println!("  column:   {}", task.column_id);
    println!("  priority: {}", task.priority);
    println!("  created:  {}", format_date(task.created_at));
    if task.description.is_empty() {
        println!("  (no description)");
    } else {
        println!();
        println!("  {}", task.description);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_id_takes_first_uuid_segment() {
        assert_eq!(short_id("123e4567-e89b-12d3-a456-426614174000"), "123e4567");
        assert_eq!(short_id("plain"), "plain");
    }

    #[test]
    fn format_date_renders_epoch_millis() {
        assert_eq!(format_date(0), "1970-01-01");
        assert_eq!(format_date(1700000000000), "2023-11-14");
    }
}
