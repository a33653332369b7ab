use serde::{Deserialize, Serialize};

use super::column::ColumnId;

/// Task priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    Low,
    Medium,
    High,
    Urgent,
}

impl Priority {
    pub const ALL: [Priority; 4] = [
        Priority::Low,
        Priority::Medium,
        Priority::High,
        Priority::Urgent,
    ];

    /// Parse a priority name, case-insensitive
    pub fn parse(s: &str) -> Option<Priority> {
        match s.to_ascii_lowercase().as_str() {
            "low" => Some(Priority::Low),
            "medium" => Some(Priority::Medium),
            "high" => Some(Priority::High),
            "urgent" => Some(Priority::Urgent),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
            Priority::Urgent => "Urgent",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Priority filter for the board view: either everything or one level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PriorityFilter {
    #[default]
    All,
    Only(Priority),
}

impl PriorityFilter {
    /// Parse "all" or a priority name, case-insensitive
    pub fn parse(s: &str) -> Option<PriorityFilter> {
        if s.eq_ignore_ascii_case("all") {
            Some(PriorityFilter::All)
        } else {
            Priority::parse(s).map(PriorityFilter::Only)
        }
    }

    pub fn matches(self, priority: Priority) -> bool {
        match self {
            PriorityFilter::All => true,
            PriorityFilter::Only(p) => p == priority,
        }
    }
}

/// A card on the board. Belongs to exactly one project; the store
/// guarantees `project_id` always resolves while it holds the task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Opaque unique identifier, immutable
    pub id: String,
    /// Owning project
    pub project_id: String,
    /// Workflow column, the only field the move gesture touches
    pub column_id: ColumnId,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    /// Creation time, epoch milliseconds, immutable
    pub created_at: i64,
}

/// Caller-supplied fields for creating or editing a task
#[derive(Debug, Clone)]
pub struct TaskFields {
    pub title: String,
    pub description: String,
    pub priority: Priority,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_parse_is_case_insensitive() {
        assert_eq!(Priority::parse("urgent"), Some(Priority::Urgent));
        assert_eq!(Priority::parse("URGENT"), Some(Priority::Urgent));
        assert_eq!(Priority::parse("medium"), Some(Priority::Medium));
        assert_eq!(Priority::parse("critical"), None);
    }

    #[test]
    fn filter_parse_accepts_all_and_levels() {
        assert_eq!(PriorityFilter::parse("all"), Some(PriorityFilter::All));
        assert_eq!(PriorityFilter::parse("All"), Some(PriorityFilter::All));
        assert_eq!(
            PriorityFilter::parse("high"),
            Some(PriorityFilter::Only(Priority::High))
        );
        assert_eq!(PriorityFilter::parse("none"), None);
    }

    #[test]
    fn filter_all_matches_everything() {
        for p in Priority::ALL {
            assert!(PriorityFilter::All.matches(p));
        }
        assert!(PriorityFilter::Only(Priority::Low).matches(Priority::Low));
        assert!(!PriorityFilter::Only(Priority::Low).matches(Priority::High));
    }

    #[test]
    fn task_serde_uses_camel_case_wire_names() {
        let task = Task {
            id: "t1".into(),
            project_id: "p1".into(),
            column_id: ColumnId::Backlog,
            title: "Fix header".into(),
            description: String::new(),
            priority: Priority::High,
            created_at: 1700000000000,
        };
        let json = serde_json::to_string(&task).unwrap();
        assert!(json.contains("\"projectId\":\"p1\""));
        assert!(json.contains("\"columnId\":\"backlog\""));
        assert!(json.contains("\"createdAt\":1700000000000"));
        assert!(json.contains("\"priority\":\"High\""));

        let back: Task = serde_json::from_str(&json).unwrap();
        assert_eq!(back, task);
    }
}
