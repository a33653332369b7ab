use serde::{Deserialize, Serialize};

/// Workflow column on the board. The set is fixed: there are no
/// user-defined columns, and every board renders all six.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnId {
    Resources,
    Backlog,
    Development,
    Review,
    Changes,
    Completed,
}

impl ColumnId {
    /// Parse a column from its storage/CLI name
    pub fn from_key(s: &str) -> Option<ColumnId> {
        match s {
            "resources" => Some(ColumnId::Resources),
            "backlog" => Some(ColumnId::Backlog),
            "development" => Some(ColumnId::Development),
            "review" => Some(ColumnId::Review),
            "changes" => Some(ColumnId::Changes),
            "completed" => Some(ColumnId::Completed),
            _ => None,
        }
    }

    /// The storage/CLI name (matches the serde form)
    pub fn key(self) -> &'static str {
        match self {
            ColumnId::Resources => "resources",
            ColumnId::Backlog => "backlog",
            ColumnId::Development => "development",
            ColumnId::Review => "review",
            ColumnId::Changes => "changes",
            ColumnId::Completed => "completed",
        }
    }

    /// The display title shown above the column
    pub fn title(self) -> &'static str {
        match self {
            ColumnId::Resources => "Resources & Access",
            ColumnId::Backlog => "Backlog",
            ColumnId::Development => "In Development",
            ColumnId::Review => "Review",
            ColumnId::Changes => "Changes Needed",
            ColumnId::Completed => "Completed",
        }
    }
}

impl std::fmt::Display for ColumnId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}

/// The six columns in board order
pub const COLUMNS: [ColumnId; 6] = [
    ColumnId::Resources,
    ColumnId::Backlog,
    ColumnId::Development,
    ColumnId::Review,
    ColumnId::Changes,
    ColumnId::Completed,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_round_trips_every_column() {
        for col in COLUMNS {
            assert_eq!(ColumnId::from_key(col.key()), Some(col));
        }
    }

    #[test]
    fn from_key_rejects_unknown() {
        assert_eq!(ColumnId::from_key("doing"), None);
        assert_eq!(ColumnId::from_key("Backlog"), None);
    }

    #[test]
    fn serde_uses_lowercase_keys() {
        let json = serde_json::to_string(&ColumnId::Development).unwrap();
        assert_eq!(json, "\"development\"");
        let col: ColumnId = serde_json::from_str("\"changes\"").unwrap();
        assert_eq!(col, ColumnId::Changes);
    }
}
