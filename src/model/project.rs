use serde::{Deserialize, Serialize};

/// Kind of work a project covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ProjectType {
    /// Default, and the value assigned to legacy records that predate the field
    #[default]
    Website,
    App,
    Both,
}

impl ProjectType {
    /// Parse a project type name, case-insensitive
    pub fn parse(s: &str) -> Option<ProjectType> {
        match s.to_ascii_lowercase().as_str() {
            "website" => Some(ProjectType::Website),
            "app" => Some(ProjectType::App),
            "both" => Some(ProjectType::Both),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ProjectType::Website => "Website",
            ProjectType::App => "App",
            ProjectType::Both => "Both",
        }
    }
}

impl std::fmt::Display for ProjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A client project owning one board of tasks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Opaque unique identifier, immutable
    pub id: String,
    /// Display name, non-empty (callers validate before create/update)
    pub name: String,
    /// Client display name, may be empty
    pub client_name: String,
    /// Pre-formatted display string, e.g. "$ 5,000". Splitting it back
    /// into currency + amount is a presentation concern, not a data one.
    pub cost: String,
    pub timeline: String,
    /// Absent in records written before the field existed; defaults to
    /// Website at load time and is persisted on the next save.
    #[serde(default)]
    pub project_type: ProjectType,
    /// Creation time, epoch milliseconds, immutable
    pub created_at: i64,
}

/// Caller-supplied fields for creating or editing a project
#[derive(Debug, Clone)]
pub struct ProjectFields {
    pub name: String,
    pub client_name: String,
    pub cost: String,
    pub timeline: String,
    pub project_type: ProjectType,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_type_parse_is_case_insensitive() {
        assert_eq!(ProjectType::parse("website"), Some(ProjectType::Website));
        assert_eq!(ProjectType::parse("APP"), Some(ProjectType::App));
        assert_eq!(ProjectType::parse("Both"), Some(ProjectType::Both));
        assert_eq!(ProjectType::parse("mobile"), None);
    }

    #[test]
    fn legacy_record_without_type_defaults_to_website() {
        let json = r#"{
            "id": "abc",
            "name": "Old Project",
            "clientName": "Acme",
            "cost": "$ 1,200",
            "timeline": "3 Weeks",
            "createdAt": 1690000000000
        }"#;
        let project: Project = serde_json::from_str(json).unwrap();
        assert_eq!(project.project_type, ProjectType::Website);
        assert_eq!(project.name, "Old Project");
        assert_eq!(project.client_name, "Acme");
        assert_eq!(project.cost, "$ 1,200");
        assert_eq!(project.created_at, 1690000000000);
    }

    #[test]
    fn project_serde_round_trip() {
        let project = Project {
            id: "p1".into(),
            name: "Acme Site".into(),
            client_name: "Acme".into(),
            cost: "$ 5,000".into(),
            timeline: "4 Weeks".into(),
            project_type: ProjectType::Both,
            created_at: 1700000000000,
        };
        let json = serde_json::to_string(&project).unwrap();
        assert!(json.contains("\"clientName\":\"Acme\""));
        assert!(json.contains("\"projectType\":\"Both\""));
        let back: Project = serde_json::from_str(&json).unwrap();
        assert_eq!(back, project);
    }
}
