pub mod gesture;

pub use gesture::MoveGesture;

use chrono::Utc;
use indexmap::IndexMap;
use uuid::Uuid;

use crate::io::storage::{
    Storage, load_active_project, load_projects, load_tasks, save_active_project, save_projects,
    save_tasks,
};
use crate::model::column::ColumnId;
use crate::model::project::{Project, ProjectFields, ProjectType};
use crate::model::task::{Priority, PriorityFilter, Task, TaskFields};
use crate::query;

/// Generate an opaque entity id: a 128-bit random token
fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// Current wall-clock time in epoch milliseconds
fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}

/// The authoritative in-memory collections, with persistence through an
/// injected storage backend. Every mutation saves the affected key(s)
/// immediately; the three keys are not written as a transaction, so
/// `load` re-validates what it finds (see [`Store::load`]).
///
/// No operation returns an error: invalid input (empty required field,
/// unknown id) is a silent no-op, matching the caller contract that the
/// UI layer pre-validates.
#[derive(Debug)]
pub struct Store<S: Storage> {
    storage: S,
    projects: Vec<Project>,
    tasks: Vec<Task>,
    active_project_id: Option<String>,
    search_query: String,
    priority_filter: PriorityFilter,
}

impl<S: Storage> Store<S> {
    /// Rehydrate a store from storage.
    ///
    /// The resumed active id is validated against the loaded projects
    /// independently of how the tasks key fared, and tasks whose project
    /// no longer exists are dropped, so a crash between per-key saves
    /// cannot leave the store inconsistent. On a true first run (no
    /// projects key at all) the store seeds a demo project with two
    /// tasks so the board is never empty.
    pub fn load(storage: S) -> Store<S> {
        let mut store = Store {
            storage,
            projects: Vec::new(),
            tasks: Vec::new(),
            active_project_id: None,
            search_query: String::new(),
            priority_filter: PriorityFilter::All,
        };

        match load_projects(&store.storage) {
            Some(projects) => {
                store.projects = projects;
                store.tasks = load_tasks(&store.storage).unwrap_or_default();
                // Cascade-delete may have reached disk for one key only
                store
                    .tasks
                    .retain(|t| store.projects.iter().any(|p| p.id == t.project_id));

                if !store.projects.is_empty() {
                    let stored = load_active_project(&store.storage);
                    let valid = stored
                        .filter(|id| store.projects.iter().any(|p| p.id == *id))
                        .unwrap_or_else(|| store.projects[0].id.clone());
                    store.active_project_id = Some(valid);
                }
            }
            None => store.seed_demo(),
        }

        store
    }

    /// Seed the first-run demo project and tasks, and persist them
    fn seed_demo(&mut self) {
        let demo_id = new_id();
        self.projects.push(Project {
            id: demo_id.clone(),
            name: "Portfolio Website".into(),
            client_name: "Self".into(),
            cost: "$ 0".into(),
            timeline: "2 Weeks".into(),
            project_type: ProjectType::Website,
            created_at: now_ms(),
        });
        self.tasks.push(Task {
            id: new_id(),
            project_id: demo_id.clone(),
            column_id: ColumnId::Backlog,
            title: "Design Mockups".into(),
            description: "Create Figma designs for homepage".into(),
            priority: Priority::High,
            created_at: now_ms(),
        });
        self.tasks.push(Task {
            id: new_id(),
            project_id: demo_id.clone(),
            column_id: ColumnId::Resources,
            title: "Hosting Credentials".into(),
            description: "Vercel login info".into(),
            priority: Priority::Urgent,
            created_at: now_ms(),
        });
        self.active_project_id = Some(demo_id);

        save_projects(&mut self.storage, &self.projects);
        save_tasks(&mut self.storage, &self.tasks);
        save_active_project(&mut self.storage, self.active_project_id.as_deref());
    }

    // -----------------------------------------------------------------------
    // Projects
    // -----------------------------------------------------------------------

    /// Create a project and make it active. Returns None (and changes
    /// nothing) when `name` is empty.
    pub fn create_project(&mut self, fields: ProjectFields) -> Option<&Project> {
        if fields.name.is_empty() {
            return None;
        }
        let project = Project {
            id: new_id(),
            name: fields.name,
            client_name: fields.client_name,
            cost: fields.cost,
            timeline: fields.timeline,
            project_type: fields.project_type,
            created_at: now_ms(),
        };
        self.active_project_id = Some(project.id.clone());
        self.reset_filters();
        self.projects.push(project);

        save_projects(&mut self.storage, &self.projects);
        save_active_project(&mut self.storage, self.active_project_id.as_deref());
        self.projects.last()
    }

    /// Replace a project's mutable fields. Unknown id or empty name is a
    /// no-op; identity and creation time never change.
    pub fn update_project(&mut self, id: &str, fields: ProjectFields) {
        if fields.name.is_empty() {
            return;
        }
        let Some(project) = self.projects.iter_mut().find(|p| p.id == id) else {
            return;
        };
        project.name = fields.name;
        project.client_name = fields.client_name;
        project.cost = fields.cost;
        project.timeline = fields.timeline;
        project.project_type = fields.project_type;

        save_projects(&mut self.storage, &self.projects);
    }

    /// Delete a project and every task that references it. If the
    /// deleted project was active, the first remaining project becomes
    /// active (or none, when the collection is now empty).
    pub fn delete_project(&mut self, id: &str) {
        let before = self.projects.len();
        self.projects.retain(|p| p.id != id);
        if self.projects.len() == before {
            return;
        }

        self.tasks.retain(|t| t.project_id != id);

        if self.active_project_id.as_deref() == Some(id) {
            self.active_project_id = self.projects.first().map(|p| p.id.clone());
            self.reset_filters();
        }

        save_projects(&mut self.storage, &self.projects);
        save_tasks(&mut self.storage, &self.tasks);
        save_active_project(&mut self.storage, self.active_project_id.as_deref());
    }

    /// Set the active project id. The id is not validated here; a board
    /// view over an id that doesn't resolve derives "no active project".
    /// Switching resets the search/priority filters.
    pub fn set_active_project(&mut self, id: &str) {
        if self.active_project_id.as_deref() == Some(id) {
            return;
        }
        self.active_project_id = Some(id.to_string());
        self.reset_filters();
        save_active_project(&mut self.storage, self.active_project_id.as_deref());
    }

    // -----------------------------------------------------------------------
    // Tasks
    // -----------------------------------------------------------------------

    /// Create a task in a column of a project. Returns None (and changes
    /// nothing) when `title` is empty or the project doesn't exist.
    pub fn create_task(
        &mut self,
        project_id: &str,
        column_id: ColumnId,
        fields: TaskFields,
    ) -> Option<&Task> {
        if fields.title.is_empty() || !self.projects.iter().any(|p| p.id == project_id) {
            return None;
        }
        self.tasks.push(Task {
            id: new_id(),
            project_id: project_id.to_string(),
            column_id,
            title: fields.title,
            description: fields.description,
            priority: fields.priority,
            created_at: now_ms(),
        });
        save_tasks(&mut self.storage, &self.tasks);
        self.tasks.last()
    }

    /// Replace a task's title/description/priority. Unknown id or empty
    /// title is a no-op.
    pub fn update_task(&mut self, id: &str, fields: TaskFields) {
        if fields.title.is_empty() {
            return;
        }
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            return;
        };
        task.title = fields.title;
        task.description = fields.description;
        task.priority = fields.priority;

        save_tasks(&mut self.storage, &self.tasks);
    }

    /// Delete a task. Unknown id is a no-op.
    pub fn delete_task(&mut self, id: &str) {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        if self.tasks.len() != before {
            save_tasks(&mut self.storage, &self.tasks);
        }
    }

    /// Move a task to a column. The sole transition the board gesture
    /// performs; moving to the column it already occupies is a legal
    /// no-op, and position within the new column is derived from
    /// creation order, never stored.
    pub fn move_task(&mut self, id: &str, target: ColumnId) {
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            return;
        };
        if task.column_id == target {
            return;
        }
        task.column_id = target;
        save_tasks(&mut self.storage, &self.tasks);
    }

    // -----------------------------------------------------------------------
    // Filters and derived views
    // -----------------------------------------------------------------------

    fn reset_filters(&mut self) {
        self.search_query.clear();
        self.priority_filter = PriorityFilter::All;
    }

    /// Set the free-text search query (never persisted)
    pub fn set_search_query(&mut self, query: &str) {
        self.search_query = query.to_string();
    }

    /// Set the priority filter (never persisted)
    pub fn set_priority_filter(&mut self, filter: PriorityFilter) {
        self.priority_filter = filter;
    }

    /// The active project's tasks under the current filters, in
    /// insertion order
    pub fn visible_tasks(&self) -> Vec<&Task> {
        query::visible_tasks(
            &self.tasks,
            self.active_project_id.as_deref(),
            &self.search_query,
            self.priority_filter,
        )
    }

    /// The filtered board: all six columns in order, empty ones included
    pub fn board(&self) -> IndexMap<ColumnId, Vec<&Task>> {
        query::group_by_column(self.visible_tasks())
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn task(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn active_project_id(&self) -> Option<&str> {
        self.active_project_id.as_deref()
    }

    /// The active project, or None when no project resolves
    pub fn active_project(&self) -> Option<&Project> {
        self.project(self.active_project_id.as_deref()?)
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn priority_filter(&self) -> PriorityFilter {
        self.priority_filter
    }

    /// The underlying storage (the session flag lives beside the core keys)
    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }
}

impl<S: Storage> Store<S> {
    /// Build an empty store over existing storage without the first-run
    /// seed. Test helper; `load` is the normal entry point.
    #[cfg(test)]
    pub(crate) fn empty(storage: S) -> Store<S> {
        Store {
            storage,
            projects: Vec::new(),
            tasks: Vec::new(),
            active_project_id: None,
            search_query: String::new(),
            priority_filter: PriorityFilter::All,
        }
    }
}
