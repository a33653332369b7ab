use crate::io::storage::Storage;
use crate::model::column::ColumnId;
use crate::store::Store;

/// The two-phase column-move gesture: some collaborator begins a move by
/// naming a task, and either completes it on a target column or cancels.
/// Which input device drives the phases is irrelevant; the store sees a
/// single `move_task` on completion and nothing at all on cancel.
#[derive(Debug, Clone, Default)]
pub struct MoveGesture {
    pending: Option<String>,
}

impl MoveGesture {
    pub fn new() -> MoveGesture {
        MoveGesture::default()
    }

    /// Signal intent to move a task. A second begin replaces the first.
    pub fn begin(&mut self, task_id: &str) {
        self.pending = Some(task_id.to_string());
    }

    /// The task id awaiting a drop, if any
    pub fn pending(&self) -> Option<&str> {
        self.pending.as_deref()
    }

    /// Abandon the gesture without mutating anything
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Complete the gesture on a target column. Returns true when a move
    /// was dispatched to the store. Dropping on the column the task
    /// already occupies is legal and leaves state unchanged.
    pub fn drop_on<S: Storage>(&mut self, store: &mut Store<S>, target: ColumnId) -> bool {
        match self.pending.take() {
            Some(task_id) => {
                store.move_task(&task_id, target);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::storage::MemoryStorage;
    use crate::model::project::{ProjectFields, ProjectType};
    use crate::model::task::{Priority, TaskFields};

    fn store_with_task() -> (Store<MemoryStorage>, String) {
        let mut store = Store::empty(MemoryStorage::new());
        let pid = store
            .create_project(ProjectFields {
                name: "A".into(),
                client_name: String::new(),
                cost: "$ 0".into(),
                timeline: String::new(),
                project_type: ProjectType::Website,
            })
            .unwrap()
            .id
            .clone();
        let tid = store
            .create_task(
                &pid,
                ColumnId::Backlog,
                TaskFields {
                    title: "t".into(),
                    description: String::new(),
                    priority: Priority::Medium,
                },
            )
            .unwrap()
            .id
            .clone();
        (store, tid)
    }

    #[test]
    fn begin_then_drop_moves_the_task() {
        let (mut store, tid) = store_with_task();
        let mut gesture = MoveGesture::new();
        gesture.begin(&tid);
        assert!(gesture.drop_on(&mut store, ColumnId::Review));
        assert_eq!(store.task(&tid).unwrap().column_id, ColumnId::Review);
        assert_eq!(gesture.pending(), None);
    }

    #[test]
    fn cancel_before_drop_mutates_nothing() {
        let (mut store, tid) = store_with_task();
        let before = store.tasks().to_vec();
        let mut gesture = MoveGesture::new();
        gesture.begin(&tid);
        gesture.cancel();
        assert!(!gesture.drop_on(&mut store, ColumnId::Review));
        assert_eq!(store.tasks(), before.as_slice());
    }

    #[test]
    fn drop_without_begin_is_inert() {
        let (mut store, _) = store_with_task();
        let mut gesture = MoveGesture::new();
        assert!(!gesture.drop_on(&mut store, ColumnId::Completed));
    }

    #[test]
    fn drop_on_occupied_column_is_idempotent() {
        let (mut store, tid) = store_with_task();
        let before = store.tasks().to_vec();
        let mut gesture = MoveGesture::new();
        gesture.begin(&tid);
        assert!(gesture.drop_on(&mut store, ColumnId::Backlog));
        assert_eq!(store.tasks(), before.as_slice());
    }

    #[test]
    fn second_begin_replaces_the_first() {
        let (mut store, tid) = store_with_task();
        let mut gesture = MoveGesture::new();
        gesture.begin("other");
        gesture.begin(&tid);
        gesture.drop_on(&mut store, ColumnId::Changes);
        assert_eq!(store.task(&tid).unwrap().column_id, ColumnId::Changes);
    }
}
