//! Task List State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. All mutation goes
//! through the local-patch methods on `SynchronizerState`, which know nothing
//! about the network and are tested on their own.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{AppInfo, Task, TaskId};

/// Everything the task list view renders
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct SynchronizerState {
    /// Tasks in arrival order: list order, then append order
    pub tasks: Vec<Task>,
    /// Unsubmitted text of the new-task input
    pub pending_title: String,
    /// True while a task list request is in flight
    pub is_loading: bool,
    /// Backend metadata, absent until fetched
    pub app_info: Option<AppInfo>,
}

impl SynchronizerState {
    /// Full replace with the server's list
    pub fn replace_tasks(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
    }

    /// Append a server-confirmed task and clear the input
    pub fn append_created(&mut self, task: Task) {
        self.tasks.push(task);
        self.pending_title.clear();
    }

    /// Set `completed` on every task with `id`; unknown ids are ignored
    pub fn set_completed(&mut self, id: TaskId, completed: bool) {
        self.tasks
            .iter_mut()
            .filter(|task| task.id == id)
            .for_each(|task| task.completed = completed);
    }

    /// Drop every task with `id`, keeping the order of the rest
    pub fn remove_task(&mut self, id: TaskId) {
        self.tasks.retain(|task| task.id != id);
    }

    pub fn set_pending_title(&mut self, title: String) {
        self.pending_title = title;
    }

    pub fn set_app_info(&mut self, info: AppInfo) {
        self.app_info = Some(info);
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.is_loading = loading;
    }
}

/// Type alias for the store
pub type AppStore = Store<SynchronizerState>;

/// Somewhere the synchronizer can keep its state
///
/// The UI uses the reactive store; headless callers and tests use
/// `Rc<RefCell<SynchronizerState>>`.
pub trait StateCell {
    fn patch(&self, f: impl FnOnce(&mut SynchronizerState));

    fn read_with<T>(&self, f: impl FnOnce(&SynchronizerState) -> T) -> T;

    fn snapshot(&self) -> SynchronizerState {
        self.read_with(SynchronizerState::clone)
    }
}

impl StateCell for AppStore {
    fn patch(&self, f: impl FnOnce(&mut SynchronizerState)) {
        self.update(f);
    }

    fn read_with<T>(&self, f: impl FnOnce(&SynchronizerState) -> T) -> T {
        self.with_untracked(f)
    }
}

impl StateCell for Rc<RefCell<SynchronizerState>> {
    fn patch(&self, f: impl FnOnce(&mut SynchronizerState)) {
        f(&mut self.borrow_mut());
    }

    fn read_with<T>(&self, f: impl FnOnce(&SynchronizerState) -> T) -> T {
        f(&self.borrow())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: TaskId, title: &str, completed: bool) -> Task {
        Task {
            id,
            title: title.to_string(),
            completed,
            created_at: "2025-01-01T10:00:00Z".to_string(),
        }
    }

    fn state_with(tasks: Vec<Task>) -> SynchronizerState {
        SynchronizerState {
            tasks,
            ..Default::default()
        }
    }

    #[test]
    fn test_initial_state() {
        let state = SynchronizerState::default();
        assert!(state.tasks.is_empty());
        assert!(state.pending_title.is_empty());
        assert!(!state.is_loading);
        assert!(state.app_info.is_none());
    }

    #[test]
    fn test_replace_discards_local_tasks() {
        let mut state = state_with(vec![task(9, "Stale", false)]);
        state.replace_tasks(vec![task(2, "B", false), task(1, "A", true)]);

        let ids: Vec<_> = state.tasks.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn test_append_created_clears_input() {
        let mut state = state_with(vec![task(1, "A", false)]);
        state.set_pending_title("Buy milk".to_string());

        state.append_created(task(2, "Buy milk", false));

        assert_eq!(state.tasks.last().map(|t| t.id), Some(2));
        assert!(state.pending_title.is_empty());
    }

    #[test]
    fn test_set_completed_touches_only_match() {
        let mut state = state_with(vec![task(1, "A", false), task(2, "B", false), task(3, "C", true)]);
        let before = state.clone();

        state.set_completed(2, true);

        assert!(state.tasks[1].completed);
        assert_eq!(state.tasks[0], before.tasks[0]);
        assert_eq!(state.tasks[2], before.tasks[2]);
        assert_eq!(state.tasks[1].title, "B");
    }

    #[test]
    fn test_set_completed_unknown_id_is_noop() {
        let mut state = state_with(vec![task(1, "A", false)]);
        let before = state.clone();

        state.set_completed(42, true);

        assert_eq!(state, before);
    }

    #[test]
    fn test_remove_task_keeps_order() {
        let mut state = state_with(vec![task(1, "A", false), task(2, "B", false), task(3, "C", false)]);

        state.remove_task(2);
        let ids: Vec<_> = state.tasks.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 3]);

        state.remove_task(2);
        assert_eq!(state.tasks.len(), 2);
    }

    #[test]
    fn test_rc_cell_patch_and_snapshot() {
        let cell = Rc::new(RefCell::new(SynchronizerState::default()));

        cell.patch(|s| s.set_loading(true));

        assert!(cell.read_with(|s| s.is_loading));
        assert!(cell.snapshot().is_loading);
    }
}
