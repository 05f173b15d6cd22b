//! Task List Synchronizer
//!
//! Keeps `SynchronizerState` consistent with the remote task store. Each
//! operation issues one request, waits for it, then applies a local patch:
//! full replace for list, append for create, set-completed for toggle and
//! filter for delete. Nothing is patched before the backend confirms.
//!
//! Failures never escape an operation. They are logged and, except for the
//! app info fetch, shown to the user once through the `Notifier`.

use crate::api::TaskApi;
use crate::error::RemoteRequestFailure;
use crate::models::{CreateTaskArgs, TaskId, UpdateTaskArgs};
use crate::notice::Notifier;
use crate::store::StateCell;


const LOG_TARGET: &str = "tasks::sync";

#[derive(Clone)]
pub struct TaskListSynchronizer<A, S, N> {
    api: A,
    state: S,
    notifier: N,
}

/// Holds `is_loading` up until dropped, on every exit path
struct LoadingGuard<'a, S: StateCell> {
    state: &'a S,
}

impl<'a, S: StateCell> LoadingGuard<'a, S> {
    fn raise(state: &'a S) -> Self {
        state.patch(|s| s.set_loading(true));
        Self { state }
    }
}

impl<S: StateCell> Drop for LoadingGuard<'_, S> {
    fn drop(&mut self) {
        self.state.patch(|s| s.set_loading(false));
    }
}

impl<A, S, N> TaskListSynchronizer<A, S, N>
where
    A: TaskApi,
    S: StateCell,
    N: Notifier,
{
    pub fn new(api: A, state: S, notifier: N) -> Self {
        Self { api, state, notifier }
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    /// Initial load. The task list and app info requests are independent and
    /// may settle in either order.
    pub async fn start(&self) {
        log::info!(target: LOG_TARGET, "starting initial load");
        futures::join!(self.list_tasks(), self.fetch_app_info());
    }

    /// Replace local tasks with the server's list
    pub async fn list_tasks(&self) {
        let loading = LoadingGuard::raise(&self.state);
        let result = self.api.list_tasks().await;

        match result {
            Ok(tasks) => {
                log::info!(target: LOG_TARGET, "loaded {} tasks", tasks.len());
                self.state.patch(|s| s.replace_tasks(tasks));
                drop(loading);
            }
            Err(err) => {
                drop(loading);
                self.report(&err);
            }
        }
    }

    /// Fetch backend metadata; failures stay out of the user's way
    pub async fn fetch_app_info(&self) {
        match self.api.fetch_info().await {
            Ok(info) => {
                log::debug!(
                    target: LOG_TARGET,
                    "backend {} ({}) on {}",
                    info.version,
                    info.environment,
                    info.container_id
                );
                self.state.patch(|s| s.set_app_info(info));
            }
            Err(err) => self.report(&err),
        }
    }

    /// Create a task and append the server's copy.
    ///
    /// Blank titles are rejected without a request. The title is sent as
    /// typed; only the emptiness check trims it.
    pub async fn add_task(&self, title: &str) {
        if title.trim().is_empty() {
            log::debug!(target: LOG_TARGET, "ignoring blank task title");
            return;
        }

        match self.api.create_task(&CreateTaskArgs::new(title)).await {
            Ok(task) => {
                log::info!(target: LOG_TARGET, "created task #{}", task.id);
                self.state.patch(|s| s.append_created(task));
            }
            Err(err) => self.report(&err),
        }
    }

    /// Submit whatever is in the new-task input
    pub async fn submit_pending(&self) {
        let title = self.state.read_with(|s| s.pending_title.clone());
        self.add_task(&title).await;
    }

    /// Set `completed = !current_completed` remotely, then locally.
    ///
    /// The new value comes from `current_completed`, not from the local copy.
    /// If the task is gone locally by the time the backend answers, nothing
    /// changes.
    pub async fn toggle_task(&self, id: TaskId, current_completed: bool) {
        let completed = !current_completed;

        match self.api.update_task(id, &UpdateTaskArgs { completed }).await {
            Ok(()) => {
                log::debug!(target: LOG_TARGET, "task #{} completed={}", id, completed);
                self.state.patch(|s| s.set_completed(id, completed));
            }
            Err(err) => self.report(&err),
        }
    }

    pub async fn delete_task(&self, id: TaskId) {
        match self.api.delete_task(id).await {
            Ok(()) => {
                log::info!(target: LOG_TARGET, "deleted task #{}", id);
                self.state.patch(|s| s.remove_task(id));
            }
            Err(err) => self.report(&err),
        }
    }

    pub fn set_pending_title(&self, title: impl Into<String>) {
        let title = title.into();
        self.state.patch(|s| s.set_pending_title(title));
    }

    fn report(&self, err: &RemoteRequestFailure) {
        log::error!(target: LOG_TARGET, "{}", err);
        if let Some(notice) = err.operation.notice() {
            self.notifier.notify(notice);
        }
    }
}
