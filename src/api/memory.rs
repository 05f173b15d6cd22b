//! In-Memory Task API
//!
//! Test double that behaves like the task backend: ids are `max(id) + 1`,
//! updates of unknown ids fail with 404, deletes always succeed. Individual
//! operations can be switched to fail, and every request is recorded.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use async_trait::async_trait;
use futures::channel::oneshot;

use super::{ApiResult, TaskApi};
use crate::error::RemoteOperation;
use crate::models::{AppInfo, CreateTaskArgs, Task, TaskId, UpdateTaskArgs};

#[derive(Default)]
struct Inner {
    tasks: RefCell<Vec<Task>>,
    info: RefCell<Option<AppInfo>>,
    failing: RefCell<Vec<RemoteOperation>>,
    calls: RefCell<Vec<RemoteOperation>>,
    list_hook: RefCell<Option<Box<dyn Fn()>>>,
    list_holds: RefCell<VecDeque<oneshot::Receiver<()>>>,
}

/// Shared handle; clones see the same backend
#[derive(Clone, Default)]
pub struct InMemoryTaskApi {
    inner: Rc<Inner>,
}

impl InMemoryTaskApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        let api = Self::new();
        *api.inner.tasks.borrow_mut() = tasks;
        api
    }

    pub fn set_info(&self, info: AppInfo) {
        *self.inner.info.borrow_mut() = Some(info);
    }

    /// Make every later request of `op` fail
    pub fn fail(&self, op: RemoteOperation) {
        self.inner.failing.borrow_mut().push(op);
    }

    /// Run `hook` at the moment a list request is issued
    pub fn on_list(&self, hook: impl Fn() + 'static) {
        *self.inner.list_hook.borrow_mut() = Some(Box::new(hook));
    }

    /// Keep the next list request in flight until the returned sender fires.
    /// Holds are consumed in request order.
    pub fn hold_next_list(&self) -> oneshot::Sender<()> {
        let (release, hold) = oneshot::channel();
        self.inner.list_holds.borrow_mut().push_back(hold);
        release
    }

    /// Server-side tasks, in server order
    pub fn tasks(&self) -> Vec<Task> {
        self.inner.tasks.borrow().clone()
    }

    pub fn call_count(&self, op: RemoteOperation) -> usize {
        self.inner.calls.borrow().iter().filter(|call| **call == op).count()
    }

    fn begin(&self, op: RemoteOperation) -> ApiResult<()> {
        self.inner.calls.borrow_mut().push(op);
        if self.inner.failing.borrow().contains(&op) {
            Err(op.failed("HTTP 503 Service Unavailable"))
        } else {
            Ok(())
        }
    }
}

#[async_trait(?Send)]
impl TaskApi for InMemoryTaskApi {
    async fn list_tasks(&self) -> ApiResult<Vec<Task>> {
        if let Some(hook) = self.inner.list_hook.borrow().as_ref() {
            hook();
        }
        self.begin(RemoteOperation::ListTasks)?;
        let hold = self.inner.list_holds.borrow_mut().pop_front();
        if let Some(hold) = hold {
            let _ = hold.await;
        }
        Ok(self.tasks())
    }

    async fn fetch_info(&self) -> ApiResult<AppInfo> {
        let op = RemoteOperation::FetchInfo;
        self.begin(op)?;
        self.inner
            .info
            .borrow()
            .clone()
            .ok_or_else(|| op.failed("HTTP 404 Not Found"))
    }

    async fn create_task(&self, args: &CreateTaskArgs<'_>) -> ApiResult<Task> {
        self.begin(RemoteOperation::CreateTask)?;

        let mut tasks = self.inner.tasks.borrow_mut();
        let id = tasks.iter().map(|task| task.id).max().unwrap_or(0) + 1;
        let task = Task {
            id,
            title: args.title.to_string(),
            completed: args.completed,
            created_at: format!("2025-01-02T10:{:02}:00Z", id % 60),
        };
        tasks.push(task.clone());
        Ok(task)
    }

    async fn update_task(&self, id: TaskId, args: &UpdateTaskArgs) -> ApiResult<()> {
        let op = RemoteOperation::UpdateTask;
        self.begin(op)?;

        let mut tasks = self.inner.tasks.borrow_mut();
        let task = tasks
            .iter_mut()
            .find(|task| task.id == id)
            .ok_or_else(|| op.failed("HTTP 404 Not Found"))?;
        task.completed = args.completed;
        Ok(())
    }

    async fn delete_task(&self, id: TaskId) -> ApiResult<()> {
        self.begin(RemoteOperation::DeleteTask)?;
        self.inner.tasks.borrow_mut().retain(|task| task.id != id);
        Ok(())
    }
}
