//! Task Backend API
//!
//! `TaskApi` is the seam between the synchronizer and the remote task store.
//! `HttpTaskApi` talks to the real backend; tests use `InMemoryTaskApi`.

mod http;
#[cfg(test)]
mod memory;

use async_trait::async_trait;

use crate::error::RemoteRequestFailure;
use crate::models::{AppInfo, CreateTaskArgs, Task, TaskId, UpdateTaskArgs};

pub use http::HttpTaskApi;
#[cfg(test)]
pub use memory::InMemoryTaskApi;

pub type ApiResult<T> = Result<T, RemoteRequestFailure>;

/// Request/response access to the remote task store
///
/// Futures are not `Send`: the client runs on the browser's single thread.
#[async_trait(?Send)]
pub trait TaskApi {
    /// `GET /api/tasks`, in server order
    async fn list_tasks(&self) -> ApiResult<Vec<Task>>;

    /// `GET /api/info`
    async fn fetch_info(&self) -> ApiResult<AppInfo>;

    /// `POST /api/tasks`; the server assigns `id` and `created_at`
    async fn create_task(&self, args: &CreateTaskArgs<'_>) -> ApiResult<Task>;

    /// `PUT /api/tasks/{id}`; the response body is ignored
    async fn update_task(&self, id: TaskId, args: &UpdateTaskArgs) -> ApiResult<()>;

    /// `DELETE /api/tasks/{id}`; the response body is ignored
    async fn delete_task(&self, id: TaskId) -> ApiResult<()>;
}
