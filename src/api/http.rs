//! HTTP Task API
//!
//! Fetch-based client for the task backend's REST endpoints.

use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

use super::{ApiResult, TaskApi};
use crate::config::ClientConfig;
use crate::error::RemoteOperation;
use crate::models::{AppInfo, CreateTaskArgs, Task, TaskId, TaskList, UpdateTaskArgs};

const LOG_TARGET: &str = "tasks::api";

#[derive(Debug, Clone)]
pub struct HttpTaskApi {
    config: ClientConfig,
}

impl HttpTaskApi {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }
}

/// Reject anything outside 2xx
fn check_status(op: RemoteOperation, ok: bool, status: u16, status_text: &str) -> ApiResult<()> {
    if ok {
        Ok(())
    } else {
        Err(op.failed(format!("HTTP {} {}", status, status_text)))
    }
}

fn ensure_success(op: RemoteOperation, response: Response) -> ApiResult<Response> {
    check_status(op, response.ok(), response.status(), &response.status_text())?;
    Ok(response)
}

fn parse_body<T: DeserializeOwned>(op: RemoteOperation, body: &str) -> ApiResult<T> {
    serde_json::from_str(body).map_err(|e| op.failed(format!("undecodable body: {}", e)))
}

async fn decode<T: DeserializeOwned>(op: RemoteOperation, response: Response) -> ApiResult<T> {
    let response = ensure_success(op, response)?;
    let body = response.text().await.map_err(|e| op.failed(e))?;
    parse_body(op, &body)
}

#[async_trait(?Send)]
impl TaskApi for HttpTaskApi {
    async fn list_tasks(&self) -> ApiResult<Vec<Task>> {
        let op = RemoteOperation::ListTasks;
        let url = self.config.tasks_endpoint();
        log::debug!(target: LOG_TARGET, "GET {}", url);

        let response = Request::get(&url).send().await.map_err(|e| op.failed(e))?;
        let list: TaskList = decode(op, response).await?;
        if let Some(total) = list.total.filter(|total| *total != list.tasks.len()) {
            log::warn!(target: LOG_TARGET, "backend reported {} tasks but sent {}", total, list.tasks.len());
        }
        Ok(list.tasks)
    }

    async fn fetch_info(&self) -> ApiResult<AppInfo> {
        let op = RemoteOperation::FetchInfo;
        let url = self.config.info_endpoint();
        log::debug!(target: LOG_TARGET, "GET {}", url);

        let response = Request::get(&url).send().await.map_err(|e| op.failed(e))?;
        decode(op, response).await
    }

    async fn create_task(&self, args: &CreateTaskArgs<'_>) -> ApiResult<Task> {
        let op = RemoteOperation::CreateTask;
        let url = self.config.tasks_endpoint();
        log::debug!(target: LOG_TARGET, "POST {}", url);

        let response = Request::post(&url)
            .json(args)
            .map_err(|e| op.failed(e))?
            .send()
            .await
            .map_err(|e| op.failed(e))?;
        decode(op, response).await
    }

    async fn update_task(&self, id: TaskId, args: &UpdateTaskArgs) -> ApiResult<()> {
        let op = RemoteOperation::UpdateTask;
        let url = self.config.task_endpoint(id);
        log::debug!(target: LOG_TARGET, "PUT {}", url);

        let response = Request::put(&url)
            .json(args)
            .map_err(|e| op.failed(e))?
            .send()
            .await
            .map_err(|e| op.failed(e))?;
        ensure_success(op, response).map(|_| ())
    }

    async fn delete_task(&self, id: TaskId) -> ApiResult<()> {
        let op = RemoteOperation::DeleteTask;
        let url = self.config.task_endpoint(id);
        log::debug!(target: LOG_TARGET, "DELETE {}", url);

        let response = Request::delete(&url).send().await.map_err(|e| op.failed(e))?;
        ensure_success(op, response).map(|_| ())
    }
}
