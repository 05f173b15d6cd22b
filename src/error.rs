//! Remote Request Errors
//!
//! Every failed backend call becomes a `RemoteRequestFailure`. Network errors,
//! non-2xx statuses and undecodable bodies are all the same failure kind; the
//! `reason` is kept for logs only.

use std::fmt;

use thiserror::Error;

/// The five backend requests the client makes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteOperation {
    ListTasks,
    FetchInfo,
    CreateTask,
    UpdateTask,
    DeleteTask,
}

impl RemoteOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            RemoteOperation::ListTasks => "list tasks",
            RemoteOperation::FetchInfo => "fetch app info",
            RemoteOperation::CreateTask => "create task",
            RemoteOperation::UpdateTask => "update task",
            RemoteOperation::DeleteTask => "delete task",
        }
    }

    /// User-visible notice for a failure, `None` when the failure stays silent
    pub fn notice(&self) -> Option<&'static str> {
        match self {
            RemoteOperation::ListTasks => {
                Some("Failed to fetch tasks. Please check if the backend is running.")
            }
            RemoteOperation::FetchInfo => None,
            RemoteOperation::CreateTask => Some("Failed to add task"),
            RemoteOperation::UpdateTask => Some("Failed to update task"),
            RemoteOperation::DeleteTask => Some("Failed to delete task"),
        }
    }

    /// Build the failure for this operation
    pub fn failed(self, reason: impl fmt::Display) -> RemoteRequestFailure {
        RemoteRequestFailure {
            operation: self,
            reason: reason.to_string(),
        }
    }
}

impl fmt::Display for RemoteOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A backend request that did not succeed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{operation} request failed: {reason}")]
pub struct RemoteRequestFailure {
    pub operation: RemoteOperation,
    pub reason: String,
}
