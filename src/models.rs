//! Frontend Models
//!
//! Data structures matching the task backend's JSON.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Backend-assigned task identifier
pub type TaskId = u32;

/// Task data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub completed: bool,
    /// Kept exactly as the backend sent it; only parsed for display
    pub created_at: String,
}

impl Task {
    /// Creation date for display (`YYYY-MM-DD`)
    ///
    /// Accepts RFC 3339 timestamps as well as naive ISO timestamps with or
    /// without fractional seconds. Anything else is returned verbatim.
    pub fn created_date(&self) -> String {
        let raw = self.created_at.trim();

        let date = DateTime::parse_from_rfc3339(raw)
            .map(|dt| dt.date_naive())
            .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").map(|dt| dt.date()))
            .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"));

        match date {
            Ok(date) => date.format("%Y-%m-%d").to_string(),
            Err(_) => self.created_at.clone(),
        }
    }
}

/// Backend metadata shown in the header
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppInfo {
    pub version: String,
    pub environment: String,
    pub container_id: String,
    #[serde(default)]
    pub app: Option<String>,
    #[serde(default)]
    pub tasks_count: Option<u32>,
}

impl AppInfo {
    /// One-line banner text
    pub fn summary(&self) -> String {
        let mut line = format!(
            "Backend Version: {} | Environment: {} | Container: {}",
            self.version, self.environment, self.container_id
        );
        if let Some(app) = &self.app {
            line = format!("{} | {}", app, line);
        }
        if let Some(count) = self.tasks_count {
            line.push_str(&format!(" | Stored tasks: {}", count));
        }
        line
    }
}

/// `GET /api/tasks` response envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskList {
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub total: Option<usize>,
}

// ========================
// Request Bodies
// ========================

#[derive(Debug, Serialize)]
pub struct CreateTaskArgs<'a> {
    pub title: &'a str,
    pub completed: bool,
}

impl<'a> CreateTaskArgs<'a> {
    pub fn new(title: &'a str) -> Self {
        Self { title, completed: false }
    }
}

#[derive(Debug, Serialize)]
pub struct UpdateTaskArgs {
    pub completed: bool,
}
