//! Client Configuration
//!
//! Defaults are baked in at build time (`TASKS_API_URL`, `TASKS_LOG_LEVEL`).
//! The hosting page may override them at runtime by defining
//! `window.__TASKS_CONFIG__ = { apiBaseUrl, logLevel }` before the WASM loads.

use std::str::FromStr;

use log::LevelFilter;
use serde::Deserialize;
use wasm_bindgen::JsValue;

use crate::models::TaskId;

const RUNTIME_CONFIG_KEY: &str = "__TASKS_CONFIG__";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Backend base URL, empty for same-origin
    pub api_base_url: String,
    pub log_level: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: option_env!("TASKS_API_URL").unwrap_or("").to_string(),
            log_level: option_env!("TASKS_LOG_LEVEL").unwrap_or("info").to_string(),
        }
    }
}

/// Runtime overrides read from the page
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigOverrides {
    pub api_base_url: Option<String>,
    pub log_level: Option<String>,
}

impl ClientConfig {
    /// Build-time defaults overlaid with `window.__TASKS_CONFIG__`, if any.
    ///
    /// Runs before the logger is installed, so problems are returned as
    /// warnings for the caller to log.
    pub fn load() -> (Self, Option<String>) {
        let config = Self::default();
        match read_runtime_overrides() {
            Ok(Some(overrides)) => (config.with_overrides(overrides), None),
            Ok(None) => (config, None),
            Err(warning) => (config, Some(warning)),
        }
    }

    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(url) = overrides.api_base_url {
            self.api_base_url = url;
        }
        if let Some(level) = overrides.log_level {
            self.log_level = level;
        }
        self
    }

    pub fn level_filter(&self) -> LevelFilter {
        LevelFilter::from_str(self.log_level.trim()).unwrap_or(LevelFilter::Info)
    }

    /// Absolute or same-origin URL for an API path
    pub fn endpoint(&self, path: &str) -> String {
        let base = self.api_base_url.trim_end_matches('/');
        if path.starts_with('/') {
            format!("{}{}", base, path)
        } else {
            format!("{}/{}", base, path)
        }
    }

    pub fn tasks_endpoint(&self) -> String {
        self.endpoint("/api/tasks")
    }

    pub fn task_endpoint(&self, id: TaskId) -> String {
        self.endpoint(&format!("/api/tasks/{}", id))
    }

    pub fn info_endpoint(&self) -> String {
        self.endpoint("/api/info")
    }
}

fn read_runtime_overrides() -> Result<Option<ConfigOverrides>, String> {
    let Some(window) = web_sys::window() else {
        return Ok(None);
    };
    let value = js_sys::Reflect::get(&window, &JsValue::from_str(RUNTIME_CONFIG_KEY))
        .map_err(|e| format!("reading {}: {:?}", RUNTIME_CONFIG_KEY, e))?;
    if value.is_undefined() || value.is_null() {
        return Ok(None);
    }
    serde_wasm_bindgen::from_value(value)
        .map(Some)
        .map_err(|e| format!("ignoring malformed {}: {}", RUNTIME_CONFIG_KEY, e))
}
