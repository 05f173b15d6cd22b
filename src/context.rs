//! Application Context
//!
//! The synchronizer is shared with every component via the Leptos Context API.

use leptos::prelude::*;

use crate::api::HttpTaskApi;
use crate::notice::AlertNotifier;
use crate::store::AppStore;
use crate::sync::TaskListSynchronizer;

/// The synchronizer as wired in the browser
pub type AppSynchronizer = TaskListSynchronizer<HttpTaskApi, AppStore, AlertNotifier>;

pub fn provide_synchronizer(sync: AppSynchronizer) {
    provide_context(sync);
}

/// Get the synchronizer from context
pub fn use_synchronizer() -> AppSynchronizer {
    expect_context::<AppSynchronizer>()
}

/// Get the task store from context
pub fn use_task_store() -> AppStore {
    *use_synchronizer().state()
}
