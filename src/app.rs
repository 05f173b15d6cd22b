//! Task List App
//!
//! Root component: builds the store and synchronizer, starts the initial
//! load and lays out header, form, list and footer.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api::HttpTaskApi;
use crate::components::{AppInfoBanner, TaskForm, TaskList};
use crate::config::ClientConfig;
use crate::context::provide_synchronizer;
use crate::notice::AlertNotifier;
use crate::store::SynchronizerState;
use crate::sync::TaskListSynchronizer;

#[component]
pub fn App(config: ClientConfig) -> impl IntoView {
    let store = Store::new(SynchronizerState::default());
    let sync = TaskListSynchronizer::new(HttpTaskApi::new(config), store, AlertNotifier);

    provide_synchronizer(sync.clone());

    // Load tasks and backend info on mount
    Effect::new(move |_| {
        let sync = sync.clone();
        spawn_local(async move {
            sync.start().await;
        });
    });

    view! {
        <div class="App">
            <header class="App-header">
                <h1>"Task Manager"</h1>
                <p>"Multi-container task list"</p>
                <AppInfoBanner />
            </header>

            <main class="App-main">
                <TaskForm />
                <TaskList />
            </main>

            <footer class="App-footer">
                <p>"Tasks are stored by the backend service"</p>
            </footer>
        </div>
    }
}
