//! Task List Component
//!
//! Loading indicator, task count, empty state and the rows themselves.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::TaskRow;
use crate::context::use_synchronizer;
use crate::models::Task;
use crate::store::SynchronizerStateStoreFields;

#[component]
pub fn TaskList() -> impl IntoView {
    let sync = use_synchronizer();
    let store = *sync.state();

    let refresh = move |_: web_sys::MouseEvent| {
        let sync = sync.clone();
        spawn_local(async move {
            sync.list_tasks().await;
        });
    };

    view! {
        <Show
            when=move || !store.is_loading().get()
            fallback=|| view! { <div class="loading">"Loading tasks..."</div> }
        >
            <div class="tasks-container">
                <div class="tasks-heading">
                    <h2>{move || format!("Tasks ({})", store.tasks().read().len())}</h2>
                    <button class="refresh-button" on:click=refresh.clone()>"Refresh"</button>
                </div>
                <Show
                    when=move || !store.tasks().read().is_empty()
                    fallback=|| view! { <p class="no-tasks">"No tasks yet. Add one above!"</p> }
                >
                    <ul class="tasks-list">
                        <For
                            each=move || store.tasks().get()
                            // Toggling keeps the id, so key on completion too
                            key=|task| (task.id, task.completed)
                            children=move |task: Task| view! { <TaskRow task=task /> }
                        />
                    </ul>
                </Show>
            </div>
        </Show>
    }
}
