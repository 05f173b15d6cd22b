//! Task Form Component
//!
//! Input bound to the pending title, submitted as a new task.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_synchronizer;
use crate::store::SynchronizerStateStoreFields;

#[component]
pub fn TaskForm() -> impl IntoView {
    let sync = use_synchronizer();
    let store = *sync.state();

    let on_submit = {
        let sync = sync.clone();
        move |ev: web_sys::SubmitEvent| {
            ev.prevent_default();
            let sync = sync.clone();
            spawn_local(async move {
                sync.submit_pending().await;
            });
        }
    };

    view! {
        <form class="task-form" on:submit=on_submit>
            <input
                type="text"
                class="task-input"
                placeholder="Enter a new task..."
                prop:value=move || store.pending_title().get()
                on:input=move |ev| sync.set_pending_title(event_target_value(&ev))
            />
            <button type="submit" class="add-button">"Add Task"</button>
        </form>
    }
}
