//! Task Row Component
//!
//! A single task: checkbox, title, creation date and delete button.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_synchronizer;
use crate::models::Task;

#[component]
pub fn TaskRow(task: Task) -> impl IntoView {
    let sync = use_synchronizer();

    let id = task.id;
    let completed = task.completed;
    let created = task.created_date();

    // The checkbox only changes once the backend confirms; the row is
    // keyed on `completed` and re-renders then.
    let on_toggle = {
        let sync = sync.clone();
        move |ev: web_sys::MouseEvent| {
            ev.prevent_default();
            let sync = sync.clone();
            spawn_local(async move {
                sync.toggle_task(id, completed).await;
            });
        }
    };

    let on_delete = move |_: web_sys::MouseEvent| {
        let sync = sync.clone();
        spawn_local(async move {
            sync.delete_task(id).await;
        });
    };

    view! {
        <li class=if completed { "task-item completed" } else { "task-item" }>
            <div class="task-content">
                <input
                    type="checkbox"
                    class="task-checkbox"
                    prop:checked=completed
                    on:click=on_toggle
                />
                <span class="task-title">{task.title}</span>
                <small class="task-date">{created}</small>
            </div>
            <button class="delete-button" on:click=on_delete>"Delete"</button>
        </li>
    }
}
