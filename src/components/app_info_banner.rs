//! App Info Banner Component
//!
//! Backend metadata line in the header; hidden until the info has loaded.

use leptos::prelude::*;

use crate::context::use_task_store;
use crate::store::SynchronizerStateStoreFields;

#[component]
pub fn AppInfoBanner() -> impl IntoView {
    let store = use_task_store();

    move || {
        store.app_info().get().map(|info| {
            view! {
                <div class="app-info">
                    <small>{info.summary()}</small>
                </div>
            }
        })
    }
}
