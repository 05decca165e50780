//! Summary Bar Component
//!
//! Derived status line shown under the task list.

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};
use crate::tasks::{self, Summary};

/// One-line status: caught up, all done, or open count plus the next task
#[component]
pub fn SummaryBar() -> impl IntoView {
    let app_store = use_app_store();

    view! {
        <div class="summary">
            {move || match tasks::summarize(&app_store.tasks().read()) {
                Summary::CaughtUp => view! {
                    <span>"You're all caught up for today! 🎉"</span>
                }.into_any(),
                Summary::AllDone => view! {
                    <span>"All tasks for today completed! ✔️"</span>
                }.into_any(),
                Summary::Remaining { left, next } => view! {
                    <span>"Tasks left: " <b>{left}</b> " — Next: " <b>{next}</b></span>
                }.into_any(),
            }}
        </div>
    }
}
