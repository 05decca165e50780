//! Task List View Component
//!
//! The list container: one row per task, or a placeholder when empty.

use leptos::prelude::*;

use crate::components::TaskRow;
use crate::store::{use_app_store, AppStateStoreFields};

/// Renders the task list with index-addressed rows
#[component]
pub fn TaskListView() -> impl IntoView {
    let app_store = use_app_store();

    let tasks_enumerated =
        move || app_store.tasks().get().into_iter().enumerate().collect::<Vec<_>>();

    view! {
        <ul class="task-list">
            <Show when=move || app_store.tasks().read().is_empty()>
                <li class="task-row placeholder">"No tasks yet. Start by adding one above 👆"</li>
            </Show>
            <For
                each=tasks_enumerated
                key=|(index, task)| {
                    // Index is the row identity; text and completed are the
                    // mutable fields, so key on all three to re-render on change
                    (*index, task.text.clone(), task.completed)
                }
                children=move |(index, task)| {
                    view! { <TaskRow index=index task=task /> }
                }
            />
        </ul>
    }
}
