//! Daily Todo App
//!
//! Root component wiring the add form, the task list, and the summary line
//! to one shared store.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{NewTaskForm, SummaryBar, TaskListView};
use crate::context::AppContext;
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    // State restored from localStorage before the first render
    let app_store = Store::new(AppState::load());
    let (editing, set_editing) = signal::<Option<usize>>(None);

    web_sys::console::log_1(
        &format!("[APP] Loaded {} tasks", app_store.tasks().read_untracked().len()).into(),
    );

    // Provide store and context to all children
    provide_context(app_store);
    provide_context(AppContext::new((editing, set_editing)));

    view! {
        <div class="todo-app">
            <h1>"Daily Todo"</h1>

            <NewTaskForm />

            <TaskListView />

            <SummaryBar />
        </div>
    }
}
