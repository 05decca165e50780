//! New Task Form Component
//!
//! Form for adding a task to the end of the list.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::models::TASK_TEXT_MAX;
use crate::store::{self, use_app_store};

/// Form with a single text input; submit appends a task
#[component]
pub fn NewTaskForm() -> impl IntoView {
    let app_store = use_app_store();

    let (new_text, set_new_text) = signal(String::new());

    let add_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        // Whitespace-only input is rejected and keeps the field as-is
        if store::store_add_task(&app_store, &new_text.get()) {
            set_new_text.set(String::new());
        }
    };

    view! {
        <form class="new-task-form" on:submit=add_task>
            <input
                type="text"
                placeholder="Add a new task..."
                maxlength=TASK_TEXT_MAX.to_string()
                prop:value=move || new_text.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    set_new_text.set(input.value());
                }
            />
            <button type="submit">"Add"</button>
        </form>
    }
}
