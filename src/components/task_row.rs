//! Task Row Component
//!
//! A single task in the list. Renders view mode (checkbox, text, edit and
//! delete buttons) or edit mode (text field, save and delete buttons)
//! depending on the context's edit index.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::context::{self, AppContext};
use crate::models::{Task, TASK_TEXT_MAX};
use crate::store::{self, use_app_store};

/// A single task row
#[component]
pub fn TaskRow(index: usize, task: Task) -> impl IntoView {
    let app_store = use_app_store();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let completed = task.completed;
    let text = task.text.clone();
    let is_editing = move || ctx.editing.get() == Some(index);

    // Edit buffer, re-seeded from the stored text whenever the row re-renders
    let (edit_value, set_edit_value) = signal(task.text.clone());

    let commit_edit = move || {
        if store::store_rename_task(&app_store, index, &edit_value.get()) {
            ctx.end_edit();
        } else {
            // Empty text: stay in edit mode and put the cursor back
            context::focus_edit_input(index);
        }
    };

    view! {
        <li
            class=move || if completed { "task-row completed" } else { "task-row" }
            data-index=index.to_string()
        >
            {move || if is_editing() {
                view! {
                    <input
                        class="edit-input"
                        type="text"
                        maxlength=TASK_TEXT_MAX.to_string()
                        prop:value=move || edit_value.get()
                        on:input=move |ev| {
                            let target = ev.target().unwrap();
                            let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                            set_edit_value.set(input.value());
                        }
                        on:keydown=move |ev: web_sys::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                commit_edit();
                            }
                        }
                    />
                    <button class="edit-btn" title="Save" on:click=move |_| commit_edit()>
                        "💾"
                    </button>
                }.into_any()
            } else {
                view! {
                    <input
                        type="checkbox"
                        checked=completed
                        on:change=move |_| store::store_toggle_task(&app_store, index)
                    />
                    <span
                        class="task-text"
                        title="Click to edit"
                        on:click=move |_| ctx.begin_edit(index)
                    >
                        {text.clone()}
                    </span>
                    <button class="edit-btn" title="Edit" on:click=move |_| ctx.begin_edit(index)>
                        "✏️"
                    </button>
                }.into_any()
            }}

            <button
                class="delete-btn"
                title="Delete"
                on:click=move |_| {
                    store::store_remove_task(&app_store, index);
                    ctx.note_removed(index);
                }
            >
                "🗑️"
            </button>
        </li>
    }
}
