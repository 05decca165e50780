//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Every mutation
//! helper persists the list after a successful change; rendering follows
//! reactively.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::Task;
use crate::storage;
use crate::tasks;

/// Global application state
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// All tasks in insertion order
    pub tasks: Vec<Task>,
}

impl AppState {
    /// Restore the state saved by a previous session
    pub fn load() -> Self {
        Self {
            tasks: storage::load_tasks(),
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

fn store_save(store: &AppStore) {
    storage::save_tasks(&store.tasks().read_untracked());
}

/// Append a task and persist; returns false for whitespace-only text
pub fn store_add_task(store: &AppStore, text: &str) -> bool {
    let added = tasks::add_task(&mut store.tasks().write(), text);
    if added {
        store_save(store);
    }
    added
}

/// Flip the completed flag at `index` and persist
pub fn store_toggle_task(store: &AppStore, index: usize) {
    tasks::toggle_completed(&mut store.tasks().write(), index);
    store_save(store);
}

/// Remove the task at `index` and persist
pub fn store_remove_task(store: &AppStore, index: usize) {
    tasks::remove_task(&mut store.tasks().write(), index);
    store_save(store);
}

/// Replace the text at `index` and persist; returns false for
/// whitespace-only text
pub fn store_rename_task(store: &AppStore, index: usize, new_text: &str) -> bool {
    let renamed = tasks::rename_task(&mut store.tasks().write(), index, new_text);
    if renamed {
        store_save(store);
    }
    renamed
}
