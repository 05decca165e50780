//! Task Persistence
//!
//! Mirrors the task list to browser localStorage as a JSON array.
//! Absent or malformed data loads as an empty list.

use crate::models::Task;

/// localStorage key holding the serialized task list
pub const STORAGE_KEY: &str = "todos";

/// Serialize the task list to its stored JSON form
pub fn to_json(tasks: &[Task]) -> String {
    serde_json::to_string(tasks).unwrap_or_else(|_| "[]".to_string())
}

/// Parse the stored JSON form; malformed data yields an empty list
pub fn from_json(raw: &str) -> Vec<Task> {
    serde_json::from_str(raw).unwrap_or_default()
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Load the task list saved by a previous session
pub fn load_tasks() -> Vec<Task> {
    match local_storage().and_then(|s| s.get_item(STORAGE_KEY).ok().flatten()) {
        Some(raw) => from_json(&raw),
        None => Vec::new(),
    }
}

/// Overwrite the stored list with the current tasks
pub fn save_tasks(tasks: &[Task]) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(STORAGE_KEY, &to_json(tasks));
    }
}
