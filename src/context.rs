//! Application Context
//!
//! Shared state provided via Leptos Context API. Owns the transient
//! edit-mode index; the persisted task records never carry edit state.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Delay before focusing a freshly rendered edit field, in milliseconds
const EDIT_FOCUS_DELAY_MS: u32 = 20;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Index of the row in edit mode (None = all rows in view mode) - read
    pub editing: ReadSignal<Option<usize>>,
    /// Index of the row in edit mode - write
    set_editing: WriteSignal<Option<usize>>,
}

impl AppContext {
    pub fn new(editing: (ReadSignal<Option<usize>>, WriteSignal<Option<usize>>)) -> Self {
        Self {
            editing: editing.0,
            set_editing: editing.1,
        }
    }

    /// Put the row at `index` into edit mode and focus its text field once
    /// the field exists in the re-rendered view
    pub fn begin_edit(&self, index: usize) {
        self.set_editing.set(Some(index));
        Timeout::new(EDIT_FOCUS_DELAY_MS, move || focus_edit_input(index)).forget();
    }

    /// Return every row to view mode
    pub fn end_edit(&self) {
        self.set_editing.set(None);
    }

    /// Keep the edit-mode index coherent across a row removal: removing the
    /// editing row ends edit mode, removing an earlier row shifts the index
    pub fn note_removed(&self, removed: usize) {
        self.set_editing
            .update(|editing| *editing = shift_after_removal(*editing, removed));
    }
}

/// Edit index after the row at `removed` is deleted
fn shift_after_removal(editing: Option<usize>, removed: usize) -> Option<usize> {
    match editing {
        Some(i) if i == removed => None,
        Some(i) if i > removed => Some(i - 1),
        other => other,
    }
}

/// Move keyboard focus into the edit field of the row at `index`
pub fn focus_edit_input(index: usize) {
    let selector = format!(r#".task-row[data-index="{}"] .edit-input"#, index);
    let input = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.query_selector(&selector).ok().flatten());
    if let Some(element) = input {
        if let Some(element) = element.dyn_ref::<web_sys::HtmlElement>() {
            let _ = element.focus();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_removing_the_editing_row_ends_edit_mode() {
        assert_eq!(shift_after_removal(Some(2), 2), None);
    }

    #[test]
    fn test_removing_an_earlier_row_shifts_the_index_down() {
        assert_eq!(shift_after_removal(Some(2), 0), Some(1));
    }

    #[test]
    fn test_removing_a_later_row_keeps_the_index() {
        assert_eq!(shift_after_removal(Some(1), 3), Some(1));
    }

    #[test]
    fn test_no_edit_mode_stays_off() {
        assert_eq!(shift_after_removal(None, 0), None);
    }
}
