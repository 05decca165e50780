//! UI Components
//!
//! Leptos components making up the widget.

mod new_task_form;
mod summary_bar;
mod task_list_view;
mod task_row;

pub use new_task_form::NewTaskForm;
pub use summary_bar::SummaryBar;
pub use task_list_view::TaskListView;
pub use task_row::TaskRow;
