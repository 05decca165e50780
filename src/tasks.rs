//! Task List Operations
//!
//! Pure mutations and derivations over the task list, shared by the UI
//! event handlers.

use crate::models::Task;

/// Append a new task; whitespace-only text is rejected
/// Returns whether a task was added
pub fn add_task(tasks: &mut Vec<Task>, text: &str) -> bool {
    let text = text.trim();
    if text.is_empty() {
        return false;
    }
    tasks.push(Task::new(text));
    true
}

/// Flip the completed flag of the task at `index`
pub fn toggle_completed(tasks: &mut [Task], index: usize) {
    if let Some(task) = tasks.get_mut(index) {
        task.completed = !task.completed;
    }
}

/// Remove the task at `index`; later tasks shift down by one
pub fn remove_task(tasks: &mut Vec<Task>, index: usize) {
    if index < tasks.len() {
        tasks.remove(index);
    }
}

/// Replace the text of the task at `index` with the trimmed `new_text`;
/// whitespace-only text is rejected
/// Returns whether the text was replaced
pub fn rename_task(tasks: &mut [Task], index: usize, new_text: &str) -> bool {
    let new_text = new_text.trim();
    if new_text.is_empty() {
        return false;
    }
    match tasks.get_mut(index) {
        Some(task) => {
            task.text = new_text.to_string();
            true
        }
        None => false,
    }
}

/// Derived status line for the summary bar
#[derive(Debug, Clone, PartialEq)]
pub enum Summary {
    /// No tasks at all
    CaughtUp,
    /// At least one task, none left open
    AllDone,
    /// Open tasks remain: how many, and the first one in list order
    Remaining { left: usize, next: String },
}

/// Compute the summary for the current list
pub fn summarize(tasks: &[Task]) -> Summary {
    if tasks.is_empty() {
        return Summary::CaughtUp;
    }
    let left = tasks.iter().filter(|t| !t.completed).count();
    if left == 0 {
        return Summary::AllDone;
    }
    let next = tasks
        .iter()
        .find(|t| !t.completed)
        .map(|t| t.text.clone())
        .unwrap_or_default();
    Summary::Remaining { left, next }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Task;

    fn make_task(text: &str, completed: bool) -> Task {
        Task {
            text: text.to_string(),
            completed,
        }
    }

    #[test]
    fn test_add_appends_in_call_order() {
        let mut tasks = Vec::new();

        assert!(add_task(&mut tasks, "Buy milk"));
        assert!(add_task(&mut tasks, "Walk dog"));

        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].text, "Buy milk");
        assert_eq!(tasks[1].text, "Walk dog");
        assert!(!tasks[0].completed);
    }

    #[test]
    fn test_add_rejects_blank_text() {
        let mut tasks = vec![make_task("A", false)];

        assert!(!add_task(&mut tasks, ""));
        assert!(!add_task(&mut tasks, "   "));

        assert_eq!(tasks.len(), 1);
    }

    #[test]
    fn test_add_trims_text() {
        let mut tasks = Vec::new();

        assert!(add_task(&mut tasks, "  Buy milk  "));

        assert_eq!(tasks[0].text, "Buy milk");
    }

    #[test]
    fn test_toggle_twice_restores_original() {
        let mut tasks = vec![make_task("A", false)];

        toggle_completed(&mut tasks, 0);
        assert!(tasks[0].completed);

        toggle_completed(&mut tasks, 0);
        assert!(!tasks[0].completed);
    }

    #[test]
    fn test_toggle_out_of_range_is_noop() {
        let mut tasks = vec![make_task("A", false)];

        toggle_completed(&mut tasks, 5);

        assert!(!tasks[0].completed);
    }

    #[test]
    fn test_remove_shifts_later_tasks_down() {
        let mut tasks = vec![make_task("A", false), make_task("B", true)];

        remove_task(&mut tasks, 0);

        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].text, "B");
    }

    #[test]
    fn test_remove_out_of_range_is_noop() {
        let mut tasks = vec![make_task("A", false)];

        remove_task(&mut tasks, 1);

        assert_eq!(tasks.len(), 1);
    }

    #[test]
    fn test_rename_trims_and_replaces() {
        let mut tasks = vec![make_task("A", false)];

        assert!(rename_task(&mut tasks, 0, " new "));

        assert_eq!(tasks[0].text, "new");
        assert!(!tasks[0].completed);
    }

    #[test]
    fn test_rename_rejects_blank_text() {
        let mut tasks = vec![make_task("A", false)];

        assert!(!rename_task(&mut tasks, 0, "   "));

        assert_eq!(tasks[0].text, "A");
    }

    #[test]
    fn test_rename_out_of_range_is_noop() {
        let mut tasks = vec![make_task("A", false)];

        assert!(!rename_task(&mut tasks, 3, "B"));

        assert_eq!(tasks[0].text, "A");
    }

    #[test]
    fn test_summary_empty_list() {
        assert_eq!(summarize(&[]), Summary::CaughtUp);
    }

    #[test]
    fn test_summary_all_completed() {
        let tasks = vec![make_task("A", true), make_task("B", true)];

        assert_eq!(summarize(&tasks), Summary::AllDone);
    }

    #[test]
    fn test_summary_reports_first_open_task() {
        let tasks = vec![
            make_task("A", true),
            make_task("B", false),
            make_task("C", false),
        ];

        assert_eq!(
            summarize(&tasks),
            Summary::Remaining {
                left: 2,
                next: "B".to_string()
            }
        );
    }

    #[test]
    fn test_scenario_single_add_then_toggle() {
        let mut tasks = Vec::new();

        add_task(&mut tasks, "Buy milk");
        assert_eq!(
            summarize(&tasks),
            Summary::Remaining {
                left: 1,
                next: "Buy milk".to_string()
            }
        );

        toggle_completed(&mut tasks, 0);
        assert_eq!(summarize(&tasks), Summary::AllDone);
    }
}
