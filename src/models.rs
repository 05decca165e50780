//! Task Model
//!
//! The persisted task record.

use serde::{Deserialize, Serialize};

/// Upper bound on task text length, enforced by the input fields
pub const TASK_TEXT_MAX: usize = 60;

/// A single to-do entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub text: String,
    #[serde(default)]
    pub completed: bool,
}

impl Task {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            completed: false,
        }
    }
}
