use serde::{Deserialize, Serialize};

use super::task::Task;

/// Top-level container of tasks for one course/assignment track.
///
/// Constructed once by the loader and never mutated afterward; all view
/// state is an external selection index into the task list, whose order
/// is display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub tasks: Vec<Task>,
}

impl Project {
    pub fn task(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }
}
