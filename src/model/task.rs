use serde::{Deserialize, Serialize};

use super::asset::Asset;

/// One unit of work/content within a project.
///
/// A task may have zero assets; that is a valid terminal state and
/// renders as an empty-state message in the detail pane.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    /// Resolved name; may be empty, display falls back positionally
    pub name: String,
    /// Free-text subtitle shown under the task title
    pub meta: String,
    pub assets: Vec<Asset>,
}

impl Task {
    /// Sidebar display name: the resolved name, or `Task {n}` (1-based)
    pub fn display_name(&self, index: usize) -> String {
        if self.name.is_empty() {
            format!("Task {}", index + 1)
        } else {
            self.name.clone()
        }
    }

    /// Header title for the detail pane
    pub fn header_title(&self) -> &str {
        if self.name.is_empty() {
            "Untitled Task"
        } else {
            &self.name
        }
    }

    /// The character shown in the sidebar icon cell
    pub fn icon_char(&self) -> char {
        self.name.chars().next().unwrap_or('T')
    }
}
