use std::fmt;

/// Identifier for a task, unique within the process lifetime.
///
/// Ids come from the store's monotonic counter and are never reused,
/// even after the task they named has been removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(pub u64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single checklist entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// Assigned at creation, immutable thereafter
    pub id: TaskId,
    /// Display text, immutable (there is no edit operation)
    pub text: String,
    /// Checkbox state, toggled in place
    pub done: bool,
}

impl Task {
    /// Create a new task, not yet done.
    pub fn new(id: TaskId, text: impl Into<String>) -> Self {
        Task {
            id,
            text: text.into(),
            done: false,
        }
    }
}
