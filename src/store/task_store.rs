//! The single owner of task state.
//!
//! [`TaskStore`] holds the canonical task list and the add-dialog
//! visibility flag, and is the only place either is mutated. Every
//! operation is a synchronous in-memory state transition; after each one
//! that actually changed something, the store builds one [`Snapshot`] and
//! pushes it to every subscriber in registration order. A mutation that
//! changes nothing (closing a closed dialog, toggling an unknown id)
//! publishes nothing.
//!
//! The store must stay on one thread. Subscribers run inside the mutating
//! call and must not call back into the store; they get a `&Snapshot`, not
//! the store itself, so in practice they cannot.

use crate::model::task::{Task, TaskId};

/// Error type for store lookups.
///
/// An unknown id is benign: the task may have been removed by an earlier
/// gesture that the view had not rendered yet. Callers that don't care
/// ignore the result; nothing here ever panics.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("task not found: {0}")]
    NotFound(TaskId),
}

/// A consistent read of the store at one instant: the ordered task list
/// and the dialog flag, cloned together so neither can be torn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub tasks: Vec<Task>,
    pub dialog_visible: bool,
}

/// Handle returned by [`TaskStore::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriberId(u64);

type Subscriber = Box<dyn FnMut(&Snapshot)>;

pub struct TaskStore {
    tasks: Vec<Task>,
    dialog_visible: bool,
    next_task_id: u64,
    next_subscriber_id: u64,
    subscribers: Vec<(SubscriberId, Subscriber)>,
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskStore {
    pub fn new() -> Self {
        TaskStore {
            tasks: Vec::new(),
            dialog_visible: false,
            next_task_id: 1,
            next_subscriber_id: 1,
            subscribers: Vec::new(),
        }
    }

    /// The ordered task list (insertion order; removal keeps the rest in
    /// place).
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Whether the add-task dialog is open.
    pub fn dialog_visible(&self) -> bool {
        self.dialog_visible
    }

    /// Clone the current state into a [`Snapshot`].
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            tasks: self.tasks.clone(),
            dialog_visible: self.dialog_visible,
        }
    }

    /// Register a change callback. It fires after every state change, in
    /// registration order, and does not fire at registration time.
    pub fn subscribe(&mut self, f: impl FnMut(&Snapshot) + 'static) -> SubscriberId {
        let id = SubscriberId(self.next_subscriber_id);
        self.next_subscriber_id += 1;
        self.subscribers.push((id, Box::new(f)));
        id
    }

    /// Remove a subscriber. Unknown ids are ignored.
    pub fn unsubscribe(&mut self, id: SubscriberId) {
        self.subscribers.retain(|(sid, _)| *sid != id);
    }

    /// Open the add-task dialog.
    pub fn open_add_dialog(&mut self) {
        if !self.dialog_visible {
            self.dialog_visible = true;
            self.publish();
        }
    }

    /// Close the add-task dialog. Idempotent: closing a closed dialog is a
    /// no-op and publishes nothing.
    pub fn close_add_dialog(&mut self) {
        if self.dialog_visible {
            self.dialog_visible = false;
            self.publish();
        }
    }

    /// Append a new task with a fresh id and close the dialog, publishing
    /// once so subscribers see the append and the close as one transition.
    /// The text is taken as given; even an empty string is accepted.
    /// Returns the assigned id.
    pub fn add_task(&mut self, text: impl Into<String>) -> TaskId {
        let id = TaskId(self.next_task_id);
        self.next_task_id += 1;
        self.tasks.push(Task::new(id, text));
        self.dialog_visible = false;
        self.publish();
        id
    }

    /// Invert the checkbox on the task with this id.
    pub fn toggle_done(&mut self, id: TaskId) -> Result<(), StoreError> {
        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(StoreError::NotFound(id))?;
        task.done = !task.done;
        self.publish();
        Ok(())
    }

    /// Remove the task with this id, keeping the rest in order.
    pub fn remove_task(&mut self, id: TaskId) -> Result<(), StoreError> {
        let index = self
            .tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or(StoreError::NotFound(id))?;
        self.tasks.remove(index);
        self.publish();
        Ok(())
    }

    fn publish(&mut self) {
        let snapshot = Snapshot {
            tasks: self.tasks.clone(),
            dialog_visible: self.dialog_visible,
        };
        for (_, subscriber) in &mut self.subscribers {
            subscriber(&snapshot);
        }
    }
}
