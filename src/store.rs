//! Task List State Store
//!
//! All view state in one struct, wrapped in a reactive_stores `Store` for
//! field-level reactivity. Every operation is a plain `&mut self` transition
//! that takes the outcome of its request, so both branches can be exercised
//! without a network.

use reactive_stores::Store;

use crate::error::{ActionError, LoadError, Operation};
use crate::models::{Task, TaskDraft, TaskId};

/// Initial fetch progress; `Ready` and `Errored` are terminal
#[derive(Clone, Debug, Default, PartialEq)]
pub enum LoadState {
    #[default]
    Loading,
    Ready,
    Errored(LoadError),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Failure,
}

/// Message shown after a mutation until the user dismisses it
#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

/// What a form submission turns into
#[derive(Clone, Debug, PartialEq)]
pub enum Submission {
    Create(TaskDraft),
    Update(TaskId, TaskDraft),
}

impl Submission {
    pub fn operation(&self) -> Operation {
        match self {
            Submission::Create(_) => Operation::Create,
            Submission::Update(..) => Operation::Update,
        }
    }
}

/// View state for the task list
#[derive(Clone, Debug, Default, Store)]
pub struct TaskListState {
    pub load_state: LoadState,
    /// Cached server copies, in server order plus appended creations
    pub tasks: Vec<Task>,
    /// Form text field
    pub input: String,
    /// Form completion checkbox
    pub is_done: bool,
    /// Task loaded into the form, if any
    pub editing: Option<Task>,
    pub notification: Option<Notification>,
}

/// Type alias for the store
pub type TaskStore = Store<TaskListState>;

impl TaskListState {
    pub fn new() -> Self {
        Self::default()
    }

    // ========================
    // Local Transitions
    // ========================

    pub fn set_input(&mut self, text: String) {
        self.input = text;
    }

    pub fn set_done(&mut self, done: bool) {
        self.is_done = done;
    }

    /// Load `task` into the form; replaces any edit already in progress
    pub fn begin_edit(&mut self, task: Task) {
        self.input = task.task.clone();
        self.is_done = task.is_done;
        self.editing = Some(task);
    }

    pub fn dismiss_notification(&mut self) {
        self.notification = None;
    }

    /// Request implied by the current form, or `None` when the description is empty
    pub fn submission(&self) -> Option<Submission> {
        if self.input.is_empty() {
            return None;
        }
        let draft = TaskDraft {
            task: self.input.clone(),
            is_done: self.is_done,
        };
        Some(match &self.editing {
            Some(task) => Submission::Update(task.id.clone(), draft),
            None => Submission::Create(draft),
        })
    }

    // ========================
    // Request Outcomes
    // ========================

    pub fn loaded(&mut self, outcome: Result<Vec<Task>, LoadError>) {
        match outcome {
            Ok(tasks) => {
                self.tasks = tasks;
                self.load_state = LoadState::Ready;
            }
            Err(err) => self.load_state = LoadState::Errored(err),
        }
    }

    pub fn created(&mut self, outcome: Result<Task, ActionError>) {
        match outcome {
            Ok(task) => {
                self.tasks.push(task);
                // An edit started while the create was in flight stays open
                self.input.clear();
                self.is_done = false;
                self.notify_success(Operation::Create);
            }
            Err(err) => self.notify_failure(&err),
        }
    }

    pub fn updated(&mut self, id: &TaskId, outcome: Result<Task, ActionError>) {
        match outcome {
            Ok(task) => {
                if let Some(slot) = self.tasks.iter_mut().find(|t| &t.id == id) {
                    *slot = task;
                }
                self.clear_form();
                self.notify_success(Operation::Update);
            }
            Err(err) => self.notify_failure(&err),
        }
    }

    pub fn deleted(&mut self, id: &TaskId, outcome: Result<(), ActionError>) {
        match outcome {
            Ok(()) => {
                self.tasks.retain(|t| &t.id != id);
                self.notify_success(Operation::Delete);
            }
            Err(err) => self.notify_failure(&err),
        }
    }

    fn clear_form(&mut self) {
        self.input.clear();
        self.is_done = false;
        self.editing = None;
    }

    fn notify_success(&mut self, operation: Operation) {
        self.notification = Some(Notification {
            kind: NotificationKind::Success,
            message: operation.success_text().to_string(),
        });
    }

    fn notify_failure(&mut self, err: &ActionError) {
        self.notification = Some(Notification {
            kind: NotificationKind::Failure,
            message: err.operation.failure_text().to_string(),
        });
    }
}
