//! Application Context
//!
//! Store and API client shared with every component via the Leptos Context API.
//! Requests run on the UI event loop; each outcome is applied to the store
//! when it resolves, so concurrent requests land in resolution order.

use leptos::prelude::*;
use leptos::task::spawn_local;
use tracing::{debug, info, warn};

use crate::api::TaskApi;
use crate::error::{ActionError, ApiError, LoadError, Operation};
use crate::models::{Task, TaskId};
use crate::store::{Submission, TaskListState, TaskStore};

#[derive(Clone, Copy)]
pub struct TaskContext {
    pub store: TaskStore,
    api: StoredValue<TaskApi>,
}

impl TaskContext {
    pub fn new(api: TaskApi) -> Self {
        Self {
            store: TaskStore::new(TaskListState::new()),
            api: StoredValue::new(api),
        }
    }

    /// Fetch the whole collection once; the outcome decides the load state
    pub fn load(&self) {
        let store = self.store;
        let api = self.api.get_value();
        spawn_local(async move {
            let outcome = match api.list_tasks().await {
                Ok(tasks) => {
                    info!(count = tasks.len(), "Loaded tasks");
                    Ok(tasks)
                }
                Err(err) => {
                    warn!(%err, "Failed to load tasks");
                    Err(LoadError::from(err))
                }
            };
            store.update(|state| state.loaded(outcome));
        });
    }

    /// Create or update, depending on whether a task is being edited
    pub fn submit(&self) {
        let Some(submission) = self.store.with_untracked(TaskListState::submission) else {
            return;
        };
        debug!(operation = ?submission.operation(), "Submitting task form");
        let store = self.store;
        let api = self.api.get_value();
        spawn_local(async move {
            match submission {
                Submission::Create(draft) => {
                    let outcome = api
                        .create_task(&draft)
                        .await
                        .map_err(|err| action_failed(Operation::Create, err));
                    store.update(|state| state.created(outcome));
                }
                Submission::Update(id, draft) => {
                    let outcome = api
                        .update_task(&id, &draft)
                        .await
                        .map_err(|err| action_failed(Operation::Update, err));
                    store.update(|state| state.updated(&id, outcome));
                }
            }
        });
    }

    pub fn delete(&self, id: TaskId) {
        let store = self.store;
        let api = self.api.get_value();
        spawn_local(async move {
            let outcome = api
                .delete_task(&id)
                .await
                .map_err(|err| action_failed(Operation::Delete, err));
            store.update(|state| state.deleted(&id, outcome));
        });
    }

    pub fn begin_edit(&self, task: Task) {
        self.store.update(|state| state.begin_edit(task));
    }

    pub fn set_input(&self, text: String) {
        self.store.update(|state| state.set_input(text));
    }

    pub fn set_done(&self, done: bool) {
        self.store.update(|state| state.set_done(done));
    }

    pub fn dismiss_notification(&self) {
        self.store.update(TaskListState::dismiss_notification);
    }
}

fn action_failed(operation: Operation, err: ApiError) -> ActionError {
    let err = ActionError::new(operation, &err);
    warn!(%err, "Task request failed");
    err
}

/// Get the task context provided by `App`
pub fn use_task_context() -> TaskContext {
    expect_context::<TaskContext>()
}
