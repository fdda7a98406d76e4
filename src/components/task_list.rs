//! Task List Component
//!
//! Renders the cached collection in order.

use leptos::prelude::*;

use crate::components::TaskRow;
use crate::context::use_task_context;
use crate::store::TaskListStateStoreFields;

#[component]
pub fn TaskList() -> impl IntoView {
    let ctx = use_task_context();

    view! {
        <ul class="task-list">
            <For
                each=move || ctx.store.tasks().get()
                // Key on every displayed field so a replaced task re-renders
                key=|task| (task.id.clone(), task.task.clone(), task.is_done)
                children=move |task| view! { <TaskRow task=task /> }
            />
        </ul>
    }
}
