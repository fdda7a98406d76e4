//! Task Row Component
//!
//! A single task with its edit and delete actions.

use leptos::prelude::*;

use crate::context::use_task_context;
use crate::models::Task;

#[component]
pub fn TaskRow(task: Task) -> impl IntoView {
    let ctx = use_task_context();

    let id = task.id.clone();
    let line = task.display_line();
    let class = if task.is_done { "task-row completed" } else { "task-row" };

    view! {
        <li class=class>
            <span class="task-text">{line}</span>
            <div class="task-actions">
                <button class="edit-btn" on:click=move |_| ctx.begin_edit(task.clone())>"Edit"</button>
                <button class="delete-btn" on:click=move |_| ctx.delete(id.clone())>"Delete"</button>
            </div>
        </li>
    }
}
