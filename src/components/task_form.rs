//! Task Form Component
//!
//! Single form used for both adding a task and updating the one being edited.

use leptos::prelude::*;

use crate::context::use_task_context;
use crate::store::TaskListStateStoreFields;

/// Add/update form; the completion checkbox only appears while editing
#[component]
pub fn TaskForm() -> impl IntoView {
    let ctx = use_task_context();

    let is_editing = move || ctx.store.editing().with(Option::is_some);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.submit();
    };

    view! {
        <form class="task-form" on:submit=on_submit>
            <input
                type="text"
                placeholder="Add a new task"
                required=true
                prop:value=move || ctx.store.input().get()
                on:input=move |ev| ctx.set_input(event_target_value(&ev))
            />
            <Show when=is_editing>
                <label class="done-toggle">
                    <input
                        type="checkbox"
                        prop:checked=move || ctx.store.is_done().get()
                        on:change=move |ev| ctx.set_done(event_target_checked(&ev))
                    />
                    "Mark as completed"
                </label>
            </Show>
            <button type="submit">
                {move || if is_editing() { "Update Task" } else { "Add Task" }}
            </button>
        </form>
    }
}
