//! Notification Bar Component
//!
//! Result of the last mutation, shown until dismissed.

use leptos::prelude::*;

use crate::context::use_task_context;
use crate::store::{NotificationKind, TaskListStateStoreFields};

#[component]
pub fn NotificationBar() -> impl IntoView {
    let ctx = use_task_context();

    view! {
        {move || ctx.store.notification().get().map(|notification| {
            let class = match notification.kind {
                NotificationKind::Success => "notification success",
                NotificationKind::Failure => "notification failure",
            };
            view! {
                <div class=class role="status">
                    {notification.message}
                    <button
                        type="button"
                        class="notification-close"
                        on:click=move |_| ctx.dismiss_notification()
                    >
                        "×"
                    </button>
                </div>
            }
        })}
    }
}
