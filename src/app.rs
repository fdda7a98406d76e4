//! Todo List Frontend App
//!
//! Top-level view: loads the collection once, then renders the list UI,
//! or a loading/error view in its place.

use leptos::prelude::*;
use tracing::error;

use crate::api::TaskApi;
use crate::components::{NotificationBar, TaskForm, TaskList};
use crate::config::AppConfig;
use crate::context::TaskContext;
use crate::store::{LoadState, TaskListStateStoreFields};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let api = match TaskApi::new(&config.api_base_url) {
        Ok(api) => api,
        Err(err) => {
            error!(%err, "Cannot set up todo API client");
            return view! { <ErrorView message=err.to_string() /> }.into_any();
        }
    };

    let ctx = TaskContext::new(api);
    provide_context(ctx);

    // Initial load, once per session
    Effect::new(move |_| ctx.load());

    view! {
        {move || match ctx.store.load_state().get() {
            LoadState::Loading => view! { <div class="loading">"Loading..."</div> }.into_any(),
            LoadState::Errored(err) => view! { <ErrorView message=err.message /> }.into_any(),
            LoadState::Ready => view! {
                <div class="container">
                    <h1>"Todo List"</h1>
                    <NotificationBar />
                    <TaskForm />
                    <TaskList />
                </div>
            }.into_any(),
        }}
    }
    .into_any()
}

/// Full replacement view for a failed initial load
#[component]
fn ErrorView(message: String) -> impl IntoView {
    view! { <div class="load-error">"Error: " {message}</div> }
}
