//! UI Components
//!
//! Leptos components for the task list page.

mod notification_bar;
mod task_form;
mod task_list;
mod task_row;

pub use notification_bar::NotificationBar;
pub use task_form::TaskForm;
pub use task_list::TaskList;
pub use task_row::TaskRow;
