//! Task Endpoints
//!
//! `GET|POST /api/todo`, `PUT|DELETE /api/todo/{id}`.

use reqwest::Method;
use tracing::debug;

use super::{ensure_success, TaskApi};
use crate::error::Result;
use crate::models::{Task, TaskDraft, TaskId};

impl TaskApi {
    /// Full collection, in server order
    pub async fn list_tasks(&self) -> Result<Vec<Task>> {
        let url = self.collection_url();
        debug!(%url, "GET tasks");
        let response = self.request(Method::GET, url).send().await?;
        Ok(ensure_success(response)?.json().await?)
    }

    /// Returns the created task with its server-assigned id
    pub async fn create_task(&self, draft: &TaskDraft) -> Result<Task> {
        let url = self.collection_url();
        debug!(%url, task = %draft.task, is_done = draft.is_done, "POST task");
        let response = self.request(Method::POST, url).json(draft).send().await?;
        Ok(ensure_success(response)?.json().await?)
    }

    /// Full replacement of the task at `id`
    pub async fn update_task(&self, id: &TaskId, draft: &TaskDraft) -> Result<Task> {
        let url = self.task_url(id)?;
        debug!(%url, task = %draft.task, is_done = draft.is_done, "PUT task");
        let response = self.request(Method::PUT, url).json(draft).send().await?;
        Ok(ensure_success(response)?.json().await?)
    }

    /// Response body is ignored
    pub async fn delete_task(&self, id: &TaskId) -> Result<()> {
        let url = self.task_url(id)?;
        debug!(%url, "DELETE task");
        let response = self.request(Method::DELETE, url).send().await?;
        ensure_success(response)?;
        Ok(())
    }
}
