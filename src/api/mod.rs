//! Todo API Client
//!
//! Frontend bindings to the REST backend, organized by resource.

mod task;

use reqwest::header::ACCEPT;
use reqwest::{Client, Method, RequestBuilder, Response};
use url::Url;

use crate::error::{ApiError, Result};
use crate::models::TaskId;

/// HTTP client for the todo collection endpoint
#[derive(Debug, Clone)]
pub struct TaskApi {
    http_client: Client,
    base_url: Url,
}

impl TaskApi {
    /// `base_url` is the collection endpoint, e.g. `http://127.0.0.1:8000/api/todo`
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::BaseUrlCannotBeABase(base_url.to_string()));
        }

        Ok(Self {
            http_client: Client::new(),
            base_url,
        })
    }

    fn collection_url(&self) -> Url {
        self.base_url.clone()
    }

    /// `{base}/{id}`, tolerating a trailing slash on the base
    fn task_url(&self, id: &TaskId) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| ApiError::BaseUrlCannotBeABase(self.base_url.to_string()))?
            .pop_if_empty()
            .push(&id.to_string());
        Ok(url)
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        self.http_client
            .request(method, url)
            .header(ACCEPT, "application/json")
    }
}

/// Any non-2xx status counts as a failed call
fn ensure_success(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(ApiError::Status { status })
    }
}
