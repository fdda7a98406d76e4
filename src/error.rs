//! Error Types
//!
//! `ApiError` comes out of the HTTP layer; the UI folds it into either a
//! `LoadError` (initial fetch, fatal) or an `ActionError` (mutation, shown as a notification).

use reqwest::StatusCode;
use thiserror::Error;

/// Failure of a single request against the todo API
#[derive(Error, Debug)]
pub enum ApiError {
    /// Network failure or undecodable body
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-2xx status
    #[error("Server responded with {status}")]
    Status { status: StatusCode },

    #[error("Invalid API base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),

    #[error("API base URL cannot take a path: {0}")]
    BaseUrlCannotBeABase(String),
}

pub type Result<T> = std::result::Result<T, ApiError>;

/// Initial collection fetch failed; the session renders an error view only
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{message}")]
pub struct LoadError {
    pub message: String,
}

impl From<ApiError> for LoadError {
    fn from(err: ApiError) -> Self {
        Self { message: err.to_string() }
    }
}

/// Which mutation a request belonged to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Create,
    Update,
    Delete,
}

impl Operation {
    pub fn success_text(self) -> &'static str {
        match self {
            Operation::Create => "Task added successfully",
            Operation::Update => "Task updated successfully",
            Operation::Delete => "Task deleted successfully",
        }
    }

    pub fn failure_text(self) -> &'static str {
        match self {
            Operation::Create => "Failed to add task",
            Operation::Update => "Failed to update task",
            Operation::Delete => "Failed to delete task",
        }
    }
}

/// A create/update/delete failed; non-fatal
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{}: {message}", .operation.failure_text())]
pub struct ActionError {
    pub operation: Operation,
    pub message: String,
}

impl ActionError {
    pub fn new(operation: Operation, err: &ApiError) -> Self {
        Self { operation, message: err.to_string() }
    }
}
