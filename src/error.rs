#![allow(missing_docs)]

use thiserror::Error;

pub type Result<T> = std::result::Result<T, TodoistError>;

#[derive(Error, Debug)]
pub enum TodoistError {
    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Missing required parameter: {0}")]
    MissingParameter(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Missing setting: {0}")]
    MissingSetting(String),

    #[error("Operation failed for item {index}: {source}")]
    Item {
        index: usize,
        #[source]
        source: Box<TodoistError>,
    },
}

impl TodoistError {
    /// Wrap an error with the index of the work item it occurred on.
    pub fn for_item(index: usize, source: TodoistError) -> Self {
        TodoistError::Item {
            index,
            source: Box::new(source),
        }
    }
}
