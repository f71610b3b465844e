#![allow(missing_docs)]
//! Data model for the Todoist plugin.
//!
//! The central type is [`OperationRequest`]: a closed union of the four
//! operations the node supports, built from a work item's raw parameter bag
//! by a pure mapping function. Adding an operation means adding a variant
//! and a match arm in the service's request builder.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::error::{Result, TodoistError};

/// The Todoist entity type an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Resource {
    Task,
    Project,
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Resource::Task => write!(f, "task"),
            Resource::Project => write!(f, "project"),
        }
    }
}

/// Task priority as the four named UI levels.
///
/// Todoist reverses the scale on the wire: UI "Priority 1" is the most
/// urgent and maps to API value 4, down to UI "Priority 4" mapping to API
/// value 1. The mapping is a bijection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    P1,
    P2,
    P3,
    P4,
}

impl Priority {
    /// Build from a UI level in 1..=4.
    pub fn from_level(level: u64) -> Result<Self> {
        match level {
            1 => Ok(Priority::P1),
            2 => Ok(Priority::P2),
            3 => Ok(Priority::P3),
            4 => Ok(Priority::P4),
            other => Err(TodoistError::InvalidParameter(format!(
                "priority must be a level between 1 and 4, got {other}"
            ))),
        }
    }

    /// The UI level, 1..=4.
    pub fn level(&self) -> u64 {
        match self {
            Priority::P1 => 1,
            Priority::P2 => 2,
            Priority::P3 => 3,
            Priority::P4 => 4,
        }
    }

    /// The value sent to the API: level 1 -> 4, level 4 -> 1.
    pub fn api_value(&self) -> u64 {
        5 - self.level()
    }
}

impl Default for Priority {
    // The original node defaults new tasks to the lowest urgency.
    fn default() -> Self {
        Priority::P4
    }
}

/// One derived operation, ready to be turned into an HTTP request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationRequest {
    TaskCreate {
        content: String,
        description: Option<String>,
        priority: Priority,
    },
    TaskComplete {
        task_id: String,
    },
    TaskList {
        project_id: Option<String>,
    },
    ProjectCreate {
        name: String,
    },
}

fn required_str(params: &Value, name: &str) -> Result<String> {
    params
        .get(name)
        .and_then(|v| v.as_str())
        .filter(|s| !s.is_empty())
        .map(String::from)
        .ok_or_else(|| TodoistError::MissingParameter(name.to_string()))
}

fn optional_str(params: &Value, name: &str) -> Option<String> {
    params
        .get(name)
        .and_then(|v| v.as_str())
        .filter(|s| !s.is_empty())
        .map(String::from)
}

impl OperationRequest {
    /// Map a raw parameter bag to a typed operation.
    ///
    /// `resource` defaults to `task` and `operation` to `create` when
    /// absent, matching the node's parameter defaults. Missing required
    /// parameters and unknown resource/operation values are errors.
    pub fn from_params(params: &Value) -> Result<Self> {
        let resource = params
            .get("resource")
            .and_then(|v| v.as_str())
            .unwrap_or("task");
        let operation = params
            .get("operation")
            .and_then(|v| v.as_str())
            .unwrap_or("create");

        match (resource, operation) {
            ("task", "create") => {
                let content = required_str(params, "content")?;
                let description = optional_str(params, "description");
                let priority = match params.get("priority") {
                    None | Some(Value::Null) => Priority::default(),
                    Some(v) => {
                        let level = v.as_u64().ok_or_else(|| {
                            TodoistError::InvalidParameter(
                                "priority must be an integer level".to_string(),
                            )
                        })?;
                        Priority::from_level(level)?
                    }
                };
                Ok(OperationRequest::TaskCreate {
                    content,
                    description,
                    priority,
                })
            }
            ("task", "complete") => Ok(OperationRequest::TaskComplete {
                task_id: required_str(params, "taskId")?,
            }),
            ("task", "getMany") => Ok(OperationRequest::TaskList {
                project_id: optional_str(params, "projectId"),
            }),
            ("project", "create") => Ok(OperationRequest::ProjectCreate {
                name: required_str(params, "name")?,
            }),
            (resource, operation) => Err(TodoistError::InvalidParameter(format!(
                "unsupported operation \"{operation}\" for resource \"{resource}\""
            ))),
        }
    }

    /// The resource this operation targets.
    pub fn resource(&self) -> Resource {
        match self {
            OperationRequest::TaskCreate { .. }
            | OperationRequest::TaskComplete { .. }
            | OperationRequest::TaskList { .. } => Resource::Task,
            OperationRequest::ProjectCreate { .. } => Resource::Project,
        }
    }
}

/// One unit of input, carrying the raw per-item parameter bag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkItem {
    pub params: Value,
}

impl WorkItem {
    pub fn new(params: Value) -> Self {
        Self { params }
    }
}

impl From<Value> for WorkItem {
    fn from(params: Value) -> Self {
        Self::new(params)
    }
}

/// One normalized output record: either API data or an error descriptor
/// paired with the index of the item that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseItem {
    pub json: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paired_item: Option<usize>,
}

impl ResponseItem {
    /// Wrap a successful API response object.
    pub fn data(json: Value) -> Self {
        Self {
            json,
            paired_item: None,
        }
    }

    /// Record a per-item failure, tagged with the source item index.
    pub fn error(message: impl Into<String>, index: usize) -> Self {
        Self {
            json: json!({ "error": message.into() }),
            paired_item: Some(index),
        }
    }

    /// Whether this record is an error descriptor.
    pub fn is_error(&self) -> bool {
        self.json.get("error").is_some()
    }
}
