//! HTTP execution against the Todoist REST API.
//!
//! [`TodoistService`] turns a typed [`OperationRequest`] into exactly one
//! HTTP call. The operation-to-request table lives in [`TodoistService::build_request`]
//! as an exhaustive match, so a new operation cannot be added without also
//! deciding its wire shape.

use reqwest::{Client, Method};
use serde_json::{json, Value};
use tracing::{debug, info};

use crate::config::TodoistConfig;
use crate::error::{Result, TodoistError};
use crate::types::OperationRequest;

/// A fully-resolved outbound request: method, URL, and optional JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestSpec {
    pub method: Method,
    pub url: String,
    pub body: Option<Value>,
}

/// Todoist API service.
///
/// Holds the credential and a shared HTTP client; all requests carry a
/// bearer token and JSON content type.
pub struct TodoistService {
    config: TodoistConfig,
    client: Client,
}

impl TodoistService {
    /// Create a new service.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured API token is empty.
    pub fn new(config: TodoistConfig) -> Result<Self> {
        config.validate()?;
        info!("Todoist service initialized");

        Ok(Self {
            config,
            client: Client::new(),
        })
    }

    /// Get the configuration.
    pub fn config(&self) -> &TodoistConfig {
        &self.config
    }

    /// Resolve an operation to its request shape.
    pub fn build_request(&self, op: &OperationRequest) -> RequestSpec {
        let base = self.config.base_url();

        match op {
            OperationRequest::TaskCreate {
                content,
                description,
                priority,
            } => {
                let mut body = json!({
                    "content": content,
                    "priority": priority.api_value(),
                });
                if let Some(description) = description {
                    body["description"] = json!(description);
                }
                RequestSpec {
                    method: Method::POST,
                    url: format!("{base}/tasks"),
                    body: Some(body),
                }
            }
            OperationRequest::TaskComplete { task_id } => RequestSpec {
                method: Method::POST,
                url: format!("{base}/tasks/{task_id}/close"),
                body: None,
            },
            OperationRequest::TaskList { project_id } => {
                let url = match project_id {
                    Some(project_id) => format!("{base}/tasks?project_id={project_id}"),
                    None => format!("{base}/tasks"),
                };
                RequestSpec {
                    method: Method::GET,
                    url,
                    body: None,
                }
            }
            OperationRequest::ProjectCreate { name } => RequestSpec {
                method: Method::POST,
                url: format!("{base}/projects"),
                body: Some(json!({ "name": name })),
            },
        }
    }

    /// Execute one operation and decode the response body.
    ///
    /// An empty response body (e.g. from closing a task) decodes to
    /// `Value::Null`; normalization downstream turns that into `{}`.
    ///
    /// # Errors
    ///
    /// Returns `Authentication` for 401 responses, `Api` for any other
    /// non-success status (with the raw body as the message), and
    /// `Network`/`Json` for transport and decode failures.
    pub async fn execute(&self, op: &OperationRequest) -> Result<Value> {
        let spec = self.build_request(op);
        debug!(method = %spec.method, url = %spec.url, "dispatching Todoist request");

        let mut request = self
            .client
            .request(spec.method, &spec.url)
            .header(
                "Authorization",
                format!("Bearer {}", self.config.api_token()),
            )
            .header("Content-Type", "application/json");

        if let Some(body) = &spec.body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();

        if status.as_u16() == 401 {
            let text = response.text().await.unwrap_or_default();
            return Err(TodoistError::Authentication(text));
        }
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(TodoistError::Api {
                status: status.as_u16(),
                message: text,
            });
        }

        let text = response.text().await?;
        if text.trim().is_empty() {
            return Ok(Value::Null);
        }

        Ok(serde_json::from_str(&text)?)
    }
}
