#![allow(missing_docs)]
//! elizaOS Todoist Plugin (Rust)
//!
//! A Todoist integration plugin for elizaOS: exposes task and project
//! operations (create/complete/list tasks, create projects) as a
//! parameter-driven dispatch node over the Todoist REST API v2.
//!
//! # Example
//!
//! ```rust,ignore
//! use elizaos_plugin_todoist::{dispatcher, TodoistConfig, TodoistService, WorkItem};
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = TodoistConfig::from_env()?;
//!     let service = TodoistService::new(config)?;
//!
//!     let items = vec![WorkItem::new(json!({
//!         "resource": "task",
//!         "operation": "create",
//!         "content": "Buy milk",
//!         "priority": 1,
//!     }))];
//!
//!     let output = dispatcher::run_items(&service, &items, false).await?;
//!     println!("created: {}", output[0].json);
//!     Ok(())
//! }
//! ```

#![deny(unsafe_code)]

pub mod config;
pub mod dispatcher;
pub mod error;
pub mod service;
pub mod types;

pub use config::{TodoistConfig, DEFAULT_BASE_URL};
pub use error::{Result, TodoistError};
pub use service::{RequestSpec, TodoistService};
pub use types::{OperationRequest, Priority, Resource, ResponseItem, WorkItem};

/// Plugin metadata
pub const PLUGIN_NAME: &str = "todoist";
/// Plugin description
pub const PLUGIN_DESCRIPTION: &str = "Interact with Todoist API for task management";
/// Plugin version
pub const PLUGIN_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Plugin definition for elizaOS
pub struct TodoistPlugin {
    pub name: &'static str,
    pub description: &'static str,
}

impl TodoistPlugin {
    pub const fn new() -> Self {
        Self {
            name: "@elizaos/plugin-todoist-rs",
            description: PLUGIN_DESCRIPTION,
        }
    }

    /// Get all operations provided by this plugin.
    pub fn operations() -> Vec<&'static str> {
        vec![
            "CREATE_TODOIST_TASK",
            "COMPLETE_TODOIST_TASK",
            "GET_TODOIST_TASKS",
            "CREATE_TODOIST_PROJECT",
        ]
    }
}

impl Default for TodoistPlugin {
    fn default() -> Self {
        Self::new()
    }
}

/// The main plugin instance
pub static PLUGIN: TodoistPlugin = TodoistPlugin::new();

/// Create a TodoistService from environment variables.
///
/// # Errors
///
/// Returns an error if configuration is invalid.
pub fn create_service_from_env() -> Result<TodoistService> {
    let config = TodoistConfig::from_env()?;
    TodoistService::new(config)
}
