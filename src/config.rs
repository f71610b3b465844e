//! Configuration for the Todoist plugin.
//!
//! Configuration is loaded from environment variables or provided explicitly.

use crate::error::{Result, TodoistError};

/// Default Todoist REST API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.todoist.com/rest/v2";

/// Configuration for the Todoist service.
#[derive(Debug, Clone)]
pub struct TodoistConfig {
    /// API token (required).
    api_token: String,
    /// Base URL for the API.
    base_url: String,
}

impl TodoistConfig {
    /// Create a new configuration with an API token.
    ///
    /// # Errors
    ///
    /// Returns an error if the API token is empty.
    pub fn new<S: Into<String>>(api_token: S) -> Result<Self> {
        let api_token = api_token.into();
        if api_token.trim().is_empty() {
            return Err(TodoistError::Authentication(
                "Todoist API token cannot be empty".to_string(),
            ));
        }

        Ok(Self {
            api_token,
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Load configuration from environment variables.
    ///
    /// Required:
    /// - TODOIST_API_TOKEN
    ///
    /// Optional:
    /// - TODOIST_BASE_URL (default: https://api.todoist.com/rest/v2)
    ///
    /// # Errors
    ///
    /// Returns an error if TODOIST_API_TOKEN is not set or is empty.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let api_token = std::env::var("TODOIST_API_TOKEN")
            .map_err(|_| TodoistError::MissingSetting("TODOIST_API_TOKEN".to_string()))?;

        let mut config = Self::new(api_token)?;

        if let Ok(base_url) = std::env::var("TODOIST_BASE_URL") {
            if !base_url.is_empty() {
                config.base_url = base_url;
            }
        }

        Ok(config)
    }

    /// Get the API token.
    pub fn api_token(&self) -> &str {
        &self.api_token
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Set the base URL.
    pub fn with_base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Validate configuration.
    pub fn validate(&self) -> Result<()> {
        if self.api_token.trim().is_empty() {
            return Err(TodoistError::Authentication(
                "Todoist API token cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}
